//! Translation of [`ApiError`] values into the domain taxonomy.

use std::future::Future;

use github_api::types::ErrorEntry;
use github_api::ApiError;

use crate::GitHubError;

const FORBIDDEN_MESSAGE: &str = "You are forbidden from performing this action on github.com";
const NOT_FOUND_MESSAGE: &str = "Resource could not be found on github.com";
const SERVER_ERROR_MESSAGE: &str = "There seems to be a problem on github.com, please try again.";
/// Verbatim from the previous implementation, misspelling included;
/// existing callers match on this exact string.
const FALLBACK_MESSAGE: &str = "An error has occured";

/// Runs `work` and translates any [`ApiError`] it returns into a
/// [`GitHubError`]. Success values pass through unchanged.
pub async fn with_error_handling<T, F, Fut>(work: F) -> Result<T, GitHubError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    work().await.map_err(translate)
}

/// Maps one [`ApiError`] onto the three-kind domain taxonomy.
///
/// Unauthorized collapses into Forbidden. Categories outside the
/// recognized set (network failures, unexpected statuses, parse failures)
/// become a Generic error carrying the original error's text rather than
/// being dropped.
pub fn translate(err: ApiError) -> GitHubError {
    tracing::debug!("Translating API error: {}", err);
    match err {
        ApiError::Forbidden | ApiError::Unauthorized => {
            GitHubError::Forbidden(FORBIDDEN_MESSAGE.to_string())
        }
        ApiError::NotFound => GitHubError::NotFound(NOT_FOUND_MESSAGE.to_string()),
        ApiError::ServerError { .. } => GitHubError::Generic(SERVER_ERROR_MESSAGE.to_string()),
        ApiError::UnprocessableEntity { errors } => {
            GitHubError::Generic(build_error_message(errors.first()))
        }
        other => GitHubError::Generic(other.to_string()),
    }
}

/// Builds the user-facing message for a validation failure from its first
/// structured entry.
///
/// Present parts are joined with single spaces, in order: `resource`,
/// then either `message` alone or `code` (underscores to spaces) followed
/// by `field`. With no entry, or an entry with no usable parts, the fixed
/// fallback text is returned so the message is never empty.
fn build_error_message(entry: Option<&ErrorEntry>) -> String {
    let Some(entry) = entry else {
        return FALLBACK_MESSAGE.to_string();
    };

    let mut parts: Vec<String> = Vec::new();
    if let Some(resource) = &entry.resource {
        parts.push(resource.clone());
    }
    match &entry.message {
        Some(message) => parts.push(message.clone()),
        None => {
            if let Some(code) = &entry.code {
                parts.push(code.replace('_', " "));
            }
            if let Some(field) = &entry.field {
                parts.push(field.clone());
            }
        }
    }

    if parts.is_empty() {
        return FALLBACK_MESSAGE.to_string();
    }
    parts.join(" ")
}
