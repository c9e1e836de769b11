//! Error types for the GitHub API client.

use crate::types::ErrorEntry;

/// Errors that can occur when making GitHub API requests.
///
/// Every non-success HTTP status is folded into exactly one of the
/// categories below, so downstream code can classify failures with a
/// total `match` instead of inspecting raw status codes.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// HTTP 401. Credentials were missing or rejected.
    #[error("GitHub rejected the request credentials (HTTP 401)")]
    Unauthorized,
    /// HTTP 403.
    #[error("GitHub denied access to the resource (HTTP 403)")]
    Forbidden,
    /// HTTP 404.
    #[error("Resource does not exist on GitHub (HTTP 404)")]
    NotFound,
    /// HTTP 422. Carries the structured validation entries from the
    /// response body; the list is empty when the body had none or could
    /// not be parsed.
    #[error("GitHub could not process the request (HTTP 422)")]
    UnprocessableEntity { errors: Vec<ErrorEntry> },
    /// Any 5xx status.
    #[error("GitHub server error (HTTP {status})")]
    ServerError { status: u16 },
    /// A non-success status outside the recognized categories, with a
    /// body snippet.
    #[error("Unexpected response from GitHub (HTTP {status}): {body}")]
    Unexpected { status: u16, body: String },
    /// A success response whose body could not be deserialized.
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),
    /// Transport-level failure (connect, timeout, body read).
    #[error("Network error")]
    Network(#[from] reqwest::Error),
}
