//! Domain error taxonomy surfaced to callers of the adapter.

/// The closed set of error kinds produced by
/// [`with_error_handling`](crate::with_error_handling).
///
/// Each kind carries only a human-readable message. The underlying
/// [`ApiError`](crate::ApiError) is discarded during translation, so
/// callers depend on this taxonomy rather than on the client library's
/// error types. A typical HTTP caller maps `Forbidden` → 403,
/// `NotFound` → 404 and `Generic` → 502.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GitHubError {
    /// Any failure that is neither an authorization nor a lookup problem.
    #[error("{0}")]
    Generic(String),
    /// The remote host refused the action (HTTP 401/403).
    #[error("{0}")]
    Forbidden(String),
    /// The requested resource does not exist on the remote host.
    #[error("{0}")]
    NotFound(String),
}

impl GitHubError {
    /// The message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            Self::Generic(msg) | Self::Forbidden(msg) | Self::NotFound(msg) => msg,
        }
    }
}
