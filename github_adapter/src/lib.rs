//! Thin adapter over the [`github_api`] client.
//!
//! Provides a pre-configured application-level client factory and
//! translates the client's error hierarchy into the three-kind
//! [`GitHubError`] taxonomy callers are expected to handle. Nothing here
//! retries, caches, or paginates; those concerns belong to the underlying
//! client.

pub mod client;
pub mod error;
pub mod headers;
pub mod translate;

pub use github_api;
pub use github_api::{ApiError, Client};

pub use self::client::application_client;
pub use self::error::GitHubError;
pub use self::headers::no_cache_headers;
pub use self::translate::{translate, with_error_handling};
