//! Minimal client for the GitHub REST v3 API.
//!
//! Supports anonymous and application-level (OAuth app client id + secret)
//! access, classifies every failed request into a closed [`ApiError`]
//! hierarchy, and optionally follows `Link` headers to auto-paginate list
//! endpoints.

mod client;
mod errors;
mod pagination;
pub mod types;

pub use self::client::Client;
pub use self::errors::ApiError;
