//! Pre-configured client construction.

use github_api::Client;

/// Builds a client authenticating at the application level with the given
/// OAuth app credentials, with automatic pagination enabled.
///
/// The credentials are opaque configuration values sourced by the caller
/// (a secrets store, typically); they are not validated or logged here and
/// no request is made. Invalid credentials surface on first use as an
/// error the translator maps to [`GitHubError::Forbidden`](crate::GitHubError).
pub fn application_client(client_id: &str, client_secret: &str) -> Client {
    Client::new()
        .credentials(client_id, client_secret)
        .auto_paginate(true)
}

#[cfg(test)]
mod tests {
    use super::application_client;

    #[test]
    fn application_client_auto_paginates() {
        let client = application_client("some-id", "some-secret");
        assert!(client.auto_paginates());
    }
}
