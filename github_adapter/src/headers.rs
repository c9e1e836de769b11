//! Response header helpers for callers relaying API data.

use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL};

/// Headers instructing intermediaries not to cache a relayed response,
/// for payloads reflecting live authorization state.
pub fn no_cache_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store"));
    headers
}
