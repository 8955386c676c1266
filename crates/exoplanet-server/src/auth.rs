//! API key verification
//!
//! The inference endpoint is gated by a shared secret in a fixed request
//! header. The comparison is constant-time so response timing leaks nothing
//! about the secret's length or content.

use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Verify the key presented in `headers` against the configured token.
///
/// Missing header, empty value and mismatch are all the same failure.
pub fn verify_api_key(headers: &HeaderMap, expected: &str) -> bool {
    let provided = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if provided.is_empty() {
        return false;
    }

    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}
