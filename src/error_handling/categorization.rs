//! Error categorization.
//!
//! Maps `reqwest` failures onto the transport-agnostic [`FetchError`].

use super::types::FetchError;

/// Categorizes a `reqwest::Error` into a `FetchError`.
///
/// Timeouts are checked first: a request that times out while following a
/// redirect reports both `is_timeout()` and `is_redirect()`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchError {
    let message = error.to_string();
    if error.is_timeout() {
        FetchError::Timeout(message)
    } else if error.is_redirect() {
        FetchError::Redirect(message)
    } else if error.is_connect() {
        FetchError::Connect(message)
    } else if error.is_body() || error.is_decode() {
        FetchError::Body(message)
    } else {
        FetchError::Other(message)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        categorize_reqwest_error(&error)
    }
}
