//! HTTP client initialization.
//!
//! This module builds the `reqwest::Client` behind [`crate::ReqwestClient`].

use std::sync::Arc;

use crate::config::ResolverConfig;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for both the page fetch and the icon fetch.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the resolver config
/// - Timeout from the resolver config (10 seconds by default)
/// - Redirect following enabled, capped at `max_redirects` hops (5 by default)
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &ResolverConfig) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
