//! Favicon resolution pipeline.
//!
//! `get_favicon` runs, strictly in order: normalize the input URL, fetch the
//! page, extract the declared icon link (or fall back to `/favicon.ico` on the
//! post-redirect origin), download the icon, and package the bytes with the
//! elapsed time. Each network call is attempted exactly once.

use std::sync::Arc;
use std::time::Instant;

use crate::app::{format_url, log_message};
use crate::config::ResolverConfig;
use crate::error_handling::{FaviconError, InitializationError};
use crate::fetch::{
    fetch_icon_bytes, fetch_icon_info, resolve_icon_url, HttpClient, ReqwestClient,
};

/// Outcome of one [`FaviconResolver::get_favicon`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaviconResult {
    /// Icon bytes, or the configured default icon
    pub data: Vec<u8>,
    /// Milliseconds from call start to completion (monotonic clock)
    pub spend_time: u64,
    /// URL the icon was requested from
    pub icon_url: String,
    /// `true` when `data` is the configured default icon
    pub is_default: bool,
}

/// Resolves favicons with a fixed configuration.
///
/// Holds only immutable state, so one instance can serve any number of
/// concurrent `get_favicon` calls (wrap it in an `Arc` to share across tasks).
///
/// # Examples
///
/// ```no_run
/// use get_favicon::{FaviconResolver, ResolverConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let resolver = FaviconResolver::new(ResolverConfig {
///     default_icon: std::fs::read("default.ico")?,
///     ..Default::default()
/// })?;
///
/// let result = resolver.get_favicon("rust-lang.org").await?;
/// println!(
///     "{} bytes from {} in {}ms",
///     result.data.len(),
///     result.icon_url,
///     result.spend_time
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FaviconResolver<C = ReqwestClient> {
    config: Arc<ResolverConfig>,
    client: C,
}

impl FaviconResolver<ReqwestClient> {
    /// Creates a resolver backed by a `reqwest` client built from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client
    /// cannot be built.
    pub fn new(config: ResolverConfig) -> Result<Self, InitializationError> {
        let client = ReqwestClient::new(&config)?;
        Ok(Self::with_client(config, client))
    }
}

impl<C: HttpClient> FaviconResolver<C> {
    /// Creates a resolver that sends its requests through `client`.
    pub fn with_client(config: ResolverConfig, client: C) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }

    /// The configuration captured at construction.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Normalizes `raw` with this resolver's query/auth/port policy.
    ///
    /// # Errors
    ///
    /// See [`crate::format_url`].
    pub fn format_url(&self, raw: &str) -> Result<String, FaviconError> {
        format_url(raw, &self.config)
    }

    /// Fetches the favicon of the site at `url`.
    ///
    /// Network problems never surface here: a failed page fetch falls back to
    /// `/favicon.ico` on the requested origin, and a failed or non-image icon
    /// fetch yields the configured default icon.
    ///
    /// # Errors
    ///
    /// * `FaviconError::EmptyUrl` if `url` is empty (no request is made)
    /// * `FaviconError::InvalidUrl` if `url` is not an HTTP/HTTPS URL
    pub async fn get_favicon(&self, url: &str) -> Result<FaviconResult, FaviconError> {
        if url.is_empty() {
            return Err(FaviconError::EmptyUrl);
        }

        let start = Instant::now();
        let full_url = format_url(url, &self.config)?;
        log_message(&self.config, format_args!("Begin to get icon for {url}"));

        let info = fetch_icon_info(&self.client, &full_url, &self.config).await;
        log_message(&self.config, format_args!("Get icon info {info:?}"));

        let icon_url = resolve_icon_url(&info);
        let icon = fetch_icon_bytes(&self.client, &icon_url, &self.config).await;

        Ok(FaviconResult {
            data: icon.data,
            spend_time: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            icon_url,
            is_default: icon.is_default,
        })
    }
}
