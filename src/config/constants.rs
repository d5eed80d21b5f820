//! Configuration constants.
//!
//! Defaults for the resolver and its HTTP transport.

use std::time::Duration;

// Network operation limits
/// Per-request timeout in seconds (page fetch and icon fetch each get their own)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Per-request timeout as a `Duration`
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);
/// Maximum number of redirect hops followed before the request fails
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Larger bodies are abandoned mid-stream to prevent memory exhaustion
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Default User-Agent string for HTTP requests.
///
/// Some sites serve a stripped page (or nothing) to clients that don't look
/// like a browser, which hides the `<link rel="icon">` tag.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Icon resolution
/// Root-relative path tried when the page declares no icon
pub const FALLBACK_ICON_PATH: &str = "/favicon.ico";
/// Content-Type prefix an icon response must carry (compared case-insensitively)
pub const IMAGE_CONTENT_TYPE_PREFIX: &str = "image/";
/// Scheme prepended once when the raw input has no host
pub const DEFAULT_SCHEME_PREFIX: &str = "http://";

// Logging
/// Prefix for verbose-mode messages
pub const LOG_PREFIX: &str = "[get-favicon]";
