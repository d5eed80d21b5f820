//! Error type definitions.
//!
//! This module defines all error types used throughout the crate.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Errors returned by [`crate::FaviconResolver::get_favicon`].
///
/// These are the only failures a caller ever sees; every network-layer
/// problem degrades into the default icon instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaviconError {
    /// The input URL was empty.
    #[error("Url cannot be empty")]
    EmptyUrl,

    /// The input URL is not an HTTP/HTTPS URL, even after prefixing `http://`.
    #[error("Url must be HTTP/HTTPS protocol: {0}")]
    InvalidUrl(String),
}

/// Transport-level failure reported by an [`crate::HttpClient`].
///
/// A distinct value rather than a panic or a fatal error, so each pipeline
/// stage can decide how to degrade.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The redirect cap was exceeded (or a redirect loop was detected).
    #[error("Too many redirects: {0}")]
    Redirect(String),

    /// The connection could not be established (DNS, refused, TLS).
    #[error("Connection failed: {0}")]
    Connect(String),

    /// The response body could not be read or decoded.
    #[error("Body read failed: {0}")]
    Body(String),

    /// Any other transport failure.
    #[error("Request failed: {0}")]
    Other(String),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error reading or parsing a configuration file.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
