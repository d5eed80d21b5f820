//! Error handling.
//!
//! This module provides:
//! - Error type definitions
//! - Categorization of `reqwest` errors into transport failures
//!
//! Errors are split by who sees them:
//! - **FaviconError**: input validation, returned to the caller
//! - **FetchError**: transport failures, always recovered inside the pipeline
//! - **InitializationError**: logger, HTTP client and config file setup

mod categorization;
mod types;

// Re-export public API
pub use types::{FaviconError, FetchError, InitializationError};
