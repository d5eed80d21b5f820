//! Resolver configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, redirect cap, fallback path)
//! - The immutable `ResolverConfig` and the partial `ConfigOverrides` merged over it
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{ConfigOverrides, LogFormat, LogLevel, Opt, ResolverConfig};
