//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use get_favicon::{FaviconResolver, ResolverConfig};

/// Bytes returned by every test resolver when no icon can be fetched.
pub const DEFAULT_ICON: &[u8] = b"DEFAULT-ICON";

/// Minimal ICO header, served as the "real" icon.
pub const ICO_BYTES: &[u8] = b"\x00\x00\x01\x00\x01\x00\x10\x10";

pub fn test_config() -> ResolverConfig {
    ResolverConfig {
        default_icon: DEFAULT_ICON.to_vec(),
        ..Default::default()
    }
}

pub fn resolver() -> FaviconResolver {
    FaviconResolver::new(test_config()).expect("client builds")
}

pub fn resolver_with_timeout(timeout: Duration) -> FaviconResolver {
    FaviconResolver::new(ResolverConfig {
        timeout,
        ..test_config()
    })
    .expect("client builds")
}
