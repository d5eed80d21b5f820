//! get_favicon library: website favicon resolution
//!
//! Given a site URL, this library fetches the page, looks for a declared
//! `<link rel="icon">` (also `shortcut icon` and `alternate icon`), falls back
//! to `/favicon.ico` on the post-redirect origin, downloads the icon and checks
//! that the response really is an image. When anything goes wrong on the
//! network side, the configured default icon is returned instead; the only
//! errors a caller sees are an empty or non-HTTP(S) input URL.
//!
//! # Example
//!
//! ```no_run
//! use get_favicon::{FaviconResolver, ResolverConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = FaviconResolver::new(ResolverConfig::default())?;
//! let result = resolver.get_favicon("example.com").await?;
//! println!("{} bytes in {}ms", result.data.len(), result.spend_time);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
mod fetch;
mod html;
pub mod initialization;
mod resolver;

// Re-export public API
pub use app::format_url;
pub use config::{ConfigOverrides, LogFormat, LogLevel, ResolverConfig};
pub use error_handling::{FaviconError, FetchError, InitializationError};
pub use fetch::{fetch_icon_bytes, FetchedIcon, HttpClient, HttpResponse, ReqwestClient};
pub use html::extract_icon_link;
pub use resolver::{FaviconResolver, FaviconResult};
