//! Network stages of favicon resolution.
//!
//! This module provides:
//! - The `HttpClient` transport seam and its `reqwest` implementation
//! - The page fetch that discovers a declared icon (`request`)
//! - Icon URL resolution and the validated icon download (`favicon`)

mod client;
mod favicon;
mod request;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use client::{HttpClient, HttpResponse, ReqwestClient};
pub use favicon::{fetch_icon_bytes, FetchedIcon};
pub(crate) use favicon::resolve_icon_url;
pub(crate) use request::fetch_icon_info;
