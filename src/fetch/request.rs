//! Page fetch and icon link discovery.
//!
//! First network stage of the pipeline: GET the normalized URL, remember where
//! the redirects ended, and look for a declared icon in the body.

use log::debug;

use crate::app::log_message;
use crate::config::ResolverConfig;
use crate::fetch::client::HttpClient;
use crate::html::{extract_href, find_icon_link_tag};

/// What the page fetch learned about the icon. Lives for one resolution only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IconInfo {
    /// Declared `href`, or `None` to use `/favicon.ico` on `final_url`'s origin
    pub path: Option<String>,
    /// URL after redirects; the requested URL when the fetch failed
    pub final_url: String,
}

/// Scans page text for a declared icon, logging each step in verbose mode.
fn scan_for_icon_link(html: &str, config: &ResolverConfig) -> Option<String> {
    if html.is_empty() {
        return None;
    }

    let Some(tag) = find_icon_link_tag(html) else {
        log_message(config, "Cannot get link tag");
        return None;
    };
    log_message(config, format_args!("Get link tag: {tag}"));

    match extract_href(tag).filter(|href| !href.is_empty()) {
        Some(href) => {
            log_message(config, format_args!("Get href from link: {href}"));
            Some(href.to_string())
        }
        None => {
            log_message(config, "Cannot get href from link tag");
            None
        }
    }
}

/// Fetches `full_url` and extracts the icon reference from its body.
///
/// Never fails: a transport error (DNS, refused, timeout, redirect cap) is
/// treated as an empty page whose final URL is `full_url`, which sends the
/// caller to the `/favicon.ico` fallback. The status code is not checked;
/// error pages frequently still carry the site's `<link rel="icon">`.
pub(crate) async fn fetch_icon_info<C: HttpClient>(
    client: &C,
    full_url: &str,
    config: &ResolverConfig,
) -> IconInfo {
    let (text, final_url) = match client.get(full_url).await {
        Ok(response) => {
            let final_url = if response.final_url.is_empty() {
                full_url.to_string()
            } else {
                response.final_url.clone()
            };
            (response.text(), final_url)
        }
        Err(e) => {
            debug!("Page fetch failed for {}: {}", full_url, e);
            log_message(config, format_args!("Cannot fetch page {full_url}: {e}"));
            (String::new(), full_url.to_string())
        }
    };

    IconInfo {
        path: scan_for_icon_link(&text, config),
        final_url,
    }
}
