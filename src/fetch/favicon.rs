//! Favicon URL resolution and icon download.
//!
//! Resolves the declared `href` (or the `/favicon.ico` fallback) against the
//! page's final URL, then downloads the icon, validating status and
//! Content-Type. Any failure yields the configured default icon.

use log::debug;
use url::Url;

use crate::app::log_message;
use crate::config::{ResolverConfig, FALLBACK_ICON_PATH, IMAGE_CONTENT_TYPE_PREFIX};
use crate::fetch::client::{HttpClient, HttpResponse};
use crate::fetch::request::IconInfo;

/// Icon bytes plus where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedIcon {
    /// Icon bytes, or a copy of the configured default icon
    pub data: Vec<u8>,
    /// `true` when `data` is the default icon
    pub is_default: bool,
}

/// Resolves a potentially-relative favicon href against a base URL.
///
/// Absolute hrefs are returned untouched; relative, root-relative and
/// protocol-relative ones are joined onto `base_url`.
fn resolve_favicon_url(href: &str, base_url: &str) -> Option<String> {
    if Url::parse(href).is_ok() {
        return Some(href.to_string());
    }

    Url::parse(base_url)
        .ok()
        .and_then(|base| base.join(href).ok())
        .map(|u| u.to_string())
}

/// Builds the fallback `/favicon.ico` URL on the final URL's origin.
///
/// Scheme, host and port are kept; path, query and fragment are dropped.
fn fallback_favicon_url(final_url: &str) -> Option<String> {
    Url::parse(final_url)
        .ok()
        .and_then(|base| base.join(FALLBACK_ICON_PATH).ok())
        .map(|u| u.to_string())
}

/// Picks the URL the icon is downloaded from.
///
/// A declared href that cannot be resolved is treated like no href at all.
pub(crate) fn resolve_icon_url(info: &IconInfo) -> String {
    info.path
        .as_deref()
        .and_then(|href| resolve_favicon_url(href, &info.final_url))
        .or_else(|| fallback_favicon_url(&info.final_url))
        .unwrap_or_else(|| {
            format!(
                "{}{}",
                info.final_url.trim_end_matches('/'),
                FALLBACK_ICON_PATH
            )
        })
}

/// Case-insensitive `image/` check on a Content-Type header value.
fn is_image_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| {
        ct.to_ascii_lowercase()
            .contains(IMAGE_CONTENT_TYPE_PREFIX)
    })
}

/// Returns the body if the response is a 2xx image, `None` otherwise.
fn accept_icon_response(response: HttpResponse, url: &str) -> Option<Vec<u8>> {
    if !response.is_success() {
        debug!("Favicon fetch returned {} for {}", response.status, url);
        return None;
    }

    let content_type = response.header("content-type");
    if !is_image_content_type(content_type) {
        debug!(
            "Favicon at {} has non-image Content-Type {:?}",
            url, content_type
        );
        return None;
    }

    Some(response.body)
}

/// Downloads the icon at `url`.
///
/// Never fails. Returns the body only for a 2xx response whose Content-Type
/// contains `image/`; a non-2xx status, a missing or non-image Content-Type,
/// a transport error or a timeout all yield `config.default_icon` unchanged.
pub async fn fetch_icon_bytes<C: HttpClient>(
    client: &C,
    url: &str,
    config: &ResolverConfig,
) -> FetchedIcon {
    let accepted = match client.get(url).await {
        Ok(response) => accept_icon_response(response, url),
        Err(e) => {
            debug!("Favicon fetch failed for {}: {}", url, e);
            None
        }
    };

    match accepted {
        Some(data) => {
            log_message(config, format_args!("Successfully get icon from url {url}"));
            FetchedIcon {
                data,
                is_default: false,
            }
        }
        None => {
            log_message(config, "Return default icon");
            FetchedIcon {
                data: config.default_icon.clone(),
                is_default: true,
            }
        }
    }
}
