//! URL validation and normalization.

use url::Url;

use crate::config::{ResolverConfig, DEFAULT_SCHEME_PREFIX};
use crate::error_handling::FaviconError;

/// Parses `raw` and returns it only if it carries a host.
fn parse_with_host(raw: &str) -> Option<Url> {
    Url::parse(raw).ok().filter(|u| u.host_str().is_some())
}

/// Port written in `source`, including one equal to the scheme default
/// (which `Url::port()` reports as `None`).
fn explicit_port(source: &str, parsed: &Url) -> Option<u16> {
    if let Some(port) = parsed.port() {
        return Some(port);
    }
    let default_port = parsed.port_or_known_default()?;

    let after_scheme = source.split_once("://").map_or(source, |(_, rest)| rest);
    let authority = after_scheme
        .split(['/', '?', '#', '\\'])
        .next()
        .unwrap_or_default();
    let host_and_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);
    let (_, port) = host_and_port.rsplit_once(':')?;

    // "[::1]" splits inside the brackets and fails to parse here
    port.trim()
        .parse::<u16>()
        .ok()
        .filter(|port| *port == default_port)
}

/// Normalizes a raw URL into the canonical form the resolver requests.
///
/// Input without a host (`example.com`, `localhost:8080`) gets `http://`
/// prepended once. The result is `scheme://[userinfo@]host[:port]path[?query]`,
/// where userinfo, port and query are kept or dropped according to `config`.
/// The fragment is always dropped. A port written in the input is kept as
/// written, even when it equals the scheme default (`http://host:80/`).
///
/// # Errors
///
/// * `FaviconError::EmptyUrl` if `raw` is empty
/// * `FaviconError::InvalidUrl` if the scheme is not http/https, or the input
///   still has no host after the repair attempt
pub fn format_url(raw: &str, config: &ResolverConfig) -> Result<String, FaviconError> {
    if raw.is_empty() {
        return Err(FaviconError::EmptyUrl);
    }

    let repaired;
    let (source, parsed) = match parse_with_host(raw) {
        Some(parsed) => (raw, parsed),
        // single repair attempt
        None => {
            repaired = format!("{DEFAULT_SCHEME_PREFIX}{raw}");
            let parsed = parse_with_host(&repaired)
                .ok_or_else(|| FaviconError::InvalidUrl(raw.to_string()))?;
            (repaired.as_str(), parsed)
        }
    };

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(FaviconError::InvalidUrl(raw.to_string()));
    }
    // Checked by parse_with_host, but don't index into it blindly
    let host = parsed
        .host_str()
        .ok_or_else(|| FaviconError::InvalidUrl(raw.to_string()))?;

    let mut normalized = format!("{scheme}://");

    if !config.ignore_auth && !parsed.username().is_empty() {
        normalized.push_str(parsed.username());
        if let Some(password) = parsed.password() {
            normalized.push(':');
            normalized.push_str(password);
        }
        normalized.push('@');
    }

    normalized.push_str(host);

    if !config.ignore_port {
        if let Some(port) = explicit_port(source, &parsed) {
            normalized.push(':');
            normalized.push_str(&port.to_string());
        }
    }

    normalized.push_str(parsed.path());

    if !config.ignore_query {
        if let Some(query) = parsed.query() {
            normalized.push('?');
            normalized.push_str(query);
        }
    }

    Ok(normalized)
}
