//! Icon link extraction from raw HTML.
//!
//! This is a tolerant pattern match, not a parser: no DOM is built, so a
//! malformed page can still yield a usable `href` as long as the tag text
//! itself matches.

use std::sync::LazyLock;

use regex::Regex;

/// First `<link>` tag whose `rel` is `icon`, `shortcut icon` or `alternate icon`.
///
/// The single `.` after `rel=` stands for the opening quote, either style.
static ICON_LINK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<link[^>]+rel=.(?:icon|shortcut icon|alternate icon)[^>]+>")
        .expect("icon link pattern is valid")
});

/// Quoted `href` value on a single line. `regex` has no backreferences, so
/// each quote style gets its own alternative.
static HREF_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)href=(?:"([^"\r\n]*)"|'([^'\r\n]*)')"#).expect("href pattern is valid")
});

/// Returns the text of the first icon `<link>` tag in `html`.
pub(crate) fn find_icon_link_tag(html: &str) -> Option<&str> {
    ICON_LINK_TAG.find(html).map(|m| m.as_str())
}

/// Returns the quoted `href` value inside a single tag's text.
pub(crate) fn extract_href(tag: &str) -> Option<&str> {
    let captures = HREF_ATTRIBUTE.captures(tag)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str())
}

/// Extracts the declared icon `href` from a page.
///
/// Only the first matching `<link>` tag is considered. Returns `None` when
/// there is no such tag, when that tag has no quoted `href`, or when the
/// `href` is empty; callers treat all three as "fall back to `/favicon.ico`".
///
/// # Examples
///
/// ```
/// use get_favicon::extract_icon_link;
///
/// assert_eq!(
///     extract_icon_link(r#"<link rel="icon" href="/a.png">"#),
///     Some("/a.png".to_string())
/// );
/// assert_eq!(extract_icon_link("<p>no link</p>"), None);
/// ```
pub fn extract_icon_link(html: &str) -> Option<String> {
    let tag = find_icon_link_tag(html)?;
    extract_href(tag)
        .filter(|href| !href.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_icon_link_basic() {
        assert_eq!(
            extract_icon_link(r#"<link rel="icon" href="/a.png">"#),
            Some("/a.png".to_string())
        );
    }

    #[test]
    fn test_extract_icon_link_no_link() {
        assert_eq!(extract_icon_link("<p>no link</p>"), None);
    }

    #[test]
    fn test_extract_icon_link_rel_mismatch() {
        assert_eq!(
            extract_icon_link(r#"<link rel="stylesheet" href="/s.css">"#),
            None
        );
    }

    #[test]
    fn test_extract_icon_link_empty_input() {
        assert_eq!(extract_icon_link(""), None);
    }

    #[test]
    fn test_extract_icon_link_shortcut_and_alternate() {
        assert_eq!(
            extract_icon_link(r#"<link rel="shortcut icon" href="/favicon.ico">"#),
            Some("/favicon.ico".to_string())
        );
        assert_eq!(
            extract_icon_link(r#"<link rel="alternate icon" href="/alt.svg">"#),
            Some("/alt.svg".to_string())
        );
    }

    #[test]
    fn test_extract_icon_link_single_quotes() {
        assert_eq!(
            extract_icon_link("<link rel='icon' href='/single.png'>"),
            Some("/single.png".to_string())
        );
    }

    #[test]
    fn test_extract_icon_link_mixed_quote_styles() {
        assert_eq!(
            extract_icon_link(r#"<link rel='icon' href="/mixed.png" />"#),
            Some("/mixed.png".to_string())
        );
    }

    #[test]
    fn test_extract_icon_link_case_insensitive() {
        assert_eq!(
            extract_icon_link(r#"<LINK REL="Shortcut Icon" HREF="/UPPER.ICO">"#),
            Some("/UPPER.ICO".to_string())
        );
    }

    #[test]
    fn test_extract_icon_link_href_before_rel() {
        // The tag pattern needs `rel` before the closing `>`, but the href
        // scan covers the whole tag text.
        assert_eq!(
            extract_icon_link(r#"<link href="/first.png" rel="icon" type="image/png">"#),
            Some("/first.png".to_string())
        );
    }

    #[test]
    fn test_extract_icon_link_first_match_wins() {
        let html = r#"
            <head>
              <link rel="stylesheet" href="/s.css">
              <link rel="icon" href="/one.png">
              <link rel="icon" href="/two.png">
            </head>"#;
        assert_eq!(extract_icon_link(html), Some("/one.png".to_string()));
    }

    #[test]
    fn test_extract_icon_link_first_tag_without_href_is_absent() {
        // A later tag with an href is not consulted
        let html = r#"<link rel="icon" data-x="1"><link rel="icon" href="/later.png">"#;
        assert_eq!(extract_icon_link(html), None);
    }

    #[test]
    fn test_extract_icon_link_unquoted_href_is_absent() {
        assert_eq!(extract_icon_link(r#"<link rel="icon" href=/bare.png>"#), None);
    }

    #[test]
    fn test_extract_icon_link_empty_href_is_absent() {
        assert_eq!(extract_icon_link(r#"<link rel="icon" href="">"#), None);
    }

    #[test]
    fn test_extract_icon_link_apple_touch_icon_ignored() {
        assert_eq!(
            extract_icon_link(r#"<link rel="apple-touch-icon" href="/apple.png">"#),
            None
        );
    }

    #[test]
    fn test_extract_icon_link_multiline_tag() {
        let html = "<link\n  rel=\"icon\"\n  href=\"/multi.png\"\n>";
        assert_eq!(extract_icon_link(html), Some("/multi.png".to_string()));
    }

    #[test]
    fn test_extract_icon_link_href_value_split_across_lines() {
        assert_eq!(extract_icon_link("<link rel=\"icon\" href=\"/a\n.png\">"), None);
        assert_eq!(extract_icon_link("<link rel='icon' href='/a\r\n.png'>"), None);
    }

    #[test]
    fn test_extract_icon_link_absolute_href_untouched() {
        assert_eq!(
            extract_icon_link(r#"<link rel="icon" href="https://cdn.example.com/i.png?v=2&amp;x=1">"#),
            Some("https://cdn.example.com/i.png?v=2&amp;x=1".to_string())
        );
    }

    #[test]
    fn test_extract_icon_link_malformed_markup() {
        let html = r#"<html><head><link rel="icon" href="/broken.png"<body><p>unclosed"#;
        // The tag pattern only needs some non-`>` text after the rel value
        // and a later `>`, which the `<body>` tag provides.
        assert_eq!(extract_icon_link(html), Some("/broken.png".to_string()));
    }

    #[test]
    fn test_find_icon_link_tag_returns_tag_text() {
        let tag = find_icon_link_tag(r#"<p>x</p><link rel="icon" href="/a.png"><p>y</p>"#);
        assert_eq!(tag, Some(r#"<link rel="icon" href="/a.png">"#));
    }

    #[test]
    fn test_extract_href_both_quote_styles() {
        assert_eq!(extract_href(r#"<link href="/d.png">"#), Some("/d.png"));
        assert_eq!(extract_href("<link href='/s.png'>"), Some("/s.png"));
        assert_eq!(extract_href("<link>"), None);
    }
}
