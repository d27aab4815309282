//! Href normalization: the (RawHref, BaseURL) -> NormalizedURL function.
//!
//! Pure; no I/O. Resolution follows WHATWG/RFC 3986 reference composition via
//! `url::Url::join`, so every relative-reference class (scheme-relative,
//! absolute-path, relative-path, query-only, fragment-only) behaves the
//! standard way.

use url::Url;

/// Schemes that can appear in hrefs but never name a fetchable web resource.
const NON_WEB_SCHEMES: [&str; 4] = ["mailto", "javascript", "tel", "data"];

/// Normalize a raw href against `base`.
///
/// Returns the canonical absolute http(s) URL with the fragment stripped and
/// the query preserved, or `None` when the href is empty, carries a non-web
/// scheme, fails to resolve, or resolves outside http(s).
pub fn normalize_href(href: &str, base: &Url) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    if let Some(scheme) = explicit_scheme(href) {
        if NON_WEB_SCHEMES.iter().any(|s| scheme.eq_ignore_ascii_case(s)) {
            return None;
        }
    }

    let mut url = base.join(href).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    url.set_fragment(None);
    Some(url.to_string())
}

/// The scheme of `href` when it starts with one: a `[A-Za-z][A-Za-z0-9+.-]*`
/// prefix terminated by `:` before any `/`, `?`, or `#`.
fn explicit_scheme(href: &str) -> Option<&str> {
    let (scheme, _) = href.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(scheme)
    } else {
        None
    }
}
