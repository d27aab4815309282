//! Effective base URL for relative-reference resolution.

use url::Url;

/// Resolve the effective base for a page.
///
/// `base_href` is the first qualifying `<base href>` value, if any. It is
/// resolved against the page URL; only an absolute http(s) result overrides.
/// Anything else (no base, unparsable href, non-web scheme) degrades silently
/// to the page URL itself.
pub fn resolve_base(page_url: &Url, base_href: Option<&str>) -> Url {
    if let Some(href) = base_href {
        if let Ok(resolved) = page_url.join(href.trim()) {
            if matches!(resolved.scheme(), "http" | "https") {
                return resolved;
            }
        }
    }
    page_url.clone()
}
