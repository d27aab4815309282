//! Link collection: base resolution, href normalization, deduplication.
//!
//! This is the heart of the extractor. `collect_links` walks the scanned
//! hrefs once, normalizing each against the effective base and folding the
//! results into an order-preserving `LinkSet`.

mod base;
mod normalize;
mod set;

pub use base::resolve_base;
pub use normalize::normalize_href;
pub use set::LinkSet;

use url::Url;

use crate::markup::ScannedPage;

/// Collect the deduplicated, normalized links of a scanned page.
///
/// The effective base is the page URL unless the document carries a valid
/// `<base href>`. `tags` is the element scope (normally just `a`).
pub fn collect_links(page: &ScannedPage, page_url: &Url, tags: &[String]) -> LinkSet {
    let base = resolve_base(page_url, page.base_href());

    let mut links = LinkSet::new();
    for href in page.hrefs(tags) {
        if let Some(normalized) = normalize_href(&href, &base) {
            links.insert(normalized);
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors() -> Vec<String> {
        vec!["a".to_string()]
    }

    fn collect(html: &str, page_url: &str) -> Vec<String> {
        let page = ScannedPage::parse(html);
        let url = Url::parse(page_url).unwrap();
        collect_links(&page, &url, &anchors()).into_vec(false)
    }

    #[test]
    fn base_override_redirects_relative_hrefs() {
        let html = r#"
            <head><base href="https://cdn.example.com/assets/"></head>
            <body><a href="img/logo.png">logo</a></body>
        "#;
        assert_eq!(
            collect(html, "https://example.com/dir/page.html"),
            vec!["https://cdn.example.com/assets/img/logo.png"]
        );
    }

    #[test]
    fn without_base_resolves_against_page_directory() {
        let html = r#"<a href="img/logo.png">logo</a>"#;
        assert_eq!(
            collect(html, "https://example.com/dir/page.html"),
            vec!["https://example.com/dir/img/logo.png"]
        );
    }

    #[test]
    fn duplicate_after_fragment_strip_appears_once() {
        let html = r#"<a href="/a">1</a><a href="/a#x">2</a>"#;
        assert_eq!(collect(html, "https://x.com"), vec!["https://x.com/a"]);
    }

    #[test]
    fn non_web_and_empty_hrefs_dropped() {
        let html = r#"
            <a href="mailto:a@b.com">m</a>
            <a href="">empty</a>
            <a href="/keep">k</a>
            <a href="javascript:void(0)">j</a>
        "#;
        assert_eq!(collect(html, "https://x.com"), vec!["https://x.com/keep"]);
    }

    #[test]
    fn first_seen_order_preserved() {
        let html = r#"
            <a href="/zebra">z</a>
            <a href="/apple">a</a>
            <a href="/zebra">again</a>
            <a href="/mango">m</a>
        "#;
        assert_eq!(
            collect(html, "https://x.com"),
            vec![
                "https://x.com/zebra",
                "https://x.com/apple",
                "https://x.com/mango"
            ]
        );
    }
}
