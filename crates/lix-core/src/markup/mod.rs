//! Markup scanning: tolerant HTML parse plus href extraction.
//!
//! Wraps `scraper` so the rest of the pipeline only sees raw href strings in
//! document order. Malformed HTML never fails; whatever elements the parser
//! recovers are scanned.

use scraper::{Html, Selector};

/// A parsed page, ready for base/href scans.
pub struct ScannedPage {
    doc: Html,
}

impl ScannedPage {
    /// Parse an HTML body. Best-effort; never fails.
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    /// The href of the first `<base>` element with a non-empty href, in
    /// document order. Later `<base>` elements are ignored.
    pub fn base_href(&self) -> Option<&str> {
        let selector = Selector::parse("base[href]").ok()?;
        self.doc
            .select(&selector)
            .filter_map(|el| el.value().attr("href"))
            .find(|href| !href.trim().is_empty())
    }

    /// Raw href values of all elements whose tag is in `tags`, in document
    /// order. Tag names that do not form a valid selector are skipped.
    pub fn hrefs(&self, tags: &[String]) -> Vec<String> {
        let parts: Vec<String> = tags
            .iter()
            .map(|t| format!("{}[href]", t.trim()))
            .filter(|part| Selector::parse(part).is_ok())
            .collect();
        if parts.is_empty() {
            return Vec::new();
        }

        // A single grouped selector keeps matches in document order.
        let selector = match Selector::parse(&parts.join(", ")) {
            Ok(s) => s,
            Err(_) => return Vec::new(),
        };

        self.doc
            .select(&selector)
            .filter_map(|el| el.value().attr("href"))
            .map(|href| href.to_string())
            .collect()
    }
}
