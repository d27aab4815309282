//! Orchestration: one page in, one link list out.
//!
//! Sequences input validation, fetch (with retry), the content guard, the
//! markup scan, and link collection. Every failure short-circuits as a
//! `ScanError`; output writing is left to the caller so the library result
//! stays a plain `Vec<String>`.

mod guard;

pub use guard::ensure_html;

use std::time::Duration;
use url::Url;

use crate::error::ScanError;
use crate::fetch::{self, FetchOptions};
use crate::links;
use crate::markup::ScannedPage;
use crate::retry::RetryPolicy;

/// Everything one scan run needs. No process-wide defaults; the CLI (or any
/// embedding caller) builds this explicitly from config and flags.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Absolute http(s) URL of the page to scan.
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
    /// Element names whose hrefs are scanned (normally just "a").
    pub tags: Vec<String>,
    /// Emit links in lexicographic order instead of first-seen order.
    pub sort: bool,
}

/// Run one scan: fetch the page and return its normalized, deduplicated
/// links, ordered per the request.
pub fn run(req: &ScanRequest, retry: &RetryPolicy) -> Result<Vec<String>, ScanError> {
    let page_url = validate_input(&req.url)?;

    let opts = FetchOptions {
        timeout: req.timeout,
        user_agent: req.user_agent.clone(),
    };
    let response = fetch::fetch_page(page_url.as_str(), &opts, retry).map_err(|source| {
        ScanError::Fetch {
            url: req.url.clone(),
            source,
        }
    })?;
    tracing::debug!(status = response.status, bytes = response.body.len(), "fetched page");

    ensure_html(response.content_type.as_deref())?;

    let page = ScannedPage::parse(&response.body);
    let set = links::collect_links(&page, &page_url, &req.tags);
    tracing::info!(url = %page_url, links = set.len(), "scan complete");

    Ok(set.into_vec(req.sort))
}

/// Validate the starting URL before any network activity.
fn validate_input(url: &str) -> Result<Url, ScanError> {
    let parsed = Url::parse(url).map_err(|e| ScanError::InvalidInput {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ScanError::InvalidInput {
            url: url.to_string(),
            reason: "scheme must be http or https".to_string(),
        });
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_urls_accepted() {
        assert!(validate_input("https://example.com").is_ok());
        assert!(validate_input("http://example.com/page?q=1").is_ok());
    }

    #[test]
    fn non_web_scheme_rejected() {
        let err = validate_input("ftp://example.com").unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput { .. }));
    }

    #[test]
    fn schemeless_url_rejected() {
        let err = validate_input("example.com").unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput { .. }));
    }

    #[test]
    fn empty_url_rejected() {
        assert!(validate_input("").is_err());
    }
}
