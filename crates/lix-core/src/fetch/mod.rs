//! Single-page HTTP GET.
//!
//! Uses the curl crate (libcurl) to fetch the page body and response headers,
//! following redirects, with bounded retry on transient failures. A fresh
//! Easy handle is created per attempt so header and body buffers start clean.

mod parse;

pub use parse::content_type_of;

use std::str;
use std::time::Duration;

use crate::retry::{run_with_retry, FetchError, RetryPolicy};

/// Browser-like request headers sent alongside User-Agent.
const REQUEST_HEADERS: [&str; 4] = [
    "Accept: text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
    "Accept-Language: en,en-US;q=0.9",
    "Cache-Control: no-cache",
    "Pragma: no-cache",
];

/// Options for a single page fetch.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Total request timeout.
    pub timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
}

/// A fetched page: final status, content type (verbatim header value), body.
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// HTTP status of the final response (after redirects).
    pub status: u32,
    /// `Content-Type` header value, if present.
    pub content_type: Option<String>,
    /// Response body, decoded lossily as UTF-8.
    pub body: String,
}

/// Fetch `url` with one GET, retrying transient failures per `policy`.
///
/// Returns the final 2xx response; non-2xx statuses and curl-level failures
/// surviving the retry policy surface as `FetchError`.
pub fn fetch_page(
    url: &str,
    opts: &FetchOptions,
    policy: &RetryPolicy,
) -> Result<PageResponse, FetchError> {
    run_with_retry(policy, || fetch_once(url, opts))
}

fn fetch_once(url: &str, opts: &FetchOptions) -> Result<PageResponse, FetchError> {
    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.useragent(&opts.user_agent)?;
    easy.connect_timeout(opts.timeout)?;
    easy.timeout(opts.timeout)?;

    let mut list = curl::easy::List::new();
    for h in REQUEST_HEADERS {
        list.append(h)?;
    }
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    Ok(PageResponse {
        status: code,
        content_type: content_type_of(&header_lines),
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}
