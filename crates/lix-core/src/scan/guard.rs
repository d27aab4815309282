//! Content-type guard: refuse to parse non-HTML bodies.

use crate::error::ScanError;

/// Media types we are willing to parse as HTML.
const HTML_TYPES: [&str; 2] = ["text/html", "application/xhtml+xml"];

/// Check the response content type before any parse attempt.
///
/// Parameters (`; charset=...`) are ignored for the match. A missing header
/// is rejected the same as a foreign type; the error carries what was
/// actually observed.
pub fn ensure_html(content_type: Option<&str>) -> Result<(), ScanError> {
    let observed = content_type.map(str::trim).filter(|s| !s.is_empty());

    if let Some(value) = observed {
        let mime = value
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        if HTML_TYPES.contains(&mime.as_str()) {
            return Ok(());
        }
    }

    Err(ScanError::NonHtmlContent {
        content_type: observed.unwrap_or("unknown").to_string(),
    })
}
