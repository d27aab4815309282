//! Terminal error type for a scan run.
//!
//! Every failure mode maps to one variant so the CLI can pick a distinct
//! exit code for bad input vs. runtime failures.

use thiserror::Error;

use crate::retry::FetchError;

/// Exit code for invalid input (bad starting URL).
pub const EXIT_INVALID_INPUT: i32 = 2;
/// Exit code for runtime failures (fetch, content type, write).
pub const EXIT_RUNTIME: i32 = 1;

/// Error produced by a single scan run. All variants are terminal.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Starting URL is missing a scheme, malformed, or not http(s).
    /// Raised before any network activity.
    #[error("invalid URL {url:?}: {reason}")]
    InvalidInput { url: String, reason: String },

    /// The GET failed after the retry policy gave up.
    #[error("request failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// Response was not HTML; carries the observed content type.
    #[error("unsupported content type: {content_type}")]
    NonHtmlContent { content_type: String },

    /// Output destination could not be written.
    #[error("failed to write output to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Process exit code for this error (2 = bad input, 1 = runtime).
    pub fn exit_code(&self) -> i32 {
        match self {
            ScanError::InvalidInput { .. } => EXIT_INVALID_INPUT,
            _ => EXIT_RUNTIME,
        }
    }
}
