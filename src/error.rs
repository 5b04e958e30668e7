use thiserror::Error;

/// Failure taxonomy for the ingestion and action pipeline.
///
/// Every fallible operation in the crate returns one of these kinds, so
/// callers handle the failure case explicitly instead of relying on
/// implicit propagation.
#[derive(Debug, Error)]
pub enum Error {
    /// Ingested content is larger than the configured ceiling
    #[error("document size {actual} bytes exceeds the {limit} byte limit")]
    SizeExceeded { actual: u64, limit: u64 },

    /// The declared file extension has no registered extractor
    #[error("unsupported document format: .{0}")]
    UnsupportedFormat(String),

    /// Raw bytes are not valid text in the expected encoding
    #[error("failed to decode document as UTF-8: {0}")]
    Decoding(String),

    /// URL fetch failed: network error or non-success status
    #[error("failed to fetch URL: {0}")]
    Fetch(String),

    /// Format-specific parsing failed
    #[error("failed to extract text: {0}")]
    Extraction(String),

    /// A required action parameter is missing or empty
    #[error("invalid action request: {0}")]
    Validation(String),

    /// The text-generation backend rejected or failed the request
    #[error("backend request failed: {0}")]
    Backend(String),

    /// Local file IO failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
