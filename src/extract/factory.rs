use crate::error::{Error, Result};
use crate::extract::{HtmlExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use std::sync::Arc;

/// Factory mapping a declared file extension to its extractor.
///
/// Unknown extensions are refused before any parsing is attempted.
pub struct ExtractorFactory;

impl ExtractorFactory {
    pub fn for_extension(ext: &str) -> Result<Arc<dyn TextExtractor>> {
        match ext.to_lowercase().as_str() {
            "pdf" => Ok(Arc::new(PdfExtractor)),
            "txt" | "text" => Ok(Arc::new(PlainTextExtractor)),
            "html" | "htm" => Ok(Arc::new(HtmlExtractor)),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}
