use crate::error::{Error, Result};
use crate::extract::TextExtractor;

/// Plain-text extractor: a strict UTF-8 decode, byte for byte
pub struct PlainTextExtractor;

#[async_trait::async_trait]
impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, data: &[u8]) -> Result<String> {
        String::from_utf8(data.to_vec()).map_err(|e| Error::Decoding(e.to_string()))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "txt" | "text")
    }
}
