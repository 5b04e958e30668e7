use crate::error::{Error, Result};
use crate::extract::TextExtractor;

/// PDF extractor built on lopdf, with pdf-extract as a fallback when lopdf
/// finds no text layer
pub struct PdfExtractor;

impl PdfExtractor {
    fn extract_sync(data: &[u8]) -> Result<String> {
        use lopdf::Document;

        let doc = Document::load_mem(data)
            .map_err(|e| Error::Extraction(format!("failed to load PDF: {}", e)))?;

        let mut text_content = String::new();

        // Pages in order; a page without extractable text contributes nothing
        for page_num in doc.get_pages().keys() {
            if let Ok(page_text) = doc.extract_text(&[*page_num]) {
                text_content.push_str(&page_text);
                text_content.push('\n');
            }
        }

        if text_content.trim().is_empty() {
            // Fallback: try pdf-extract if lopdf doesn't find a text layer
            match pdf_extract::extract_text_from_mem(data) {
                Ok(text) => Ok(text.trim().to_string()),
                Err(_) => Ok(String::new()),
            }
        } else {
            Ok(text_content.trim().to_string())
        }
    }
}

#[async_trait::async_trait]
impl TextExtractor for PdfExtractor {
    async fn extract(&self, data: &[u8]) -> Result<String> {
        let data = data.to_vec();

        tokio::task::spawn_blocking(move || Self::extract_sync(&data))
            .await
            .map_err(|e| Error::Extraction(format!("PDF extraction task failed: {}", e)))?
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "pdf")
    }
}
