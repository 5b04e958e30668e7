use crate::error::Result;

/// Trait for text extractors that convert raw document content into plain
/// text
#[async_trait::async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract plain text from raw document content
    async fn extract(&self, data: &[u8]) -> Result<String>;

    /// Check if this extractor supports the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}
