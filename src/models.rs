use crate::catalog::Action;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Where a document's raw content came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A local file, identified by its path
    File(PathBuf),
    /// A web page, identified by its URL
    Url(String),
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::File(path) => write!(f, "{}", path.display()),
            DocumentSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// A successfully ingested document.
///
/// Only constructed after extraction succeeds with non-empty text, so
/// holding a `Document` is proof there is usable text to act on. Immutable
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Where the raw content came from
    pub source: DocumentSource,
    /// Size of the raw content in bytes
    pub size_bytes: u64,
    /// The extracted plain text
    pub text: String,
}

impl Document {
    /// Create a new Document instance
    pub fn new(source: DocumentSource, size_bytes: u64, text: String) -> Self {
        Self {
            source,
            size_bytes,
            text,
        }
    }

    /// Truncated view of the text for display. Actions always receive the
    /// full text.
    pub fn preview(&self, max_chars: usize) -> String {
        if self.text.chars().count() <= max_chars {
            self.text.clone()
        } else {
            let truncated: String = self.text.chars().take(max_chars).collect();
            format!("{}...", truncated)
        }
    }
}

/// One action invocation: the selected action, its parameters and the text
/// it operates on. Never mutated after the prompt is rendered.
#[derive(Debug, Clone)]
pub struct ActionRequest {
    pub action: Action,
    pub parameters: HashMap<String, String>,
    pub document_text: String,
    /// Second document's text, present only for comparisons
    pub secondary_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document(text: &str) -> Document {
        Document::new(
            DocumentSource::File(PathBuf::from("/test/file.txt")),
            text.len() as u64,
            text.to_string(),
        )
    }

    #[test]
    fn test_document_creation() {
        let doc = sample_document("hello world");
        assert_eq!(doc.size_bytes, 11);
        assert_eq!(doc.text, "hello world");
        assert_eq!(
            doc.source,
            DocumentSource::File(PathBuf::from("/test/file.txt"))
        );
    }

    #[test]
    fn test_preview_short_text_unchanged() {
        let doc = sample_document("short");
        assert_eq!(doc.preview(2000), "short");
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let doc = sample_document(&"a".repeat(100));
        let preview = doc.preview(10);
        assert_eq!(preview, format!("{}...", "a".repeat(10)));
    }

    #[test]
    fn test_source_display() {
        let url = DocumentSource::Url("https://example.com/page".to_string());
        assert_eq!(url.to_string(), "https://example.com/page");

        let file = DocumentSource::File(PathBuf::from("/tmp/doc.pdf"));
        assert_eq!(file.to_string(), "/tmp/doc.pdf");
    }
}
