use crate::error::Result;
use crate::extract::TextExtractor;
use scraper::{Html, Selector};

/// HTML extractor.
///
/// Collects the text content of `<p>` elements only, in document order,
/// joined with newlines. Text that appears only in other tags (headers,
/// lists, scripts) is intentionally excluded.
pub struct HtmlExtractor;

impl HtmlExtractor {
    fn paragraphs(html: &str) -> String {
        let document = Html::parse_document(html);
        let selector = Selector::parse("p").unwrap();

        document
            .select(&selector)
            .map(|p| p.text().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait::async_trait]
impl TextExtractor for HtmlExtractor {
    async fn extract(&self, data: &[u8]) -> Result<String> {
        // Fetched markup may carry stray bytes; a lossy decode keeps the
        // parseable parts
        let html = String::from_utf8_lossy(data);
        Ok(Self::paragraphs(&html))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "html" | "htm")
    }
}
