pub mod factory;
pub mod html;
pub mod pdf;
pub mod r#trait;
pub mod txt;

pub use factory::ExtractorFactory;
pub use html::HtmlExtractor;
pub use pdf::PdfExtractor;
pub use r#trait::TextExtractor;
pub use txt::PlainTextExtractor;
