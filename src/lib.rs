pub mod catalog;
pub mod chat;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod models;
pub mod pipeline;
pub mod source;

pub use catalog::{Action, PromptTemplate};
pub use chat::{ChatBackend, ChatSession, GeminiBackend, Turn};
pub use config::Config;
pub use error::{Error, Result};
pub use extract::{ExtractorFactory, TextExtractor};
pub use models::{ActionRequest, Document, DocumentSource};
pub use pipeline::{ControllerState, PipelineController};
pub use source::SourceLoader;
