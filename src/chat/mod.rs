pub mod gemini;
pub mod session;
pub mod r#trait;

pub use gemini::GeminiBackend;
pub use session::ChatSession;
pub use r#trait::{ChatBackend, Turn};
