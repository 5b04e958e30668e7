/// Constants used throughout the docsage pipeline

/// Maximum size of ingested document content in bytes, enforced for both
/// file and URL sources before any parsing is attempted
pub const MAX_DOCUMENT_BYTES: u64 = 2 * 1024 * 1024;

/// Number of characters of extracted text shown in the console preview.
/// Display-only: actions always operate on the full text.
pub const PREVIEW_CHARS: usize = 2000;

/// Default Gemini model used when the config does not name one
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default base URL of the Generative Language API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variable consulted for the API key when the config has none
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
