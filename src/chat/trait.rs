use crate::error::Result;

/// One prompt/response exchange within a conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub prompt: String,
    pub response: String,
}

/// Trait for conversational text-generation backends.
///
/// A single capability: submit a prompt within a conversation and receive
/// generated text. `history` carries the prior turns, oldest first, so the
/// backend answers with awareness of the conversation so far.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, history: &[Turn], prompt: &str) -> Result<String>;
}
