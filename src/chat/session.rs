use crate::chat::{ChatBackend, Turn};
use crate::error::Result;
use std::sync::Arc;

/// A single conversational context bound to one backend.
///
/// Keeps the ordered turn history so later prompts are answered with the
/// earlier exchanges in context. Owned exclusively by one caller; `send`
/// takes `&mut self`, so calls are strictly sequential.
pub struct ChatSession {
    backend: Arc<dyn ChatBackend>,
    turns: Vec<Turn>,
}

impl ChatSession {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            turns: Vec::new(),
        }
    }

    /// Submit a prompt within this conversation and record the exchange.
    ///
    /// The turn is appended only on success; a failed call leaves the
    /// history unchanged.
    pub async fn send(&mut self, prompt: &str) -> Result<String> {
        let response = self.backend.complete(&self.turns, prompt).await?;

        self.turns.push(Turn {
            prompt: prompt.to_string(),
            response: response.clone(),
        });

        Ok(response)
    }

    /// Prior exchanges, oldest first
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::Mutex;

    /// Backend double that records the history it was called with
    struct RecordingBackend {
        calls: Mutex<Vec<Vec<Turn>>>,
        fail: bool,
    }

    impl RecordingBackend {
        fn new(fail: bool) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait::async_trait]
    impl ChatBackend for RecordingBackend {
        async fn complete(&self, history: &[Turn], prompt: &str) -> Result<String> {
            self.calls.lock().unwrap().push(history.to_vec());
            if self.fail {
                return Err(Error::Backend("simulated failure".to_string()));
            }
            Ok(format!("response to: {}", prompt))
        }
    }

    #[tokio::test]
    async fn test_send_appends_turn() {
        let backend = Arc::new(RecordingBackend::new(false));
        let mut session = ChatSession::new(backend);

        let response = session.send("question one").await.unwrap();
        assert_eq!(response, "response to: question one");
        assert_eq!(session.turns().len(), 1);
        assert_eq!(session.turns()[0].prompt, "question one");
    }

    #[tokio::test]
    async fn test_second_send_includes_prior_turn_in_history() {
        let backend = Arc::new(RecordingBackend::new(false));
        let mut session = ChatSession::new(backend.clone());

        session.send("question one").await.unwrap();
        session.send("question two").await.unwrap();

        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].is_empty());
        assert_eq!(calls[1].len(), 1);
        assert_eq!(calls[1][0].prompt, "question one");
        assert_eq!(calls[1][0].response, "response to: question one");
    }

    #[tokio::test]
    async fn test_failed_send_leaves_history_unchanged() {
        let backend = Arc::new(RecordingBackend::new(true));
        let mut session = ChatSession::new(backend);

        let err = session.send("question").await.unwrap_err();
        assert!(matches!(err, Error::Backend(_)));
        assert!(session.turns().is_empty());
    }
}
