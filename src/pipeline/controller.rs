use crate::catalog::{Action, PromptTemplate};
use crate::chat::{ChatBackend, ChatSession};
use crate::error::{Error, Result};
use crate::extract::ExtractorFactory;
use crate::models::{ActionRequest, Document, DocumentSource};
use crate::source::SourceLoader;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Where the pipeline currently is in its action flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    NoDocument,
    DocumentLoaded,
    ActionSelected(Action),
    AwaitingParameters(Action),
    Executing(Action),
    ResultDisplayed(Action),
}

/// Orchestrates the pipeline: ingestion, action selection, parameter
/// validation, prompt rendering and backend execution.
///
/// The controller holds no console IO. The presentation layer drives it and
/// renders whatever it returns, so every transition is testable directly.
/// Every failure is surfaced as an error value and leaves an already-loaded
/// document intact; another action can always be attempted.
pub struct PipelineController {
    loader: SourceLoader,
    backend: Arc<dyn ChatBackend>,
    state: ControllerState,
    document: Option<Document>,
    companion: Option<Document>,
    qa_session: Option<ChatSession>,
}

impl PipelineController {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            loader: SourceLoader::new(),
            backend,
            state: ControllerState::NoDocument,
            document: None,
            companion: None,
            qa_session: None,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn companion(&self) -> Option<&Document> {
        self.companion.as_ref()
    }

    /// Ingest a source: load raw content, pick the extractor from the
    /// declared extension, extract, and require usable text.
    async fn ingest(&self, source: DocumentSource) -> Result<Document> {
        let (extractor, data) = match &source {
            DocumentSource::File(path) => {
                let ext = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|s| s.to_lowercase())
                    .ok_or_else(|| Error::UnsupportedFormat("(none)".to_string()))?;
                // Extension is resolved before the file is read, so an
                // unsupported format costs no IO
                let extractor = ExtractorFactory::for_extension(&ext)?;
                (extractor, self.loader.load_file(path).await?)
            }
            DocumentSource::Url(url) => {
                // Fetched pages are always treated as HTML
                let extractor = ExtractorFactory::for_extension("html")?;
                (extractor, self.loader.fetch_url(url).await?.into_bytes())
            }
        };

        let size_bytes = data.len() as u64;
        let text = extractor.extract(&data).await?;
        Self::finish_ingest(source, size_bytes, text)
    }

    fn finish_ingest(source: DocumentSource, size_bytes: u64, text: String) -> Result<Document> {
        if text.trim().is_empty() {
            return Err(Error::Extraction(
                "document contains no extractable text".to_string(),
            ));
        }
        Ok(Document::new(source, size_bytes, text))
    }

    /// Load the primary document from a local file. On failure the previous
    /// state, including any already-loaded document, is left untouched.
    pub async fn load_file(&mut self, path: &Path) -> Result<&Document> {
        let document = self.ingest(DocumentSource::File(path.to_path_buf())).await?;
        Ok(self.install_document(document))
    }

    /// Load the primary document from a web page
    pub async fn load_url(&mut self, url: &str) -> Result<&Document> {
        let document = self.ingest(DocumentSource::Url(url.to_string())).await?;
        Ok(self.install_document(document))
    }

    fn install_document(&mut self, document: Document) -> &Document {
        self.companion = None;
        self.qa_session = None;
        self.state = ControllerState::DocumentLoaded;
        self.document.insert(document)
    }

    /// Load the second document for a comparison through the same
    /// loader/extractor path. A failure here reports the error without
    /// disturbing the primary document.
    pub async fn load_companion_file(&mut self, path: &Path) -> Result<&Document> {
        let document = self.ingest(DocumentSource::File(path.to_path_buf())).await?;
        Ok(self.companion.insert(document))
    }

    /// Load the second document for a comparison from a web page
    pub async fn load_companion_url(&mut self, url: &str) -> Result<&Document> {
        let document = self.ingest(DocumentSource::Url(url.to_string())).await?;
        Ok(self.companion.insert(document))
    }

    /// Select the next action to run. Refused while no document is loaded.
    pub fn select_action(&mut self, action: Action) -> Result<()> {
        if self.document.is_none() {
            return Err(Error::Validation("no document loaded".to_string()));
        }

        // Selecting a new action leaves any follow-up sub-loop
        self.qa_session = None;
        self.state = ControllerState::ActionSelected(action);
        Ok(())
    }

    /// Mark that parameter collection for the selected action has begun
    pub fn begin_parameters(&mut self) -> Result<Action> {
        match self.state {
            ControllerState::ActionSelected(action)
            | ControllerState::AwaitingParameters(action) => {
                self.state = ControllerState::AwaitingParameters(action);
                Ok(action)
            }
            _ => Err(Error::Validation("no action selected".to_string())),
        }
    }

    fn build_request(
        &self,
        action: Action,
        parameters: HashMap<String, String>,
    ) -> Result<ActionRequest> {
        let document = self
            .document
            .as_ref()
            .ok_or_else(|| Error::Validation("no document loaded".to_string()))?;

        let secondary_text = if action.needs_second_document() {
            let companion = self.companion.as_ref().ok_or_else(|| {
                Error::Validation("a second document is required for comparison".to_string())
            })?;
            Some(companion.text.clone())
        } else {
            None
        };

        Ok(ActionRequest {
            action,
            parameters,
            document_text: document.text.clone(),
            secondary_text,
        })
    }

    /// Execute the selected action with the collected parameters.
    ///
    /// Validation failure returns the controller to `AwaitingParameters`
    /// without touching the backend. A backend failure surfaces the error
    /// and returns to `ActionSelected`. The loaded document survives either
    /// way. An interactive Q&A success keeps its session alive and stays in
    /// `Executing` until `end_follow_up`.
    pub async fn execute(&mut self, parameters: HashMap<String, String>) -> Result<String> {
        let action = match self.state {
            ControllerState::ActionSelected(action)
            | ControllerState::AwaitingParameters(action) => action,
            _ => return Err(Error::Validation("no action selected".to_string())),
        };

        let template = PromptTemplate::for_action(action);

        let request = match self.build_request(action, parameters) {
            Ok(request) => request,
            Err(e) => {
                self.state = ControllerState::AwaitingParameters(action);
                return Err(e);
            }
        };

        let prompt = match template.render(&request) {
            Ok(prompt) => prompt,
            Err(e) => {
                self.state = ControllerState::AwaitingParameters(action);
                return Err(e);
            }
        };

        self.state = ControllerState::Executing(action);

        let mut session = ChatSession::new(self.backend.clone());
        match session.send(&prompt).await {
            Ok(response) => {
                if action == Action::InteractiveQa {
                    self.qa_session = Some(session);
                } else {
                    self.state = ControllerState::ResultDisplayed(action);
                }
                Ok(response)
            }
            Err(e) => {
                self.state = ControllerState::ActionSelected(action);
                Err(e)
            }
        }
    }

    /// Ask a follow-up question within the interactive sub-loop. The
    /// session's history carries the earlier exchanges, so the question is
    /// sent bare. A backend failure leaves the sub-loop active.
    pub async fn follow_up(&mut self, question: &str) -> Result<String> {
        let session = self
            .qa_session
            .as_mut()
            .ok_or_else(|| Error::Validation("no interactive session active".to_string()))?;

        session.send(question).await
    }

    /// Leave the interactive sub-loop, discarding its session
    pub fn end_follow_up(&mut self) {
        if self.qa_session.take().is_some() {
            if let ControllerState::Executing(action) = self.state {
                self.state = ControllerState::ResultDisplayed(action);
            }
        }
    }
}
