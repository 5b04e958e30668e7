use crate::catalog::Action;
use crate::error::{Error, Result};
use crate::models::ActionRequest;

/// A parameterized prompt template for one action.
///
/// Rendering is a pure string-building step: it validates the request's
/// parameters against the action's required set and produces the complete
/// prompt sent to the backend. It never calls the backend itself.
///
/// Templates that ask for structured output (JSON objects, confidence
/// labels) embed that shape in the prompt text; the response is passed
/// through verbatim and never re-parsed here.
pub struct PromptTemplate {
    action: Action,
}

impl PromptTemplate {
    /// Look up the template for an action
    pub fn for_action(action: Action) -> Self {
        Self { action }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Check that every required parameter is present and non-empty, and
    /// that a comparison has its second document
    fn validate(&self, request: &ActionRequest) -> Result<()> {
        for name in self.action.required_parameters() {
            match request.parameters.get(*name) {
                Some(value) if !value.trim().is_empty() => {}
                _ => {
                    return Err(Error::Validation(format!(
                        "missing required parameter '{}'",
                        name
                    )))
                }
            }
        }

        if self.action.needs_second_document() && request.secondary_text.is_none() {
            return Err(Error::Validation(
                "a second document is required for comparison".to_string(),
            ));
        }

        Ok(())
    }

    /// Render the complete prompt for the request
    pub fn render(&self, request: &ActionRequest) -> Result<String> {
        self.validate(request)?;

        let text = &request.document_text;
        let param = |name: &str| {
            request
                .parameters
                .get(name)
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        let prompt = match self.action {
            Action::Summarize => {
                let format_clause = if param("format") == "bullets" {
                    "Use bullet points."
                } else {
                    "As a paragraph."
                };
                format!(
                    "Summarize the following text in a {} style. {}\n\n{}",
                    param("length"),
                    format_clause,
                    text
                )
            }
            Action::ExtractEntities => format!(
                "Extract the following entities from the text below:\n\n\
                 - Names of people\n- Dates\n- Locations\n- Organizations\n\n\
                 Return the result as a JSON object with the following keys:\n\
                 {{ 'names': [], 'dates': [], 'locations': [], 'organizations': [] }}\n\n\
                 Text:\n{}",
                text
            ),
            Action::ExtractTables => format!(
                "If the following text contains any tables or lists, extract them and \
                 represent them in JSON format.\n\nText:\n{}",
                text
            ),
            Action::AnswerQuestions => format!(
                "Based only on the following document content, answer these questions. \
                 If the answer cannot be found, say 'Information not available in the document.' \
                 For each answer, provide a confidence score (High/Medium/Low).\n\n\
                 Document:\n{}\n\nQuestions:\n{}",
                text,
                param("questions")
            ),
            Action::CompareDocuments => {
                let second = request.secondary_text.as_deref().unwrap_or_default();
                format!(
                    "Compare the following two documents. Provide similarities, differences, \
                     and a comparison summary.\n\nDocument 1:\n{}\n\nDocument 2:\n{}",
                    text, second
                )
            }
            Action::TransformStyle => format!(
                "Rewrite the following text in a {} style, targeting {}:\n\n{}",
                param("style"),
                param("audience"),
                text
            ),
            Action::ExpandContent => format!(
                "Expand the following section of the document:\n\n{}\n\n\
                 Provide more detail and explanation.",
                param("section")
            ),
            Action::Translate => format!(
                "Translate the following text to {}. \
                 In addition to translation, adapt the text to fit the cultural context of the \
                 target language audience. Highlight any localization changes or adaptations \
                 made (idioms, phrases, examples) by marking them clearly.\n\nText:\n{}",
                param("target_language"),
                text
            ),
            Action::Recommend => format!(
                "User profile: {}\n\nDocument content:\n{}\n\n\
                 Based on the user's profile and the document's content, provide a personalized \
                 content recommendation. Explain why this document is or is not a good match \
                 for the user.",
                param("user_profile"),
                text
            ),
            Action::DocumentCode => format!(
                "Analyze the following code and generate clear documentation. \
                 Explain the functionality, list the key functions/classes/variables, and \
                 provide examples of usage.\n\nCode:\n{}",
                param("code")
            ),
            Action::GenerateQuiz => format!(
                "Based on the following document, create a short quiz (3-5 questions) with \
                 multiple choice answers.\n\n{}",
                text
            ),
            Action::InteractiveQa => format!(
                "You are answering questions about a document. Base every answer only on its \
                 content. If the answer cannot be found, say 'Information not available in the \
                 document.'\n\nDocument:\n{}\n\nQuestion:\n{}",
                text,
                param("question")
            ),
        };

        Ok(prompt)
    }
}
