use crate::chat::{ChatBackend, Turn};
use crate::config::GeminiConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Gemini chat backend using the Generative Language REST API
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiBackend {
    pub fn new(config: &GeminiConfig, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn build_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Build the request contents: prior turns as alternating user/model
    /// messages, then the new prompt
    fn build_contents(history: &[Turn], prompt: &str) -> Vec<Content> {
        let mut contents = Vec::with_capacity(history.len() * 2 + 1);

        for turn in history {
            contents.push(Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: turn.prompt.clone(),
                }],
            });
            contents.push(Content {
                role: "model".to_string(),
                parts: vec![Part {
                    text: turn.response.clone(),
                }],
            });
        }

        contents.push(Content {
            role: "user".to_string(),
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        });

        contents
    }
}

#[async_trait::async_trait]
impl ChatBackend for GeminiBackend {
    async fn complete(&self, history: &[Turn], prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: Self::build_contents(history, prompt),
        };

        let response = self
            .client
            .post(self.build_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Backend(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Backend(format!("API returned {}: {}", status, body)));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::Backend(format!("failed to parse response: {}", e)))?;

        let candidate = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| Error::Backend("response contained no candidates".to_string()))?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();

        if text.is_empty() {
            return Err(Error::Backend("response contained no text".to_string()));
        }

        Ok(text)
    }
}
