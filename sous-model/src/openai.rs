//! OpenAI chat-completions client.
//!
//! Talks to the `/v1/chat/completions` endpoint of OpenAI or any
//! OpenAI-compatible API via `reqwest`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{ModelError, Result};
use crate::message::ChatMessage;
use crate::ChatModel;

/// The default OpenAI chat-completions endpoint.
const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// The default model: fast and cost-effective, good enough for a
/// kitchen-coach demo.
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default sampling temperature.
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default reply length cap in tokens.
const DEFAULT_MAX_TOKENS: u32 = 500;

/// A [`ChatModel`] backed by an OpenAI-compatible chat-completions API.
///
/// # Configuration
///
/// - `model` – defaults to `gpt-4o-mini`.
/// - `base_url` – override for compatible APIs (Ollama, vLLM, …).
/// - `api_key` – from the constructor or the `OPENAI_API_KEY` environment
///   variable.
///
/// # Example
///
/// ```rust,ignore
/// use sous_model::OpenAIChatModel;
///
/// let model = OpenAIChatModel::new("sk-...")?.with_model("gpt-4o");
/// let reply = model.complete(&messages).await?;
/// ```
pub struct OpenAIChatModel {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAIChatModel {
    /// Create a new client with the given API key.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Config`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ModelError::Config("API key must not be empty".into()));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model: DEFAULT_MODEL.into(),
            url: OPENAI_CHAT_URL.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        })
    }

    /// Create a client using the `OPENAI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            ModelError::Config("OPENAI_API_KEY environment variable not set".into())
        })?;
        Self::new(api_key)
    }

    /// Set the model name (e.g. `gpt-4o`).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at an OpenAI-compatible base URL.
    ///
    /// The `/chat/completions` path is appended to whatever is given,
    /// so pass e.g. `http://localhost:11434/v1`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        self.url = format!("{}/chat/completions", base.trim_end_matches('/'));
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the reply length cap in tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

// ── OpenAI API request/response types ──────────────────────────────

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

// ── ChatModel implementation ───────────────────────────────────────

#[async_trait]
impl ChatModel for OpenAIChatModel {
    fn name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        debug!(
            provider = "OpenAI",
            model = %self.model,
            message_count = messages.len(),
            "requesting chat completion"
        );

        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = "OpenAI", error = %e, "request failed");
                ModelError::Request {
                    provider: "OpenAI".into(),
                    message: format!("request failed: {e}"),
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);

            error!(provider = "OpenAI", %status, "API error");
            return Err(ModelError::Api {
                provider: "OpenAI".into(),
                message: format!("API returned {status}: {detail}"),
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(provider = "OpenAI", error = %e, "failed to parse response");
            ModelError::Parse(format!("failed to parse response: {e}"))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ModelError::Parse("API returned no choices".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_api_key() {
        assert!(matches!(OpenAIChatModel::new(""), Err(ModelError::Config(_))));
    }

    #[test]
    fn base_url_override_appends_completions_path() {
        let model = OpenAIChatModel::new("key")
            .unwrap()
            .with_base_url("http://localhost:11434/v1/");
        assert_eq!(model.url, "http://localhost:11434/v1/chat/completions");
    }

    #[test]
    fn request_body_serializes_transcript() {
        use crate::message::{ChatMessage, Role};

        let messages =
            vec![ChatMessage::new(Role::System, "coach"), ChatMessage::new(Role::User, "hi")];
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini",
            messages: &messages,
            temperature: 0.7,
            max_tokens: 500,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
    }
}
