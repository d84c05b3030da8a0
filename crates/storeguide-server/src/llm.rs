//! OpenAI-compatible provider chat client.

use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;

const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection settings for the chat-completions provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_base_url: String,
    pub api_key: String,
    pub model: String,
}

impl LlmConfig {
    /// Reads provider settings from the environment. Returns `None` when
    /// `STOREGUIDE_API_KEY` is unset, in which case the server runs with
    /// the offline extractor and deterministic sequencing only.
    pub fn from_env() -> Option<LlmConfig> {
        let api_key = std::env::var("STOREGUIDE_API_KEY").ok()?;
        let api_base_url = std::env::var("STOREGUIDE_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let model =
            std::env::var("STOREGUIDE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Some(LlmConfig {
            api_base_url,
            api_key,
            model,
        })
    }

    /// Runs one JSON-mode chat call and returns the assistant content.
    ///
    /// The provider is asked for a JSON object payload via
    /// `response_format`; parsing that payload is the caller's concern.
    pub async fn chat_json(
        &self,
        messages: &[serde_json::Value],
        temperature: f32,
    ) -> Result<String, ApiError> {
        let endpoint = format!(
            "{}/chat/completions",
            self.api_base_url.trim_end_matches('/')
        );

        let body = json!({
            "model": self.model,
            "messages": messages,
            "response_format": { "type": "json_object" },
            "temperature": temperature,
        });

        let client = reqwest::Client::new();
        let response = client
            .post(endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|err| ApiError::Upstream(format!("provider request failed: {}", err)))?;

        let status = response.status();
        let body_text = response.text().await.map_err(|err| {
            ApiError::Upstream(format!("provider response read failed: {}", err))
        })?;

        if !status.is_success() {
            return Err(ApiError::Upstream(format!(
                "provider request failed ({}): {}",
                status, body_text
            )));
        }

        let parsed: ChatResponse = serde_json::from_str(&body_text).map_err(|err| {
            ApiError::Upstream(format!("provider response parse failed: {}", err))
        })?;

        parsed
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                ApiError::Upstream("provider response missing assistant content".to_string())
            })
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}
