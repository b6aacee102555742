use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{ChatMessage, CompletionSettings, DomainError, DEFAULT_MODEL};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_REFERER: &str = "http://localhost";
const COMPLETIONS_PATH: &str = "/chat/completions";
const CLIENT_TITLE: &str = "Prompt Enhancer Tool";

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

/// Minimal subset of the chat-completions response we care about.
/// Every level is optional so a sparse body decodes to "no text".
#[derive(Deserialize, Default)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Option<Choice>>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ApiResponse {
    fn into_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .flatten()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default()
    }
}

/// HTTP client for OpenAI-compatible chat-completions endpoints, OpenRouter by
/// default.
///
/// Implements [`ChatClient`] so the enhancement use case stays decoupled from
/// transport and serialization details.
///
/// The credential is never compiled in; it comes from the environment of the
/// process making the call:
///
/// ```text
/// OPENROUTER_API_KEY=sk-or-...
/// OPENROUTER_BASE_URL=https://openrouter.ai/api/v1
/// OPENROUTER_MODEL=deepseek/deepseek-chat-v3.1:free
/// PROMPT_ENHANCER_REFERER=https://my-app.example
/// ```
///
/// No timeout is configured beyond reqwest's defaults and no retry is attempted.
pub struct OpenRouterClient {
    client: reqwest::Client,
    api_key: String,
    settings: CompletionSettings,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
    referer: String,
}

impl OpenRouterClient {
    pub fn new(
        api_key: impl Into<String>,
        settings: CompletionSettings,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            settings,
            url,
            referer: DEFAULT_REFERER.to_string(),
        }
    }

    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = referer.into();
        self
    }

    /// Construct from environment variables:
    ///
    /// | Variable                  | Default                            |
    /// |---------------------------|------------------------------------|
    /// | `OPENROUTER_API_KEY`      | required                           |
    /// | `OPENROUTER_BASE_URL`     | `https://openrouter.ai/api/v1`     |
    /// | `OPENROUTER_MODEL`        | `deepseek/deepseek-chat-v3.1:free` |
    /// | `PROMPT_ENHANCER_REFERER` | `http://localhost`                 |
    ///
    /// `model_override` wins over `OPENROUTER_MODEL`.
    pub fn from_env(model_override: Option<&str>) -> Result<Self, DomainError> {
        let key = std::env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                DomainError::config("OPENROUTER_API_KEY is not set (use --mock to run without it)")
            })?;
        let base =
            std::env::var("OPENROUTER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = match model_override {
            Some(m) => m.to_string(),
            None => std::env::var("OPENROUTER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        };
        let referer = std::env::var("PROMPT_ENHANCER_REFERER")
            .unwrap_or_else(|_| DEFAULT_REFERER.to_string());

        Ok(Self::new(key, CompletionSettings::new(model), base).with_referer(referer))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }
}

#[async_trait]
impl ChatClient for OpenRouterClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: self.settings.model(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature: self.settings.temperature(),
            max_tokens: self.settings.max_tokens(),
        };

        debug!("POST {} (model {})", self.url, self.settings.model());

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", CLIENT_TITLE)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::service(format!("OpenRouterClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OpenRouterClient: API returned {status}: {body}");
            return Err(DomainError::service(format!(
                "OpenRouterClient: API request failed: {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::service(format!("OpenRouterClient: failed to parse response: {e}"))
        })?;

        Ok(api_response.into_text())
    }
}
