use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::application::ChatClient;
use crate::domain::{DomainError, Mode};

/// Returned when the service answers successfully but without usable text.
pub const FALLBACK_MESSAGE: &str = "Could not enhance prompt. Please try again.";

/// The single error message callers ever see for a failed service call.
pub const SERVICE_FAILURE_MESSAGE: &str =
    "Failed to enhance prompt. Please check your connection and try again.";

pub const EMPTY_PROMPT_MESSAGE: &str = "Please enter a prompt to enhance";

pub struct EnhancePromptUseCase {
    chat_client: Arc<dyn ChatClient>,
}

impl EnhancePromptUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    /// Issue exactly one completion request for `prompt` in `mode`.
    ///
    /// Blank prompts are rejected before any network activity. Every service
    /// failure collapses into one generic [`DomainError::Service`]; the real
    /// cause is only logged.
    pub async fn execute(&self, prompt: &str, mode: Mode) -> Result<String, DomainError> {
        if prompt.trim().is_empty() {
            return Err(DomainError::validation(EMPTY_PROMPT_MESSAGE));
        }

        info!("Enhancing {} prompt ({} chars)", mode, prompt.chars().count());
        let start_time = Instant::now();

        let system = mode.system_prompt();
        let user = mode.user_prompt(prompt);

        let text = match self.chat_client.complete(system, &user).await {
            Ok(text) => text,
            Err(e) => {
                error!("Error enhancing prompt: {}", e);
                return Err(DomainError::service(SERVICE_FAILURE_MESSAGE));
            }
        };

        debug!("Completion returned in {:?}", start_time.elapsed());

        if text.is_empty() {
            info!("Completion contained no text, using fallback message");
            return Ok(FALLBACK_MESSAGE.to_string());
        }

        Ok(text)
    }
}
