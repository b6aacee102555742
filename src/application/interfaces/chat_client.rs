use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending chat-style prompts to an LLM and receiving text responses.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers (e.g. [`crate::application::EnhancePromptUseCase`]) remain
/// decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send a `system` instruction followed by a `user` turn and return the
    /// text of the first completion.
    ///
    /// An empty string means the service answered successfully but produced no
    /// usable text. Any transport or status failure is an `Err`.
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError>;
}
