use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::DomainError;

/// What a [`MockChatClient`] answers with.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Echo a deterministic enhancement built from the user turn.
    Echo,
    Text(String),
    Failure(String),
}

impl MockReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn failure(cause: impl Into<String>) -> Self {
        Self::Failure(cause.into())
    }
}

/// In-process [`ChatClient`] that never touches the network.
///
/// Records every request so callers can assert on what would have been sent.
pub struct MockChatClient {
    reply: MockReply,
    requests: Mutex<Vec<(String, String)>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::with_reply(MockReply::Echo)
    }

    pub fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// The `(system, user)` pair of the most recent request.
    pub fn last_request(&self) -> Option<(String, String)> {
        self.requests.lock().ok().and_then(|r| r.last().cloned())
    }

    fn echo(user: &str) -> String {
        format!(
            "{} Rendered in rich detail with deliberate lighting, a clear focal point and a consistent mood.",
            user
        )
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((system.to_string(), user.to_string()));
        }
        debug!("MockChatClient answering request #{}", self.call_count());

        match &self.reply {
            MockReply::Echo => Ok(Self::echo(user)),
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Failure(cause) => Err(DomainError::service(cause.clone())),
        }
    }
}
