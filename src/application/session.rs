//! The prompt-enhancer view state and its transitions.
//!
//! An [`EnhancerSession`] owns the selected mode, the raw prompt and the
//! enhanced result. Every mutation goes through a transition method that
//! either succeeds or hands back the [`Notice`] to show the user.
//!
//! Enhancement is split into two explicit steps so any driver (async task,
//! worker thread, event loop) can own the wait in between:
//!
//! 1. [`EnhancerSession::begin_enhance`] validates and marks the request as
//!    in flight, returning a [`PendingEnhancement`];
//! 2. [`EnhancerSession::settle`] applies the outcome.
//!
//! While a request is in flight every input transition is rejected, so at
//! most one request can be outstanding per session.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::application::{EnhancePromptUseCase, ExportPromptUseCase};
use crate::domain::{DomainError, Mode, Notice};

pub const MISSING_INPUT_MESSAGE: &str = "Please select a type and enter a prompt";
pub const IN_PROGRESS_MESSAGE: &str = "An enhancement is already in progress";
pub const NOT_IN_PROGRESS_MESSAGE: &str = "No enhancement is in progress";
pub const ENHANCED_MESSAGE: &str = "Prompt enhanced successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No mode chosen yet.
    Idle,
    /// Mode chosen, prompt editable.
    ModeSelected,
    /// Request in flight, input disabled.
    Enhancing,
    /// Result available.
    Enhanced,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::ModeSelected => "mode selected",
            SessionState::Enhancing => "enhancing",
            SessionState::Enhanced => "enhanced",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request that has been started but not yet settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEnhancement {
    mode: Mode,
    prompt: String,
}

impl PendingEnhancement {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub async fn run(&self, use_case: &EnhancePromptUseCase) -> Result<String, DomainError> {
        use_case.execute(&self.prompt, self.mode).await
    }
}

#[derive(Debug)]
pub struct EnhancerSession {
    state: SessionState,
    mode: Option<Mode>,
    prompt: String,
    enhanced: Option<String>,
    last_export: Option<PathBuf>,
}

impl EnhancerSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            mode: None,
            prompt: String::new(),
            enhanced: None,
            last_export: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn enhanced_text(&self) -> Option<&str> {
        self.enhanced.as_deref()
    }

    pub fn last_export(&self) -> Option<&Path> {
        self.last_export.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Enhancing
    }

    pub fn can_export(&self) -> bool {
        self.enhanced.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn can_reset(&self) -> bool {
        !self.is_loading() && (!self.prompt.is_empty() || self.enhanced.is_some())
    }

    pub fn select_mode(&mut self, mode: Mode) -> Result<(), Notice> {
        self.ensure_idle_input()?;

        self.mode = Some(mode);
        if self.state == SessionState::Idle {
            self.state = SessionState::ModeSelected;
        }
        debug!("Mode selected: {} (state: {})", mode, self.state);
        Ok(())
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) -> Result<(), Notice> {
        self.ensure_idle_input()?;
        self.prompt = prompt.into();
        Ok(())
    }

    /// Validate the input and mark the request as in flight.
    pub fn begin_enhance(&mut self) -> Result<PendingEnhancement, Notice> {
        self.ensure_idle_input()?;

        let mode = match self.mode {
            Some(mode) if !self.prompt.trim().is_empty() => mode,
            _ => return Err(Notice::validation(MISSING_INPUT_MESSAGE)),
        };

        self.state = SessionState::Enhancing;
        Ok(PendingEnhancement {
            mode,
            prompt: self.prompt.clone(),
        })
    }

    /// Apply the outcome of the request started by [`Self::begin_enhance`].
    pub fn settle(&mut self, outcome: Result<String, DomainError>) -> Notice {
        if self.state != SessionState::Enhancing {
            warn!("Ignoring enhancement outcome: no request in flight");
            return Notice::validation(NOT_IN_PROGRESS_MESSAGE);
        }

        match outcome {
            Ok(text) => {
                self.enhanced = Some(text);
                self.state = SessionState::Enhanced;
                Notice::success(ENHANCED_MESSAGE)
            }
            Err(e) => {
                self.state = if self.mode.is_some() {
                    SessionState::ModeSelected
                } else {
                    SessionState::Idle
                };
                Notice::error(e.to_string())
            }
        }
    }

    /// Begin, run and settle one enhancement.
    pub async fn submit(&mut self, use_case: &EnhancePromptUseCase) -> Notice {
        let pending = match self.begin_enhance() {
            Ok(pending) => pending,
            Err(notice) => return notice,
        };

        let outcome = pending.run(use_case).await;
        self.settle(outcome)
    }

    /// Save the enhanced text as a plain-text file.
    pub async fn export(&mut self, use_case: &ExportPromptUseCase) -> Notice {
        let text = match self.enhanced.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => return Notice::validation(crate::application::NOTHING_TO_EXPORT_MESSAGE),
        };
        let Some(mode) = self.mode else {
            return Notice::validation(MISSING_INPUT_MESSAGE);
        };

        match use_case.execute(mode, text).await {
            Ok(path) => {
                let notice = Notice::success(format!("Prompt saved to {}", path.display()));
                self.last_export = Some(path);
                notice
            }
            Err(DomainError::Validation(msg)) => Notice::validation(msg),
            Err(e) => Notice::error(format!("Failed to save prompt: {}", e)),
        }
    }

    /// Clear mode, prompt and result and go back to [`SessionState::Idle`].
    pub fn reset(&mut self) -> Result<(), Notice> {
        self.ensure_idle_input()?;
        *self = Self::new();
        Ok(())
    }

    fn ensure_idle_input(&self) -> Result<(), Notice> {
        if self.is_loading() {
            return Err(Notice::validation(IN_PROGRESS_MESSAGE));
        }
        Ok(())
    }
}

impl Default for EnhancerSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::connector::{MockChatClient, MockReply};
    use crate::domain::NoticeKind;

    fn use_case(reply: MockReply) -> (Arc<MockChatClient>, EnhancePromptUseCase) {
        let client = Arc::new(MockChatClient::with_reply(reply));
        let use_case = EnhancePromptUseCase::new(client.clone());
        (client, use_case)
    }

    #[test]
    fn starts_idle_and_selecting_mode_moves_to_mode_selected() {
        let mut session = EnhancerSession::new();
        assert_eq!(session.state(), SessionState::Idle);

        session.select_mode(Mode::Video).unwrap();
        assert_eq!(session.state(), SessionState::ModeSelected);
        assert_eq!(session.mode(), Some(Mode::Video));

        session.select_mode(Mode::Image).unwrap();
        assert_eq!(session.state(), SessionState::ModeSelected);
        assert_eq!(session.mode(), Some(Mode::Image));
    }

    #[tokio::test]
    async fn submit_without_mode_or_prompt_is_rejected_without_request() {
        let (client, use_case) = use_case(MockReply::text("never"));
        let mut session = EnhancerSession::new();

        session.set_prompt("a cat").unwrap();
        let notice = session.submit(&use_case).await;
        assert_eq!(notice.kind(), NoticeKind::Validation);
        assert_eq!(notice.message(), MISSING_INPUT_MESSAGE);

        session.select_mode(Mode::Image).unwrap();
        session.set_prompt("   \n").unwrap();
        let notice = session.submit(&use_case).await;
        assert_eq!(notice.kind(), NoticeKind::Validation);
        assert_eq!(session.state(), SessionState::ModeSelected);

        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn successful_submit_stores_text_verbatim() {
        let (client, use_case) = use_case(MockReply::text(" detailed cat \n"));
        let mut session = EnhancerSession::new();
        session.select_mode(Mode::Image).unwrap();
        session.set_prompt("a cat").unwrap();

        let notice = session.submit(&use_case).await;

        assert!(notice.is_success());
        assert_eq!(session.state(), SessionState::Enhanced);
        assert_eq!(session.enhanced_text(), Some(" detailed cat \n"));
        assert!(session.can_export());
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn failure_returns_to_mode_selected_and_keeps_previous_text() {
        let mut session = EnhancerSession::new();
        session.select_mode(Mode::Video).unwrap();
        session.set_prompt("waves").unwrap();

        let (_, ok) = use_case(MockReply::text("first result"));
        session.submit(&ok).await;
        assert_eq!(session.state(), SessionState::Enhanced);

        let (_, failing) = use_case(MockReply::failure("502 Bad Gateway"));
        let notice = session.submit(&failing).await;

        assert_eq!(notice.kind(), NoticeKind::Error);
        assert_eq!(notice.message(), crate::application::SERVICE_FAILURE_MESSAGE);
        assert_eq!(session.state(), SessionState::ModeSelected);
        assert_eq!(session.enhanced_text(), Some("first result"));
    }

    #[test]
    fn input_is_disabled_while_enhancing() {
        let mut session = EnhancerSession::new();
        session.select_mode(Mode::Image).unwrap();
        session.set_prompt("a cat").unwrap();

        let pending = session.begin_enhance().unwrap();
        assert_eq!(pending.mode(), Mode::Image);
        assert_eq!(pending.prompt(), "a cat");
        assert!(session.is_loading());

        assert!(session.begin_enhance().is_err());
        assert!(session.set_prompt("a dog").is_err());
        assert!(session.select_mode(Mode::Video).is_err());
        assert!(session.reset().is_err());
        assert!(!session.can_reset());
        assert_eq!(session.prompt(), "a cat");

        let notice = session.settle(Ok("done".to_string()));
        assert!(notice.is_success());
        assert_eq!(session.state(), SessionState::Enhanced);
    }

    #[test]
    fn settle_without_pending_request_is_ignored() {
        let mut session = EnhancerSession::new();
        let notice = session.settle(Ok("stray".to_string()));
        assert_eq!(notice.kind(), NoticeKind::Validation);
        assert_eq!(session.enhanced_text(), None);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[tokio::test]
    async fn reset_clears_everything_from_any_state() {
        let (_, use_case) = use_case(MockReply::text("result"));

        let mut idle = EnhancerSession::new();
        idle.reset().unwrap();
        assert_eq!(idle.state(), SessionState::Idle);

        let mut selected = EnhancerSession::new();
        selected.select_mode(Mode::Image).unwrap();
        selected.set_prompt("draft").unwrap();
        selected.reset().unwrap();

        let mut enhanced = EnhancerSession::new();
        enhanced.select_mode(Mode::Video).unwrap();
        enhanced.set_prompt("waves").unwrap();
        enhanced.submit(&use_case).await;
        assert_eq!(enhanced.state(), SessionState::Enhanced);
        enhanced.reset().unwrap();

        for session in [idle, selected, enhanced] {
            assert_eq!(session.state(), SessionState::Idle);
            assert_eq!(session.mode(), None);
            assert_eq!(session.prompt(), "");
            assert_eq!(session.enhanced_text(), None);
            assert!(session.last_export().is_none());
        }
    }

    #[tokio::test]
    async fn reset_after_failed_rerun_clears_kept_text() {
        let mut session = EnhancerSession::new();
        session.select_mode(Mode::Image).unwrap();
        session.set_prompt("a cat").unwrap();

        let (_, ok) = use_case(MockReply::text("kept result"));
        session.submit(&ok).await;
        let (_, failing) = use_case(MockReply::failure("timeout"));
        session.submit(&failing).await;
        assert_eq!(session.state(), SessionState::ModeSelected);
        assert_eq!(session.enhanced_text(), Some("kept result"));
        assert!(session.can_reset());

        session.reset().unwrap();

        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.mode(), None);
        assert_eq!(session.prompt(), "");
        assert_eq!(session.enhanced_text(), None);
    }

    #[test]
    fn selecting_mode_keeps_enhanced_text() {
        let mut session = EnhancerSession::new();
        session.select_mode(Mode::Image).unwrap();
        session.set_prompt("a cat").unwrap();
        session.begin_enhance().unwrap();
        session.settle(Ok("cat result".to_string()));

        session.select_mode(Mode::Video).unwrap();
        assert_eq!(session.enhanced_text(), Some("cat result"));
        assert_eq!(session.state(), SessionState::Enhanced);
    }
}
