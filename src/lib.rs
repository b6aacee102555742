pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatClient, EnhancePromptUseCase, EnhancerSession, ExportPromptUseCase, PendingEnhancement,
    PromptExporter, SessionState,
};

pub use cli::Commands;

pub use connector::{MockChatClient, MockReply, OpenRouterClient, TextFileExporter};

pub use domain::{
    ChatMessage, ChatRole, CompletionSettings, DomainError, ExportFile, Mode, Notice, NoticeKind,
};
