use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{ChatClient, PromptExporter};
use crate::{
    EnhancePromptUseCase, ExportPromptUseCase, MockChatClient, OpenRouterClient, TextFileExporter,
};

pub struct ContainerConfig {
    /// Answer from the in-process mock instead of calling the completion service.
    pub mock: bool,
    /// Overrides `OPENROUTER_MODEL`.
    pub model: Option<String>,
    /// Where exported prompts are written. A leading `~` is expanded.
    pub output_dir: String,
}

pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    exporter: Arc<dyn PromptExporter>,
    output_dir: PathBuf,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let chat_client: Arc<dyn ChatClient> = if config.mock {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::new())
        } else {
            let client = OpenRouterClient::from_env(config.model.as_deref())?;
            debug!(
                "Using completion service at {} (model {})",
                client.url(),
                client.settings().model()
            );
            Arc::new(client)
        };

        let output_dir = PathBuf::from(expand_tilde(&config.output_dir));
        let exporter: Arc<dyn PromptExporter> = Arc::new(TextFileExporter::new(output_dir.clone()));

        Ok(Self {
            chat_client,
            exporter,
            output_dir,
        })
    }

    /// Assemble a container from already-built adapters.
    pub fn with_adapters(
        chat_client: Arc<dyn ChatClient>,
        exporter: Arc<dyn PromptExporter>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            chat_client,
            exporter,
            output_dir: output_dir.into(),
        }
    }

    pub fn enhance_use_case(&self) -> EnhancePromptUseCase {
        EnhancePromptUseCase::new(self.chat_client.clone())
    }

    pub fn export_use_case(&self) -> ExportPromptUseCase {
        ExportPromptUseCase::new(self.exporter.clone())
    }

    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
