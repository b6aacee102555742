use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::application::PromptExporter;
use crate::domain::{current_timestamp_millis, DomainError, ExportFile, Mode};

pub const NOTHING_TO_EXPORT_MESSAGE: &str = "No enhanced prompt to download";

pub struct ExportPromptUseCase {
    exporter: Arc<dyn PromptExporter>,
}

impl ExportPromptUseCase {
    pub fn new(exporter: Arc<dyn PromptExporter>) -> Self {
        Self { exporter }
    }

    /// Save `text` verbatim as `enhanced-<mode>-prompt-<unix-ms>.txt`.
    pub async fn execute(&self, mode: Mode, text: &str) -> Result<PathBuf, DomainError> {
        if text.is_empty() {
            return Err(DomainError::validation(NOTHING_TO_EXPORT_MESSAGE));
        }

        let file = ExportFile::new(mode, text, current_timestamp_millis());
        let path = self.exporter.export(&file).await?;

        info!("Exported enhanced {} prompt to {}", mode, path.display());
        Ok(path)
    }
}
