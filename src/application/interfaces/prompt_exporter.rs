use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::{DomainError, ExportFile};

/// Delivers an [`ExportFile`] somewhere the user can pick it up.
#[async_trait]
pub trait PromptExporter: Send + Sync {
    /// Write the file and return where it ended up.
    async fn export(&self, file: &ExportFile) -> Result<PathBuf, DomainError>;
}
