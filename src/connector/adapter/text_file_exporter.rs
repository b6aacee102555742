use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::application::PromptExporter;
use crate::domain::{DomainError, ExportFile};

/// Give up after this many consecutive name collisions.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Writes export files into a directory on the local filesystem.
///
/// Content is written byte-for-byte. Existing files are never overwritten: if
/// the timestamped name is taken, the timestamp is bumped until it is free.
pub struct TextFileExporter {
    dir: PathBuf,
}

impl TextFileExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl PromptExporter for TextFileExporter {
    async fn export(&self, file: &ExportFile) -> Result<PathBuf, DomainError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let mut candidate = file.clone();
        for _ in 0..MAX_NAME_ATTEMPTS {
            let path = self.dir.join(candidate.filename());
            match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(handle) => {
                    write_or_remove(handle, &path, candidate.content()).await?;
                    debug!("Wrote {} bytes to {}", candidate.content().len(), path.display());
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    candidate = candidate.next_timestamp();
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(DomainError::internal(format!(
            "no free export filename in {}",
            self.dir.display()
        )))
    }
}

/// Write `content` through `handle`; on failure delete the file at `path` so
/// no empty or partial export keeps its name.
async fn write_or_remove<W>(mut handle: W, path: &Path, content: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let written = match handle.write_all(content.as_bytes()).await {
        Ok(()) => handle.flush().await,
        Err(e) => Err(e),
    };
    drop(handle);

    if let Err(e) = written {
        if let Err(remove_err) = tokio::fs::remove_file(path).await {
            warn!("Could not remove partial export {}: {}", path.display(), remove_err);
        }
        return Err(e);
    }
    Ok(())
}
