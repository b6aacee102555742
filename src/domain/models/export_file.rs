use crate::domain::Mode;

/// A plain-text download: the enhanced prompt and the name it is saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    mode: Mode,
    timestamp_ms: u128,
    content: String,
}

impl ExportFile {
    pub fn new(mode: Mode, content: impl Into<String>, timestamp_ms: u128) -> Self {
        Self {
            mode,
            timestamp_ms,
            content: content.into(),
        }
    }

    /// `enhanced-<mode>-prompt-<unix-ms>.txt`
    pub fn filename(&self) -> String {
        format!(
            "enhanced-{}-prompt-{}.txt",
            self.mode.as_str(),
            self.timestamp_ms
        )
    }

    /// The same file one millisecond later, for resolving name collisions.
    pub fn next_timestamp(&self) -> Self {
        Self {
            timestamp_ms: self.timestamp_ms + 1,
            ..self.clone()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn timestamp_ms(&self) -> u128 {
        self.timestamp_ms
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

pub fn current_timestamp_millis() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
