use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

const IMAGE_SYSTEM_PROMPT: &str = "\
You are an expert at enhancing image generation prompts. Take the user's simple prompt \
and expand it into a detailed, vivid, and creative prompt that will produce stunning images. \
Include artistic style, lighting, composition, colors, mood, and technical details. \
Make it specific and evocative.";

const VIDEO_SYSTEM_PROMPT: &str = "\
You are an expert at enhancing video generation prompts. Take the user's simple prompt \
and expand it into a detailed, cinematic prompt that will produce engaging videos. \
Include camera movements, scene transitions, lighting, mood, pacing, and visual \
storytelling elements. Make it specific and cinematic.";

/// The content-generation target a prompt is enhanced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Image,
    Video,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Image => "image",
            Mode::Video => "video",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Image => "Image Generation",
            Mode::Video => "Video Generation",
        }
    }

    /// Instruction text sent as the system turn.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Mode::Image => IMAGE_SYSTEM_PROMPT,
            Mode::Video => VIDEO_SYSTEM_PROMPT,
        }
    }

    /// Wraps the raw prompt, untouched, in the user-turn template.
    pub fn user_prompt(&self, raw: &str) -> String {
        format!("Enhance this {} prompt: \"{}\"", self.as_str(), raw)
    }
}

impl std::str::FromStr for Mode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "image" | "images" => Ok(Mode::Image),
            "video" | "videos" => Ok(Mode::Video),
            other => Err(DomainError::validation(format!(
                "Unknown mode '{}': expected 'image' or 'video'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
