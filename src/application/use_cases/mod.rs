mod enhance_prompt;
mod export_prompt;

pub use enhance_prompt::*;
pub use export_prompt::*;
