mod chat_client;
mod prompt_exporter;

pub use chat_client::*;
pub use prompt_exporter::*;
