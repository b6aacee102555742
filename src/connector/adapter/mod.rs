mod mock_chat_client;
mod openrouter_client;
mod text_file_exporter;

pub use mock_chat_client::*;
pub use openrouter_client::*;
pub use text_file_exporter::*;
