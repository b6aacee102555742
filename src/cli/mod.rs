use clap::Subcommand;

use crate::domain::Mode;

#[derive(Subcommand)]
pub enum Commands {
    /// Enhance a single prompt and print the result
    Enhance {
        prompt: String,

        /// Content type the prompt is for (image or video)
        #[arg(short, long)]
        mode: Mode,

        /// Also save the enhanced prompt as a text file in the output directory
        #[arg(short, long)]
        save: bool,
    },

    /// Start a line-oriented session: pick a mode, type prompts, save results
    Interactive,

    /// Serve the enhancer over HTTP so the API key stays on the server
    Serve {
        #[arg(long, default_value = "8787")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },
}
