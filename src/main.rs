use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use prompt_enhancer::connector::api::{Container, ContainerConfig, Router};
use prompt_enhancer::Commands;

#[derive(Parser)]
#[command(name = "prompt-enhancer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer from a local mock instead of the completion service
    #[arg(long, global = true)]
    mock: bool,

    /// Model identifier (overrides OPENROUTER_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Directory where saved prompts are written
    #[arg(short, long, global = true, default_value = ".")]
    output_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(cli.verbose, std::env::var("RUST_LOG").ok()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        mock: cli.mock,
        model: cli.model,
        output_dir: cli.output_dir,
    })?;

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}

/// `RUST_LOG` wins when it parses; otherwise `-v` picks debug over info.
fn log_filter(verbose: bool, rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(if verbose { "debug" } else { "info" }))
}
