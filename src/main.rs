//! Main entry point for Transcript Translator

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use transcript_translator::cli::commands::{self, Commands};
use transcript_translator::ServiceConfig;

/// Transcript Translator - clean up speech transcripts and translate them
#[derive(Parser, Debug)]
#[command(name = "transcript-translator", version, about, long_about = None)]
struct Args {
    /// Configuration file (TOML, JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}={}", env!("CARGO_CRATE_NAME"), log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::load(args.config.as_deref())?;

    match args.command {
        Some(Commands::Serve { host, port }) => {
            commands::handle_serve(config, host, port).await?;
        }
        Some(Commands::Clean { text }) => {
            commands::handle_clean(&text)?;
        }
        Some(Commands::Translate {
            text,
            input_lang,
            output_lang,
        }) => {
            commands::handle_translate(config, text, input_lang, output_lang).await?;
        }
        None => {
            commands::handle_serve(config, None, None).await?;
        }
    }

    Ok(())
}
