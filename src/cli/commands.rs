//! CLI command definitions and handlers

use clap::Subcommand;
use tracing::info;

use crate::core::config::ServiceConfig;
use crate::core::models::{TranscriptRequest, DEFAULT_INPUT_LANG, DEFAULT_OUTPUT_LANG};
use crate::core::normalizer::clean_and_improve;
use crate::server::api::{run_server, AppState};

/// Commands for Transcript Translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP API server
    Serve {
        /// Bind address (overrides configuration)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (overrides configuration)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the cleaned-up form of a transcript
    Clean {
        /// Raw transcript text
        text: String,
    },

    /// Clean and translate a transcript once, as the API would
    Translate {
        /// Raw transcript text
        text: String,

        /// Recognition locale of the transcript
        #[arg(short, long, default_value = DEFAULT_INPUT_LANG)]
        input_lang: String,

        /// Target language code
        #[arg(short, long, default_value = DEFAULT_OUTPUT_LANG)]
        output_lang: String,
    },
}

/// Handle server command
pub async fn handle_serve(
    mut config: ServiceConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config.validate()?;

    info!("Starting HTTP server on {}", config.bind_addr());
    println!("🚀 Server starting on http://{}", config.bind_addr());
    println!("📄 OpenAPI document: http://{}/openapi.json", config.bind_addr());

    run_server(config).await
}

/// Handle clean command
pub fn handle_clean(text: &str) -> anyhow::Result<()> {
    println!("{}", clean_and_improve(text));
    Ok(())
}

/// Handle one-off translation command
pub async fn handle_translate(
    config: ServiceConfig,
    text: String,
    input_lang: String,
    output_lang: String,
) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    let request = TranscriptRequest::new(text)
        .with_input_lang(input_lang)
        .with_output_lang(output_lang);

    info!(
        "Translating from {} to {}",
        request.source_lang(),
        request.output_lang
    );

    let result = state.processor().process(&request).await;

    println!("Improved:   {}", result.improved_text);
    println!("Translated: {}", result.translated_text);

    Ok(())
}
