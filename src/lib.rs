//! Transcript Translator - speech transcript cleanup and translation service
//!
//! This library normalizes raw speech-to-text output and forwards it to a
//! public translation endpoint, exposed over a small HTTP API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;
pub mod server;
pub mod cli;

// Re-export key types for convenience
pub use crate::core::{
    client::TranslationClient,
    config::ServiceConfig,
    models::{ProcessedResult, TranscriptRequest, TranslationRequest},
    normalizer::clean_and_improve,
    processor::TranscriptProcessor,
    errors::TranslationError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
