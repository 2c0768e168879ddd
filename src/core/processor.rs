//! Clean-then-translate pipeline shared by the HTTP API and the CLI

use tracing::info;

use crate::core::client::TranslationClient;
use crate::core::normalizer::clean_and_improve;
use crate::core::models::{ProcessedResult, TranscriptRequest};

/// Runs the normalizer and the translation client for one transcript
#[derive(Debug, Clone)]
pub struct TranscriptProcessor {
    translator: TranslationClient,
}

impl TranscriptProcessor {
    /// Wrap a translation client
    pub fn new(translator: TranslationClient) -> Self {
        Self { translator }
    }

    /// Normalize the transcript and translate the cleaned text
    pub async fn process(&self, request: &TranscriptRequest) -> ProcessedResult {
        let improved_text = clean_and_improve(&request.text);
        let source_lang = request.source_lang();

        let translated_text = self
            .translator
            .translate(&improved_text, source_lang, &request.output_lang)
            .await;

        info!(
            "Processed transcript ({} -> {}, {} chars)",
            source_lang,
            request.output_lang,
            improved_text.chars().count()
        );

        ProcessedResult {
            improved_text,
            translated_text,
        }
    }

    /// Underlying translation client
    pub fn translator(&self) -> &TranslationClient {
        &self.translator
    }
}
