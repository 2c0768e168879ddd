//! Core data models for transcript processing

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default browser speech-recognition locale
pub const DEFAULT_INPUT_LANG: &str = "en-US";

/// Default translation target
pub const DEFAULT_OUTPUT_LANG: &str = "en";

fn default_input_lang() -> String {
    DEFAULT_INPUT_LANG.to_string()
}

fn default_output_lang() -> String {
    DEFAULT_OUTPUT_LANG.to_string()
}

/// Raw transcript submitted by a caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranscriptRequest {
    /// Raw speech-to-text output
    #[serde(default)]
    pub text: String,
    /// Recognition locale, e.g. `en-US`
    #[serde(default = "default_input_lang")]
    pub input_lang: String,
    /// Target language code, e.g. `si`
    #[serde(default = "default_output_lang")]
    pub output_lang: String,
}

impl TranscriptRequest {
    /// Request for `text` with the default `en-US` -> `en` languages
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            input_lang: default_input_lang(),
            output_lang: default_output_lang(),
        }
    }

    /// Set the recognition locale
    pub fn with_input_lang(mut self, input_lang: impl Into<String>) -> Self {
        self.input_lang = input_lang.into();
        self
    }

    /// Set the target language
    pub fn with_output_lang(mut self, output_lang: impl Into<String>) -> Self {
        self.output_lang = output_lang.into();
        self
    }

    /// Two-letter source code: everything before the first `-` of `input_lang`
    pub fn source_lang(&self) -> &str {
        source_lang_code(&self.input_lang)
    }
}

/// Strip the region suffix from a locale tag (`en-US` -> `en`)
pub fn source_lang_code(input_lang: &str) -> &str {
    input_lang
        .split_once('-')
        .map_or(input_lang, |(code, _)| code)
}

/// Cleaned and translated transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProcessedResult {
    /// Normalized transcript
    pub improved_text: String,
    /// Translation of `improved_text`, or a marked copy of it on failure
    pub translated_text: String,
}

/// Single outbound translation job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,
    /// Source language code
    pub source_lang: String,
    /// Target language code
    pub target_lang: String,
}

impl TranslationRequest {
    /// Create a new translation job
    pub fn new(
        text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }

    /// No outbound call is needed when both sides are the same language
    pub fn is_identity(&self) -> bool {
        self.source_lang == self.target_lang
    }
}
