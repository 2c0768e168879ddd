//! Translation client for the public `translate_a/single` endpoint

use std::sync::Arc;
use std::time::Duration;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::config::ServiceConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::TranslationRequest;

/// Client identifier expected by the endpoint
const CLIENT_ID: &str = "gtx";

/// Ask for the translated-text block only
const DATA_TYPE: &str = "t";

/// The endpoint rejects requests without a browser-like agent
const USER_AGENT: &str = "Mozilla/5.0";

/// Single-shot translation client that never fails outward
#[derive(Debug, Clone)]
pub struct TranslationClient {
    client: reqwest::Client,
    endpoint: Arc<str>,
}

impl TranslationClient {
    /// Create a new client against `endpoint` with a per-request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TranslationError::ConfigError {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: Arc::from(endpoint.into()),
        })
    }

    /// Create from service configuration
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        Self::new(config.translate_endpoint.clone(), config.timeout())
    }

    /// Translate `text`, degrading every failure to a marked copy of the input
    pub async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> String {
        match self.try_translate(text, source_lang, target_lang).await {
            Ok(translation) => translation,
            Err(e) => {
                warn!("Translation {} -> {} failed: {}", source_lang, target_lang, e);
                e.sentinel(text)
            }
        }
    }

    /// Translate `text`, surfacing the failure kind
    pub async fn try_translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String> {
        let request = TranslationRequest::new(text, source_lang, target_lang);

        if request.is_identity() {
            return Ok(request.text);
        }

        let body = self.send_request(&request).await?;
        let translation = extract_translation(&body)?;

        if translation.is_empty() {
            debug!("Empty translation returned, keeping original text");
            return Ok(request.text);
        }

        Ok(translation)
    }

    /// Send actual HTTP request
    async fn send_request(&self, request: &TranslationRequest) -> Result<Value> {
        debug!(
            "GET {} sl={} tl={} ({} chars)",
            self.endpoint,
            request.source_lang,
            request.target_lang,
            request.text.chars().count()
        );

        let response = self
            .client
            .get(self.endpoint.as_ref())
            .query(&[
                ("client", CLIENT_ID),
                ("sl", request.source_lang.as_str()),
                ("tl", request.target_lang.as_str()),
                ("dt", DATA_TYPE),
                ("q", request.text.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<Value>().await?)
    }

    /// Configured endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Join the translated fragments found at `[0][*][0]`.
///
/// Empty values (`null`, `false`, `0`, `""`, `[]`, `{}`) at the top level or
/// in the first block yield an empty string, and empty segments are skipped.
/// Any other deviation from the nested-array layout is an invalid response.
fn extract_translation(body: &Value) -> Result<String> {
    if is_empty_value(body) {
        return Ok(String::new());
    }

    let segments = match body {
        Value::Array(blocks) => match blocks.first() {
            Some(Value::Array(segments)) => segments,
            Some(block) if !is_empty_value(block) => {
                return Err(unexpected("first block", block));
            }
            _ => return Ok(String::new()),
        },
        other => return Err(unexpected("response", other)),
    };

    let mut translated = String::new();
    for segment in segments {
        if is_empty_value(segment) {
            continue;
        }
        let fragment = match segment {
            Value::Array(parts) => match parts.first() {
                Some(Value::String(fragment)) => fragment,
                Some(other) => return Err(unexpected("segment text", other)),
                None => continue,
            },
            other => return Err(unexpected("segment", other)),
        };
        translated.push_str(fragment);
    }

    Ok(translated)
}

/// Values the endpoint uses as "nothing here" placeholders
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn unexpected(what: &str, value: &Value) -> TranslationError {
    TranslationError::InvalidResponseError {
        message: format!("unexpected {}: {}", what, value),
    }
}
