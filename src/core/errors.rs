//! Custom error types for translation operations

use thiserror::Error;

/// Marker prefixed to the input when the outbound call times out
pub const TIMEOUT_MARKER: &str = "[Translation timeout]";

/// Marker prefixed to the input on transport or HTTP status failures
pub const FAILED_MARKER: &str = "[Translation failed]";

/// Marker prefixed to the input on any other failure
pub const ERROR_MARKER: &str = "[Translation error]";

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Request timeout
    #[error("Request timeout")]
    TimeoutError,

    /// Connection or transport failure
    #[error("Network error: {message}")]
    NetworkError {
        /// Transport error description
        message: String,
    },

    /// Non-2xx response from the translation endpoint
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Status error description
        message: String,
    },

    /// Body was not JSON or did not have the expected nesting
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        /// What was wrong with the body
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What was rejected
        message: String,
    },
}

impl TranslationError {
    /// Sentinel marker identifying this failure kind in degraded output
    pub fn marker(&self) -> &'static str {
        match self {
            TranslationError::TimeoutError => TIMEOUT_MARKER,
            TranslationError::NetworkError { .. } | TranslationError::ApiError { .. } => {
                FAILED_MARKER
            }
            TranslationError::InvalidResponseError { .. }
            | TranslationError::ConfigError { .. } => ERROR_MARKER,
        }
    }

    /// Degrade to the best-effort string returned in place of a translation
    pub fn sentinel(&self, text: &str) -> String {
        format!("{} {}", self.marker(), text)
    }
}

impl From<reqwest::Error> for TranslationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return TranslationError::TimeoutError;
        }
        match err.status() {
            Some(status) => TranslationError::ApiError {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None if err.is_decode() => TranslationError::InvalidResponseError {
                message: err.to_string(),
            },
            None => TranslationError::NetworkError {
                message: err.to_string(),
            },
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
