//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Public endpoint of the unauthenticated translation service
pub const DEFAULT_TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Default listen host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Outbound request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Prefix of environment overrides, e.g. `TRANSCRIPT_PORT`
pub const ENV_PREFIX: &str = "TRANSCRIPT";

/// Configuration for the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Listen host: IP literal or hostname
    pub host: String,
    /// Listen port
    pub port: u16,
    /// URL of the translation endpoint
    pub translate_endpoint: String,
    /// Outbound request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            translate_endpoint: DEFAULT_TRANSLATE_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ServiceConfig {
    /// Load defaults, then the optional file, then `TRANSCRIPT_*` variables
    pub fn load(file: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("translate_endpoint", DEFAULT_TRANSLATE_ENDPOINT)?
            .set_default("timeout_ms", DEFAULT_TIMEOUT_MS as i64)?;

        if let Some(path) = file {
            info!("Loading configuration from {}", path.display());
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.translate_endpoint.is_empty() {
            return Err(anyhow::anyhow!("Translation endpoint is required"));
        }

        if self.port == 0 {
            return Err(anyhow::anyhow!("port must be greater than 0"));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        Ok(())
    }

    /// Outbound request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Listen address as `host:port`, with IPv6 literals bracketed
    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}
