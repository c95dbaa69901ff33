//! Gateway settings: an optional TOML file with environment overrides on top.
//!
//! ```rust
//! use parley::GatewaySettings;
//!
//! let settings: GatewaySettings = toml::from_str(
//!     r#"
//!     [ai]
//!     provider = "claude"
//!     model = "claude-3-haiku-20240307"
//!     max_retries = 1
//!     "#,
//! )
//! .unwrap();
//!
//! let config = settings.to_provider_config();
//! assert_eq!(config.model, "claude-3-haiku-20240307");
//! assert_eq!(config.max_retries, 1);
//! assert_eq!(config.max_tokens, 2048);
//! ```

mod env;


use std::fmt::{Debug, Formatter};
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use pprovider::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_MAX_RETRIES, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_PROVIDER, DEFAULT_READ_TIMEOUT, DEFAULT_RETRY_DELAY, DEFAULT_RETRY_MULTIPLIER,
    DEFAULT_TEMPERATURE, ProviderConfig, SecretString,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GatewaySettings {
    pub ai: AiSettings,
}

#[derive(Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    pub provider: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub connect_timeout_ms: u64,
    pub read_timeout_ms: u64,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
    pub retry_multiplier: f64,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            api_key: None,
            base_url: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            connect_timeout_ms: millis(DEFAULT_CONNECT_TIMEOUT),
            read_timeout_ms: millis(DEFAULT_READ_TIMEOUT),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay_ms: millis(DEFAULT_RETRY_DELAY),
            retry_multiplier: DEFAULT_RETRY_MULTIPLIER,
        }
    }
}

impl Debug for AiSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiSettings")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("read_timeout_ms", &self.read_timeout_ms)
            .field("max_retries", &self.max_retries)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .field("retry_multiplier", &self.retry_multiplier)
            .finish()
    }
}

impl GatewaySettings {
    /// Load settings from a TOML file, then apply `PARLEY_AI_*` overrides.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut settings = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            toml::from_str::<Self>(&content)
                .with_context(|| format!("failed to parse config file {}", path.display()))?
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };

        settings.apply_env_overrides();
        Ok(settings)
    }

    /// Defaults plus `PARLEY_AI_*` overrides, without touching the filesystem.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        settings.apply_env_overrides();
        settings
    }

    pub fn to_provider_config(&self) -> ProviderConfig {
        let ai = &self.ai;

        ProviderConfig {
            provider: Some(ai.provider.clone()),
            api_key: ai.api_key.as_deref().map(SecretString::from),
            base_url: ai.base_url.clone(),
            model: ai.model.clone(),
            max_tokens: ai.max_tokens,
            temperature: ai.temperature,
            connect_timeout: Duration::from_millis(ai.connect_timeout_ms),
            read_timeout: Duration::from_millis(ai.read_timeout_ms),
            max_retries: ai.max_retries,
            initial_retry_delay: Duration::from_millis(ai.retry_delay_ms),
            retry_multiplier: ai.retry_multiplier,
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
