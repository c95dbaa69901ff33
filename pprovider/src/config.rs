//! Static provider configuration shared by every client and the retry loop.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use pprovider::{ProviderConfig, ProviderId};
//!
//! let config = ProviderConfig::new("openai")
//!     .with_api_key("sk-test")
//!     .with_model("gpt-4o-mini")
//!     .with_retry(2, Duration::from_millis(50), 1.5);
//!
//! assert_eq!(config.provider_id(), ProviderId::OpenAi);
//! assert!(config.has_api_key());
//! assert_eq!(config.retry_policy().max_retries, 2);
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use crate::{GatewayError, ProviderId, RetryPolicy, SecretString};

pub const DEFAULT_PROVIDER: &str = "mock";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 2048;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(30_000);
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(60_000);
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1_000);
pub const DEFAULT_RETRY_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    /// Raw identifier as configured; see [`ProviderConfig::provider_id`].
    pub provider: Option<String>,
    pub api_key: Option<SecretString>,
    pub base_url: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub max_retries: u32,
    pub initial_retry_delay: Duration,
    pub retry_multiplier: f64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: Some(DEFAULT_PROVIDER.to_string()),
            api_key: None,
            base_url: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            initial_retry_delay: DEFAULT_RETRY_DELAY,
            retry_multiplier: DEFAULT_RETRY_MULTIPLIER,
        }
    }
}

impl ProviderConfig {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: Some(provider.into()),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<SecretString>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeouts(mut self, connect_timeout: Duration, read_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self.read_timeout = read_timeout;
        self
    }

    pub fn with_retry(
        mut self,
        max_retries: u32,
        initial_retry_delay: Duration,
        retry_multiplier: f64,
    ) -> Self {
        self.max_retries = max_retries;
        self.initial_retry_delay = initial_retry_delay;
        self.retry_multiplier = retry_multiplier;
        self
    }

    pub fn provider_id(&self) -> ProviderId {
        ProviderId::from_config_value(self.provider.as_deref())
    }

    /// Returns the API key only when it is present and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .filter(|key| !key.is_blank())
            .map(SecretString::expose)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    pub fn base_url_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(default)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            initial_delay: self.initial_retry_delay,
            multiplier: self.retry_multiplier,
        }
    }

    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.max_tokens == 0 {
            return Err(GatewayError::config(
                "max_tokens must be greater than zero",
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(GatewayError::config(
                "temperature must be in the inclusive range 0.0..=2.0",
            ));
        }

        if !self.retry_multiplier.is_finite() || self.retry_multiplier < 0.0 {
            return Err(GatewayError::config(
                "retry_multiplier must be a finite, non-negative number",
            ));
        }

        Ok(())
    }
}
