use std::str::FromStr;

use super::GatewaySettings;

impl GatewaySettings {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("PARLEY_AI_PROVIDER") {
            self.ai.provider = v;
        }
        if let Ok(v) = std::env::var("PARLEY_AI_API_KEY") {
            self.ai.api_key = Some(v);
        }
        if let Ok(v) = std::env::var("PARLEY_AI_BASE_URL") {
            self.ai.base_url = Some(v);
        }
        if let Ok(v) = std::env::var("PARLEY_AI_MODEL") {
            self.ai.model = v;
        }

        override_parsed("PARLEY_AI_MAX_TOKENS", &mut self.ai.max_tokens);
        override_parsed("PARLEY_AI_TEMPERATURE", &mut self.ai.temperature);
        override_parsed(
            "PARLEY_AI_CONNECT_TIMEOUT_MS",
            &mut self.ai.connect_timeout_ms,
        );
        override_parsed("PARLEY_AI_READ_TIMEOUT_MS", &mut self.ai.read_timeout_ms);
        override_parsed("PARLEY_AI_MAX_RETRIES", &mut self.ai.max_retries);
        override_parsed("PARLEY_AI_RETRY_DELAY_MS", &mut self.ai.retry_delay_ms);
        override_parsed("PARLEY_AI_RETRY_MULTIPLIER", &mut self.ai.retry_multiplier);
    }
}

fn override_parsed<T: FromStr>(key: &str, slot: &mut T) {
    if let Ok(v) = std::env::var(key) {
        match v.trim().parse::<T>() {
            Ok(parsed) => *slot = parsed,
            Err(_) => tracing::warn!("ignoring invalid {key} value: {v}"),
        }
    }
}
