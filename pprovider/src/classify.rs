//! Maps configuration gaps, HTTP statuses, and transport failures to `GatewayError`.
//!
//! ```rust
//! use pprovider::classify::classify_status;
//! use pprovider::{ErrorCode, ProviderId};
//!
//! assert!(classify_status(ProviderId::OpenAi, 200, "").is_ok());
//!
//! let error = classify_status(ProviderId::OpenAi, 429, "").unwrap_err();
//! assert_eq!(error.code, ErrorCode::RateLimit);
//! assert!(error.retryable);
//! ```

use crate::{GatewayError, ProviderConfig, ProviderId, TransportError};

pub fn require_api_key(provider: ProviderId, config: &ProviderConfig) -> Result<&str, GatewayError> {
    config.api_key().ok_or_else(|| {
        GatewayError::config(format!(
            "{} API key not configured",
            provider.display_name()
        ))
    })
}

pub fn classify_status(provider: ProviderId, status: u16, body: &str) -> Result<(), GatewayError> {
    match status {
        200 => Ok(()),
        429 => Err(GatewayError::rate_limited("Rate limit exceeded")),
        401 => Err(GatewayError::authentication("Invalid API key")),
        500.. => Err(GatewayError::server(format!(
            "{} server error",
            provider.display_name()
        ))),
        _ => Err(GatewayError::api(
            status,
            format!("{} API error: {}", provider.display_name(), body),
        )),
    }
}

pub fn classify_transport(failure: TransportError) -> GatewayError {
    let message = match &failure {
        TransportError::Timeout(_) => "Request timeout".to_string(),
        TransportError::Io(detail) => format!("Network error: {detail}"),
    };

    GatewayError::network(message).with_cause(failure)
}
