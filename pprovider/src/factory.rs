//! Provider construction from static configuration.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use pprovider::{ProviderConfig, ProviderId, build_provider};
//!
//! let provider = build_provider(Arc::new(ProviderConfig::new("nonsense"))).unwrap();
//! assert_eq!(provider.id(), ProviderId::Mock);
//! assert!(provider.is_configured());
//! ```

use std::sync::Arc;

use crate::adapters::mock::MockProvider;
use crate::{ChatProvider, GatewayError, HttpTransport, ProviderConfig, ProviderId};

/// Selects the client for `config.provider_id()`. A missing API key is not an
/// error here; the client reports it on first use.
pub fn build_provider(config: Arc<ProviderConfig>) -> Result<Arc<dyn ChatProvider>, GatewayError> {
    let provider_id = config.provider_id();
    tracing::info!(provider = %provider_id, model = %config.model, "building chat provider");

    match provider_id {
        ProviderId::OpenAi => build_openai_provider(config),
        ProviderId::Claude => build_claude_provider(config),
        ProviderId::Mock => Ok(Arc::new(MockProvider::new())),
    }
}

/// Same selection as [`build_provider`] over a caller-supplied transport.
pub fn build_provider_with_transport(
    config: Arc<ProviderConfig>,
    transport: Arc<dyn HttpTransport>,
) -> Result<Arc<dyn ChatProvider>, GatewayError> {
    match config.provider_id() {
        #[cfg(feature = "provider-openai")]
        ProviderId::OpenAi => Ok(Arc::new(crate::adapters::openai::OpenAiProvider::new(
            config, transport,
        ))),
        #[cfg(feature = "provider-claude")]
        ProviderId::Claude => Ok(Arc::new(crate::adapters::claude::ClaudeProvider::new(
            config, transport,
        ))),
        ProviderId::Mock => Ok(Arc::new(MockProvider::new())),
        #[allow(unreachable_patterns)]
        other => Err(feature_disabled(other)),
    }
}

#[cfg(feature = "provider-openai")]
fn build_openai_provider(config: Arc<ProviderConfig>) -> Result<Arc<dyn ChatProvider>, GatewayError> {
    Ok(Arc::new(
        crate::adapters::openai::OpenAiProvider::with_default_transport(config)?,
    ))
}

#[cfg(not(feature = "provider-openai"))]
fn build_openai_provider(_config: Arc<ProviderConfig>) -> Result<Arc<dyn ChatProvider>, GatewayError> {
    Err(feature_disabled(ProviderId::OpenAi))
}

#[cfg(feature = "provider-claude")]
fn build_claude_provider(config: Arc<ProviderConfig>) -> Result<Arc<dyn ChatProvider>, GatewayError> {
    Ok(Arc::new(
        crate::adapters::claude::ClaudeProvider::with_default_transport(config)?,
    ))
}

#[cfg(not(feature = "provider-claude"))]
fn build_claude_provider(_config: Arc<ProviderConfig>) -> Result<Arc<dyn ChatProvider>, GatewayError> {
    Err(feature_disabled(ProviderId::Claude))
}

fn feature_disabled(provider: ProviderId) -> GatewayError {
    GatewayError::config(format!(
        "provider-{provider} feature is not enabled on pprovider"
    ))
}
