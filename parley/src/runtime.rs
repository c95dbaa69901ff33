//! Gateway wiring helpers for applications.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::{
    Gateway, GatewayBuilder, GatewayError, GatewaySettings, LayeredHooks,
    MetricsObservabilityHooks, ProviderConfig, SafeProviderHooks, TracingObservabilityHooks,
};

/// Tracing and metrics hooks, isolated from panics.
pub fn default_hooks()
-> SafeProviderHooks<LayeredHooks<TracingObservabilityHooks, MetricsObservabilityHooks>> {
    SafeProviderHooks::new(LayeredHooks::new(
        TracingObservabilityHooks,
        MetricsObservabilityHooks,
    ))
}

/// Builds a gateway for `config` with [`default_hooks`] attached.
pub fn build_gateway(config: ProviderConfig) -> Result<Gateway, GatewayError> {
    let provider = config.provider_id();
    let gateway = GatewayBuilder::from_config(config)?
        .with_hooks(Arc::new(default_hooks()))
        .build();

    tracing::info!(
        provider = %provider,
        available = gateway.is_available(),
        "gateway ready"
    );
    Ok(gateway)
}

pub fn build_gateway_from_settings(settings: &GatewaySettings) -> Result<Gateway, GatewayError> {
    build_gateway(settings.to_provider_config())
}

/// Loads settings from `path` (plus environment overrides) and builds the gateway.
pub fn load_gateway(path: &Path) -> anyhow::Result<Gateway> {
    let settings = GatewaySettings::load(path)?;
    build_gateway_from_settings(&settings)
        .with_context(|| format!("failed to build gateway from {}", path.display()))
}
