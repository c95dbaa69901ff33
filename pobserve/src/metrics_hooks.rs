//! Counters and histograms for provider attempts, retries, and outcomes.
//!
//! Nothing is recorded unless the application installs a `metrics` recorder.

use std::time::Duration;

use pprovider::{GatewayError, ProviderId, ProviderOperationHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl ProviderOperationHooks for MetricsObservabilityHooks {
    fn on_attempt_start(&self, provider: ProviderId, operation: &str, _attempt: u32) {
        metrics::counter!(
            "parley_provider_attempts_total",
            "provider" => provider.to_string(),
            "operation" => operation.to_string()
        )
        .increment(1);
    }

    fn on_retry_scheduled(
        &self,
        provider: ProviderId,
        operation: &str,
        _attempt: u32,
        delay: Duration,
        error: &GatewayError,
    ) {
        metrics::counter!(
            "parley_provider_retries_total",
            "provider" => provider.to_string(),
            "operation" => operation.to_string(),
            "error_code" => error.code.as_str()
        )
        .increment(1);
        metrics::histogram!(
            "parley_provider_retry_delay_seconds",
            "provider" => provider.to_string(),
            "operation" => operation.to_string()
        )
        .record(delay.as_secs_f64());
    }

    fn on_success(&self, provider: ProviderId, operation: &str, attempts: u32) {
        metrics::counter!(
            "parley_provider_success_total",
            "provider" => provider.to_string(),
            "operation" => operation.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "parley_provider_attempts_per_call",
            "provider" => provider.to_string(),
            "operation" => operation.to_string(),
            "outcome" => "success"
        )
        .record(f64::from(attempts));
    }

    fn on_failure(
        &self,
        provider: ProviderId,
        operation: &str,
        attempts: u32,
        error: &GatewayError,
    ) {
        metrics::counter!(
            "parley_provider_failure_total",
            "provider" => provider.to_string(),
            "operation" => operation.to_string(),
            "error_code" => error.code.as_str()
        )
        .increment(1);
        metrics::histogram!(
            "parley_provider_attempts_per_call",
            "provider" => provider.to_string(),
            "operation" => operation.to_string(),
            "outcome" => "failure"
        )
        .record(f64::from(attempts));
    }
}
