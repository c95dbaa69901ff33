//! Retry/backoff policy, cancellable waits, and operational hook contracts.

use std::time::Duration;

use pcommon::{CancellationToken, Cancelled};

use crate::{GatewayError, ProviderId};

#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(1_000),
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    pub fn with_initial_delay(mut self, initial_delay: Duration) -> Self {
        self.initial_delay = initial_delay;
        self
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// `attempt` is zero-based; the first call is attempt 0.
    pub fn should_retry(&self, attempt: u32, error: &GatewayError) -> bool {
        error.retryable && attempt < self.max_retries
    }

    /// Wait that follows a failed `attempt`: `initial_delay * multiplier^attempt`.
    pub fn delay_after_attempt(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let nanos = self.initial_delay.as_nanos() as f64 * self.multiplier.powi(exponent);

        if nanos.is_nan() || nanos <= 0.0 {
            Duration::ZERO
        } else if nanos >= u64::MAX as f64 {
            Duration::MAX
        } else {
            Duration::from_nanos(nanos.round() as u64)
        }
    }

    pub fn total_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

/// Blocking wait between attempts that a caller can interrupt.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, delay: Duration, cancel: &CancellationToken) -> Result<(), Cancelled>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CancellableSleeper;

impl Sleeper for CancellableSleeper {
    fn sleep(&self, delay: Duration, cancel: &CancellationToken) -> Result<(), Cancelled> {
        cancel.wait_timeout(delay)
    }
}

/// Attempt numbers passed to hooks are one-based.
pub trait ProviderOperationHooks: Send + Sync {
    fn on_attempt_start(&self, _provider: ProviderId, _operation: &str, _attempt: u32) {}

    fn on_retry_scheduled(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _attempt: u32,
        _delay: Duration,
        _error: &GatewayError,
    ) {
    }

    fn on_success(&self, _provider: ProviderId, _operation: &str, _attempts: u32) {}

    fn on_failure(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _attempts: u32,
        _error: &GatewayError,
    ) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOperationHooks;

impl ProviderOperationHooks for NoopOperationHooks {}

/// Runs `execute` until it succeeds, fails with a non-retryable error, or the
/// retry budget is spent. `execute` receives the zero-based attempt index.
pub fn execute_with_retry<T, Op, Sleep>(
    provider: ProviderId,
    operation: &str,
    policy: &RetryPolicy,
    hooks: &dyn ProviderOperationHooks,
    mut execute: Op,
    mut sleep: Sleep,
) -> Result<T, GatewayError>
where
    Op: FnMut(u32) -> Result<T, GatewayError>,
    Sleep: FnMut(Duration) -> Result<(), Cancelled>,
{
    let mut attempt = 0;

    loop {
        hooks.on_attempt_start(provider, operation, attempt + 1);

        match execute(attempt) {
            Ok(value) => {
                hooks.on_success(provider, operation, attempt + 1);
                return Ok(value);
            }
            Err(error) => {
                if policy.should_retry(attempt, &error) {
                    let delay = policy.delay_after_attempt(attempt);
                    hooks.on_retry_scheduled(provider, operation, attempt + 1, delay, &error);

                    if let Err(cancelled) = sleep(delay) {
                        let interrupted = GatewayError::interrupted(cancelled);
                        hooks.on_failure(provider, operation, attempt + 1, &interrupted);
                        return Err(interrupted);
                    }

                    attempt += 1;
                    continue;
                }

                hooks.on_failure(provider, operation, attempt + 1, &error);
                return Err(error);
            }
        }
    }
}
