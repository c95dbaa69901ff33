use std::sync::{Arc, Mutex};
use std::time::Duration;

use pprovider::{
    GatewayError, ProviderId, ProviderOperationHooks, RetryPolicy, execute_with_retry,
};

use crate::{
    LayeredHooks, MetricsObservabilityHooks, SafeProviderHooks, TracingObservabilityHooks,
};

fn exercise_all_callbacks(hooks: &dyn ProviderOperationHooks) {
    let error = GatewayError::server("OpenAI server error");

    hooks.on_attempt_start(ProviderId::OpenAi, "chat", 1);
    hooks.on_retry_scheduled(
        ProviderId::OpenAi,
        "chat",
        1,
        Duration::from_millis(10),
        &error,
    );
    hooks.on_success(ProviderId::OpenAi, "chat", 2);
    hooks.on_failure(ProviderId::Claude, "generate_title", 4, &error);
}

#[test]
fn tracing_hooks_smoke_test_all_callbacks() {
    exercise_all_callbacks(&TracingObservabilityHooks);
}

#[test]
fn metrics_hooks_smoke_test_all_callbacks() {
    exercise_all_callbacks(&MetricsObservabilityHooks);
}

#[derive(Clone, Default)]
struct RecordingProviderHooks {
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl ProviderOperationHooks for RecordingProviderHooks {
    fn on_attempt_start(&self, _provider: ProviderId, _operation: &str, _attempt: u32) {
        self.events.lock().expect("events lock").push("attempt_start");
    }

    fn on_retry_scheduled(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _attempt: u32,
        _delay: Duration,
        _error: &GatewayError,
    ) {
        self.events.lock().expect("events lock").push("retry_scheduled");
    }

    fn on_success(&self, _provider: ProviderId, _operation: &str, _attempts: u32) {
        self.events.lock().expect("events lock").push("success");
    }

    fn on_failure(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _attempts: u32,
        _error: &GatewayError,
    ) {
        self.events.lock().expect("events lock").push("failure");
    }
}

struct PanicProviderHooks;

impl ProviderOperationHooks for PanicProviderHooks {
    fn on_attempt_start(&self, _provider: ProviderId, _operation: &str, _attempt: u32) {
        panic!("attempt_start panic");
    }

    fn on_retry_scheduled(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _attempt: u32,
        _delay: Duration,
        _error: &GatewayError,
    ) {
        panic!("retry_scheduled panic");
    }

    fn on_success(&self, _provider: ProviderId, _operation: &str, _attempts: u32) {
        panic!("success panic");
    }

    fn on_failure(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _attempts: u32,
        _error: &GatewayError,
    ) {
        panic!("failure panic");
    }
}

#[test]
fn safe_provider_hooks_forward_to_inner_hooks() {
    let recording = RecordingProviderHooks::default();
    let events = recording.events.clone();
    let hooks = SafeProviderHooks::new(recording);

    exercise_all_callbacks(&hooks);

    assert_eq!(
        *events.lock().expect("events lock"),
        vec!["attempt_start", "retry_scheduled", "success", "failure"]
    );
}

#[test]
fn safe_provider_hooks_contain_panics() {
    exercise_all_callbacks(&SafeProviderHooks::new(PanicProviderHooks));
}

#[test]
fn panicking_hooks_do_not_change_retry_outcome() {
    let hooks = SafeProviderHooks::new(PanicProviderHooks);
    let policy = RetryPolicy::new(2).with_initial_delay(Duration::ZERO);
    let mut calls = 0_u32;

    let result = execute_with_retry(
        ProviderId::Mock,
        "chat",
        &policy,
        &hooks,
        |attempt| {
            calls += 1;
            if attempt == 0 {
                Err(GatewayError::network("Request timeout"))
            } else {
                Ok("recovered")
            }
        },
        |_| Ok(()),
    );

    assert_eq!(result, Ok("recovered"));
    assert_eq!(calls, 2);
}

#[test]
fn layered_hooks_call_both_layers_in_order() {
    let first = RecordingProviderHooks::default();
    let second = RecordingProviderHooks {
        events: first.events.clone(),
    };
    let events = first.events.clone();
    let hooks = LayeredHooks::new(first, second);

    hooks.on_success(ProviderId::Claude, "chat", 1);
    hooks.on_attempt_start(ProviderId::Claude, "chat", 2);

    assert_eq!(
        *events.lock().expect("events lock"),
        vec!["success", "success", "attempt_start", "attempt_start"]
    );
}
