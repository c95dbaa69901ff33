use std::sync::Arc;
use std::thread;
use std::time::Duration;

use pchat::Gateway;
use pprovider::{ChatProvider, MockProvider, RetryPolicy};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn gateway_parts_are_send_and_sync() {
    assert_send_sync::<Gateway>();
    assert_send_sync::<Arc<dyn ChatProvider>>();
    assert_send_sync::<RetryPolicy>();
}

#[test]
fn shared_gateway_serves_concurrent_callers() {
    let provider = MockProvider::new().with_latency(Duration::from_millis(5));
    let gateway = Arc::new(Gateway::builder(Arc::new(provider)).build());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let gateway = Arc::clone(&gateway);
            thread::spawn(move || gateway.send_message(&format!("hello {i}"), &[]))
        })
        .collect();

    for handle in handles {
        let reply = handle
            .join()
            .expect("caller thread")
            .expect("mock reply");
        assert!(reply.contains("Hello"));
    }
    assert!(gateway.is_available());
}
