#![cfg(feature = "provider-claude")]

use std::sync::{Arc, Mutex};

use pprovider::claude::ClaudeProvider;
use pprovider::{
    ChatProvider, ConversationTurn, ErrorCode, HttpRequest, HttpResponse, HttpTransport,
    ProviderConfig, ProviderId, TransportError,
};

#[derive(Debug, Default)]
struct FakeTransport {
    status: u16,
    body: String,
    captured: Mutex<Option<HttpRequest>>,
}

impl FakeTransport {
    fn replying(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.to_string(),
            captured: Mutex::new(None),
        })
    }
}

impl HttpTransport for FakeTransport {
    fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        *self.captured.lock().expect("request lock") = Some(request);
        Ok(HttpResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

fn claude_config() -> Arc<ProviderConfig> {
    Arc::new(
        ProviderConfig::new("anthropic")
            .with_api_key("sk-ant-live")
            .with_model("claude-3-haiku-20240307"),
    )
}

#[test]
fn chat_sends_claude_headers_and_decodes_text_block() {
    let transport = FakeTransport::replying(
        200,
        r#"{"id":"msg_01","type":"message","role":"assistant","content":[{"type":"text","text":"Ownership moves values."}],"stop_reason":"end_turn"}"#,
    );
    let provider = ClaudeProvider::new(claude_config(), transport.clone());
    let history = vec![
        ConversationTurn::user("What is Rust?"),
        ConversationTurn::assistant("A systems language."),
    ];

    let reply = provider
        .chat("Explain ownership", &history)
        .expect("chat should succeed");
    assert_eq!(reply, "Ownership moves values.");
    assert_eq!(provider.id(), ProviderId::Claude);

    let captured = transport
        .captured
        .lock()
        .expect("request lock")
        .clone()
        .expect("request captured");
    assert_eq!(captured.url, "https://api.anthropic.com/v1/messages");
    assert!(captured
        .headers
        .contains(&("x-api-key", "sk-ant-live".to_string())));
    assert!(captured
        .headers
        .contains(&("anthropic-version", "2023-06-01".to_string())));

    let body: serde_json::Value =
        serde_json::from_str(&captured.body).expect("request body is JSON");
    assert_eq!(body["model"], "claude-3-haiku-20240307");
    assert_eq!(body["max_tokens"], 2048);
    assert!(body.get("temperature").is_none());
    let messages = body["messages"].as_array().expect("messages");
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2]["content"], "Explain ownership");
}

#[test]
fn status_codes_map_to_gateway_errors() {
    let cases = [
        (401, ErrorCode::AuthError, false),
        (429, ErrorCode::RateLimit, true),
        (529, ErrorCode::ServerError, true),
        (400, ErrorCode::ApiError, false),
    ];

    for (status, code, retryable) in cases {
        let transport = FakeTransport::replying(status, r#"{"error":{"type":"x"}}"#);
        let provider = ClaudeProvider::new(claude_config(), transport);

        let error = provider.chat("hi", &[]).expect_err("non-200 must fail");
        assert_eq!(error.code, code, "status {status}");
        assert_eq!(error.retryable, retryable, "status {status}");
    }
}

#[test]
fn api_error_keeps_provider_body() {
    let transport = FakeTransport::replying(400, "max_tokens: too large");
    let provider = ClaudeProvider::new(claude_config(), transport);

    let error = provider.chat("hi", &[]).expect_err("400 must fail");
    assert_eq!(error.message, "Claude API error: max_tokens: too large");
}

#[test]
fn malformed_success_body_is_a_parse_error() {
    let transport = FakeTransport::replying(200, r#"{"content":[{"type":"image"}]}"#);
    let provider = ClaudeProvider::new(claude_config(), transport);

    let error = provider.chat("hi", &[]).expect_err("no text field");
    assert_eq!(error.code, ErrorCode::ParseError);
    assert_eq!(error.message, "Invalid response format");
}

#[test]
fn title_failures_fall_back_to_leading_words() {
    let transport = FakeTransport::replying(500, "");
    let provider = ClaudeProvider::new(claude_config(), transport.clone());

    let title = provider
        .generate_title("Can you plan a week in Lisbon for me", "Sure!")
        .expect("fallback is not an error");
    assert_eq!(title, "Can you plan a week...");

    let captured = transport
        .captured
        .lock()
        .expect("request lock")
        .clone()
        .expect("title request captured");
    let body: serde_json::Value = serde_json::from_str(&captured.body).expect("JSON");
    assert_eq!(body["max_tokens"], 50);
}

#[test]
fn keyless_provider_is_unconfigured_and_never_sends() {
    let transport = FakeTransport::replying(200, "{}");
    let provider = ClaudeProvider::new(Arc::new(ProviderConfig::new("claude")), transport.clone());

    assert!(!provider.is_configured());
    let error = provider.chat("hi", &[]).expect_err("missing key");
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert!(transport.captured.lock().expect("request lock").is_none());
}
