#![cfg(feature = "provider-openai")]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use pprovider::openai::OpenAiProvider;
use pprovider::{ChatProvider, ErrorCode, ProviderConfig, ReqwestTransport};

#[derive(Debug)]
struct CapturedRequest {
    request_line: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl CapturedRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

fn read_request(stream: &TcpStream) -> CapturedRequest {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).expect("request line");

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("header line");
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    let length = headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0_u8; length];
    reader.read_exact(&mut body).expect("request body");

    CapturedRequest {
        request_line: request_line.trim_end().to_string(),
        headers,
        body: String::from_utf8(body).expect("utf-8 body"),
    }
}

/// Serves exactly one request with the given status and body.
fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let address = listener.local_addr().expect("local addr");

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let captured = read_request(&stream);
        let response = format!(
            "HTTP/1.1 {status} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");
        captured
    });

    (format!("http://{address}/v1"), handle)
}

fn provider_for(base_url: String, read_timeout: Duration) -> OpenAiProvider {
    let config = Arc::new(
        ProviderConfig::new("openai")
            .with_api_key("sk-loopback")
            .with_base_url(base_url)
            .with_timeouts(Duration::from_secs(2), read_timeout),
    );
    let transport = ReqwestTransport::new(config.connect_timeout, config.read_timeout)
        .expect("client builds");
    OpenAiProvider::new(config, Arc::new(transport))
}

#[test]
fn chat_round_trips_over_real_http() {
    let (base_url, server) = serve_once(
        200,
        r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"Hello from loopback"}}]}"#,
    );
    let provider = provider_for(base_url, Duration::from_secs(5));

    let reply = provider.chat("ping", &[]).expect("chat succeeds");
    assert_eq!(reply, "Hello from loopback");

    let captured = server.join().expect("server thread");
    assert_eq!(captured.request_line, "POST /v1/chat/completions HTTP/1.1");
    assert_eq!(captured.header("authorization"), Some("Bearer sk-loopback"));
    assert_eq!(captured.header("content-type"), Some("application/json"));

    let body: serde_json::Value = serde_json::from_str(&captured.body).expect("JSON body");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["content"], "ping");
}

#[test]
fn server_errors_are_classified_from_real_responses() {
    let (base_url, server) = serve_once(502, "bad gateway");
    let provider = provider_for(base_url, Duration::from_secs(5));

    let error = provider.chat("ping", &[]).expect_err("502 fails");
    assert_eq!(error.code, ErrorCode::ServerError);
    assert!(error.retryable);
    server.join().expect("server thread");
}

#[test]
fn unanswered_request_times_out_as_retryable_ai_error() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let address = listener.local_addr().expect("local addr");
    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept");
        let _captured = read_request(&stream);
        thread::sleep(Duration::from_millis(1_500));
        drop(stream);
    });

    let provider = provider_for(format!("http://{address}/v1"), Duration::from_millis(200));
    let error = provider.chat("ping", &[]).expect_err("must time out");

    assert_eq!(error.code, ErrorCode::AiError);
    assert!(error.retryable);
    assert_eq!(error.message, "Request timeout");
    server.join().expect("server thread");
}

#[test]
fn refused_connection_is_a_retryable_network_error() {
    let address = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        listener.local_addr().expect("local addr")
    };

    let provider = provider_for(format!("http://{address}/v1"), Duration::from_secs(1));
    let error = provider.chat("ping", &[]).expect_err("nothing listening");

    assert_eq!(error.code, ErrorCode::AiError);
    assert!(error.retryable);
    assert!(error.message.starts_with("Network error:"));
}
