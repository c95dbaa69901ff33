//! Messages-API bodies and reply extraction.
//!
//! ```rust
//! use pprovider::claude::{decode_reply, resolve_model};
//!
//! assert_eq!(resolve_model("claude-3-haiku-20240307"), "claude-3-haiku-20240307");
//! assert_eq!(resolve_model("gpt-4o"), "claude-3-sonnet-20240229");
//!
//! let body = r#"{"content":[{"type":"text","text":"Hi!"}],"role":"assistant"}"#;
//! assert_eq!(decode_reply(body).unwrap(), "Hi!");
//! ```

use pcommon::ConversationTurn;

use crate::prompt::{TITLE_MAX_TOKENS, title_prompt};
use crate::wire::{escape_json, extract_string_field, push_conversation, push_message};
use crate::{GatewayError, ProviderConfig};

pub const CLAUDE_BASE_URL: &str = "https://api.anthropic.com/v1";
pub const CLAUDE_MESSAGES_PATH: &str = "messages";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const DEFAULT_CLAUDE_MODEL: &str = "claude-3-sonnet-20240229";

const CONTENT_MARKER: &str = "\"content\":";
const TEXT_MARKER: &str = "\"text\":";

/// Keeps Claude model ids and swaps anything else for the default.
pub fn resolve_model(configured: &str) -> &str {
    if configured.starts_with("claude") {
        configured
    } else {
        DEFAULT_CLAUDE_MODEL
    }
}

pub fn encode_chat(config: &ProviderConfig, user_message: &str, history: &[ConversationTurn]) -> String {
    let mut body = open_body(&config.model);
    push_conversation(&mut body, history, user_message);
    close_body(body, config.max_tokens)
}

pub fn encode_title(config: &ProviderConfig, first_user_message: &str, first_ai_response: &str) -> String {
    let mut body = open_body(&config.model);
    push_message(
        &mut body,
        "user",
        &title_prompt(first_user_message, first_ai_response),
    );
    close_body(body, TITLE_MAX_TOKENS)
}

/// First `"text":` value inside the `content` blocks, or anywhere when the
/// body has no `content` array.
pub fn decode_reply(body: &str) -> Result<String, GatewayError> {
    let from = body.find(CONTENT_MARKER).unwrap_or(0);
    extract_string_field(body, TEXT_MARKER, from)
}

fn open_body(model: &str) -> String {
    format!(
        "{{\"model\":\"{}\",\"messages\":[",
        escape_json(resolve_model(model))
    )
}

fn close_body(mut body: String, max_tokens: u32) -> String {
    body.push_str(&format!("],\"max_tokens\":{max_tokens}}}"));
    body
}
