//! Hand-assembled chat-completions bodies and reply extraction.

use pcommon::ConversationTurn;

use crate::prompt::{SYSTEM_PREAMBLE, TITLE_MAX_TOKENS, TITLE_TEMPERATURE, title_prompt};
use crate::wire::{escape_json, extract_string_field, push_conversation, push_message};
use crate::{GatewayError, ProviderConfig};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const OPENAI_CHAT_PATH: &str = "chat/completions";

const CONTENT_MARKER: &str = "\"content\":";

pub fn encode_chat(config: &ProviderConfig, user_message: &str, history: &[ConversationTurn]) -> String {
    let mut body = open_body(&config.model);
    push_message(&mut body, "system", SYSTEM_PREAMBLE);
    push_conversation(&mut body, history, user_message);
    close_body(body, config.max_tokens, config.temperature)
}

pub fn encode_title(config: &ProviderConfig, first_user_message: &str, first_ai_response: &str) -> String {
    let mut body = open_body(&config.model);
    push_message(
        &mut body,
        "user",
        &title_prompt(first_user_message, first_ai_response),
    );
    close_body(body, TITLE_MAX_TOKENS, TITLE_TEMPERATURE)
}

/// Text of the first `"content":` string in a chat-completions response.
pub fn decode_reply(body: &str) -> Result<String, GatewayError> {
    extract_string_field(body, CONTENT_MARKER, 0)
}

fn open_body(model: &str) -> String {
    format!("{{\"model\":\"{}\",\"messages\":[", escape_json(model))
}

fn close_body(mut body: String, max_tokens: u32, temperature: f64) -> String {
    body.push_str(&format!(
        "],\"max_tokens\":{max_tokens},\"temperature\":{temperature:.1}}}"
    ));
    body
}
