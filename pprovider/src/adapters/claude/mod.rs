mod codec;
mod provider;

pub use codec::{
    ANTHROPIC_VERSION, CLAUDE_BASE_URL, CLAUDE_MESSAGES_PATH, DEFAULT_CLAUDE_MODEL, decode_reply,
    encode_chat, encode_title, resolve_model,
};
pub use provider::ClaudeProvider;
