mod codec;
mod provider;

pub use codec::{OPENAI_BASE_URL, OPENAI_CHAT_PATH, decode_reply, encode_chat, encode_title};
pub use provider::OpenAiProvider;
