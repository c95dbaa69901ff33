//! Prompt text shared by the HTTP providers.

use pcommon::{leading_words, truncate_chars};

pub const SYSTEM_PREAMBLE: &str = "You are a helpful AI assistant.";

pub const TITLE_MAX_TOKENS: u32 = 50;
pub const TITLE_TEMPERATURE: f64 = 0.3;

const TITLE_EXCERPT_CHARS: usize = 200;
const FALLBACK_TITLE_WORDS: usize = 5;

pub fn title_prompt(first_user_message: &str, first_ai_response: &str) -> String {
    format!(
        "Generate a short, concise title (max 6 words) for a conversation that starts with:\n\
         User: {}\n\
         Assistant: {}\n\n\
         Respond with only the title, no quotes or extra text.",
        truncate_chars(first_user_message, TITLE_EXCERPT_CHARS),
        truncate_chars(first_ai_response, TITLE_EXCERPT_CHARS),
    )
}

/// Local title used whenever a provider cannot produce one.
pub fn fallback_title(first_user_message: &str) -> String {
    leading_words(first_user_message, FALLBACK_TITLE_WORDS)
}
