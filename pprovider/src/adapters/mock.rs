//! Canned-reply provider for development and tests. Never performs I/O.

use std::thread;
use std::time::Duration;

use pcommon::{ConversationTurn, truncate_chars};

use crate::prompt::fallback_title;
use crate::{ChatProvider, GatewayError, ProviderId};

const GREETING_REPLY: &str = "Hello! I'm a mock AI assistant. How can I help you today?";

const HELP_REPLY: &str = "I'm here to help! This is a mock response for development purposes. \
In production, this would be replaced with actual AI responses.";

const CODE_REPLY: &str = "I can help with coding questions! Here's a simple example:\n\n\
```rust\nfn main() {\n    println!(\"Hello, World!\");\n}\n```\n\n\
This is a mock response for testing purposes.";

const ECHO_EXCERPT_CHARS: usize = 50;

#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    latency: Duration,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated processing time applied to every `chat` call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Keywords are matched as substrings of the lowercased input.
    pub fn reply_for(user_message: &str) -> String {
        let lowered = user_message.to_lowercase();

        if lowered.contains("hello") || lowered.contains("hi") {
            GREETING_REPLY.to_string()
        } else if lowered.contains("help") {
            HELP_REPLY.to_string()
        } else if lowered.contains("code") || lowered.contains("programming") {
            CODE_REPLY.to_string()
        } else {
            format!(
                "Thank you for your message: \"{}\"\n\n\
                 This is a mock AI response. In production, this would be replaced with \
                 actual responses from an AI provider like OpenAI or Claude.",
                truncate_chars(user_message, ECHO_EXCERPT_CHARS)
            )
        }
    }
}

impl ChatProvider for MockProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Mock
    }

    fn chat(&self, user_message: &str, _history: &[ConversationTurn]) -> Result<String, GatewayError> {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }

        let reply = Self::reply_for(user_message);
        tracing::debug!(reply_len = reply.len(), "mock provider produced reply");
        Ok(reply)
    }

    fn generate_title(
        &self,
        first_user_message: &str,
        _first_ai_response: &str,
    ) -> Result<String, GatewayError> {
        Ok(fallback_title(first_user_message))
    }

    fn is_configured(&self) -> bool {
        true
    }
}
