//! OpenAI-compatible chat-completions client.

use std::sync::Arc;

use pcommon::ConversationTurn;

use crate::adapters::http::{endpoint, send, title_or_fallback};
use crate::classify::require_api_key;
use crate::{
    ChatProvider, GatewayError, HttpRequest, HttpTransport, ProviderConfig, ProviderId,
    ReqwestTransport,
};

use super::codec::{OPENAI_BASE_URL, OPENAI_CHAT_PATH, decode_reply, encode_chat, encode_title};

#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    config: Arc<ProviderConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl OpenAiProvider {
    pub fn new(config: Arc<ProviderConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Builds a reqwest transport from the configured timeouts.
    pub fn with_default_transport(config: Arc<ProviderConfig>) -> Result<Self, GatewayError> {
        let transport = ReqwestTransport::new(config.connect_timeout, config.read_timeout)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    fn post(&self, body: String) -> Result<String, GatewayError> {
        let api_key = require_api_key(ProviderId::OpenAi, &self.config)?;
        let request = HttpRequest {
            url: endpoint(self.config.base_url_or(OPENAI_BASE_URL), OPENAI_CHAT_PATH),
            headers: vec![("Authorization", format!("Bearer {api_key}"))],
            body,
        };

        send(ProviderId::OpenAi, self.transport.as_ref(), request)
    }
}

impl ChatProvider for OpenAiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::OpenAi
    }

    fn chat(&self, user_message: &str, history: &[ConversationTurn]) -> Result<String, GatewayError> {
        let body = encode_chat(&self.config, user_message, history);
        let response = self.post(body)?;
        decode_reply(&response)
    }

    fn generate_title(
        &self,
        first_user_message: &str,
        first_ai_response: &str,
    ) -> Result<String, GatewayError> {
        let outcome = self
            .post(encode_title(&self.config, first_user_message, first_ai_response))
            .and_then(|response| decode_reply(&response));

        Ok(title_or_fallback(
            ProviderId::OpenAi,
            first_user_message,
            outcome,
        ))
    }

    fn is_configured(&self) -> bool {
        self.config.has_api_key()
    }
}
