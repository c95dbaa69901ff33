//! Claude messages-API client.

use std::sync::Arc;

use pcommon::ConversationTurn;

use crate::adapters::http::{endpoint, send, title_or_fallback};
use crate::classify::require_api_key;
use crate::{
    ChatProvider, GatewayError, HttpRequest, HttpTransport, ProviderConfig, ProviderId,
    ReqwestTransport,
};

use super::codec::{
    ANTHROPIC_VERSION, CLAUDE_BASE_URL, CLAUDE_MESSAGES_PATH, decode_reply, encode_chat,
    encode_title,
};

#[derive(Debug, Clone)]
pub struct ClaudeProvider {
    config: Arc<ProviderConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl ClaudeProvider {
    pub fn new(config: Arc<ProviderConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn with_default_transport(config: Arc<ProviderConfig>) -> Result<Self, GatewayError> {
        let transport = ReqwestTransport::new(config.connect_timeout, config.read_timeout)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    fn post(&self, body: String) -> Result<String, GatewayError> {
        let api_key = require_api_key(ProviderId::Claude, &self.config)?;
        let request = HttpRequest {
            url: endpoint(self.config.base_url_or(CLAUDE_BASE_URL), CLAUDE_MESSAGES_PATH),
            headers: vec![
                ("x-api-key", api_key.to_string()),
                ("anthropic-version", ANTHROPIC_VERSION.to_string()),
            ],
            body,
        };

        send(ProviderId::Claude, self.transport.as_ref(), request)
    }
}

impl ChatProvider for ClaudeProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Claude
    }

    fn chat(&self, user_message: &str, history: &[ConversationTurn]) -> Result<String, GatewayError> {
        let response = self.post(encode_chat(&self.config, user_message, history))?;
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
            ProviderId::Claude,
            first_user_message,
            outcome,
        ))
    }

    fn is_configured(&self) -> bool {
        self.config.has_api_key()
    }
}
