use pcommon::ConversationTurn;

use crate::{GatewayError, ProviderId};

/// Capability set shared by every provider client.
///
/// Implementations hold only static configuration, so one instance can serve
/// concurrent callers.
pub trait ChatProvider: Send + Sync {
    fn id(&self) -> ProviderId;

    fn chat(&self, user_message: &str, history: &[ConversationTurn])
        -> Result<String, GatewayError>;

    fn generate_title(
        &self,
        first_user_message: &str,
        first_ai_response: &str,
    ) -> Result<String, GatewayError>;

    /// Local check only; never touches the network.
    fn is_configured(&self) -> bool;
}
