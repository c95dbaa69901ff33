//! Common imports for most parley applications.

pub use crate::{
    assistant_turn, build_gateway, build_gateway_from_settings, default_hooks,
    history_from_exchanges, init_logging, load_gateway, parse_provider_id, user_turn,
};
pub use crate::{parley_history, parley_turn};
pub use crate::{
    CancellationToken, ChatProvider, ConversationTurn, ErrorCode, Gateway, GatewayBuilder,
    GatewayError, GatewayReply, GatewaySettings, ProviderConfig, ProviderId, RetryPolicy,
    TurnRole,
};
