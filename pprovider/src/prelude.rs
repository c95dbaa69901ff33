//! Common `pprovider` imports for downstream crates.

pub use crate::{
    CancellableSleeper, ChatProvider, ErrorCode, GatewayError, HttpTransport, MockProvider,
    NoopOperationHooks, ProviderConfig, ProviderId, ProviderOperationHooks, RetryPolicy,
    SecretString, Sleeper, build_provider, execute_with_retry,
};
pub use pcommon::{CancellationToken, Cancelled, ConversationTurn, TurnRole};
