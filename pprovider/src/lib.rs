//! Provider clients, wire codecs, error classification, and retry orchestration
//! for the parley gateway.

pub mod adapters;
pub mod classify;
pub mod prelude;
pub mod wire;

mod config;
mod credentials;
mod error;
mod factory;
mod model;
mod prompt;
mod provider;
mod resilience;
mod transport;

pub use config::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_MAX_RETRIES, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_PROVIDER, DEFAULT_READ_TIMEOUT, DEFAULT_RETRY_DELAY, DEFAULT_RETRY_MULTIPLIER,
    DEFAULT_TEMPERATURE, ProviderConfig,
};
pub use credentials::SecretString;
pub use error::{ErrorCause, ErrorCode, GatewayError};
pub use factory::{build_provider, build_provider_with_transport};
pub use model::ProviderId;
pub use prompt::{SYSTEM_PREAMBLE, TITLE_MAX_TOKENS, TITLE_TEMPERATURE, fallback_title, title_prompt};
pub use provider::ChatProvider;
pub use resilience::{
    CancellableSleeper, NoopOperationHooks, ProviderOperationHooks, RetryPolicy, Sleeper,
    execute_with_retry,
};
#[cfg(any(feature = "provider-openai", feature = "provider-claude"))]
pub use transport::ReqwestTransport;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};

pub use adapters::mock::{self, MockProvider};

#[cfg(feature = "provider-openai")]
pub use adapters::openai::{self, OpenAiProvider};

#[cfg(feature = "provider-claude")]
pub use adapters::claude::{self, ClaudeProvider};

pub use pcommon::{CancellationToken, Cancelled, ConversationTurn, TurnRole};
