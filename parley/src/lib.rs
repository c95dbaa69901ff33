//! Unified facade over the parley workspace crates.
//!
//! Most applications depend on this crate alone: it re-exports the gateway,
//! provider and observability crates and adds configuration loading, logging
//! bootstrap, and gateway wiring helpers.
//!
//! ```rust
//! use parley::prelude::*;
//!
//! let gateway = build_gateway(ProviderConfig::new("mock")).unwrap();
//! let reply = gateway.respond("hello there", &[]).unwrap();
//!
//! assert!(reply.reply.contains("Hello"));
//! assert_eq!(reply.title.as_deref(), Some("hello there"));
//! ```

mod config;
mod logging;
mod macros;

pub mod prelude;
pub mod runtime;
pub mod util;

pub use pchat;
pub use pcommon;
pub use pobserve;
pub use pprovider;

pub use config::{AiSettings, GatewaySettings};
pub use logging::init_logging;
pub use pchat::{Gateway, GatewayBuilder, GatewayReply};
pub use pcommon::{CancellationToken, Cancelled, ConversationTurn, TurnRole};
pub use pobserve::{
    LayeredHooks, MetricsObservabilityHooks, SafeProviderHooks, TracingObservabilityHooks,
};
pub use pprovider::{
    CancellableSleeper, ChatProvider, ErrorCode, GatewayError, HttpTransport, MockProvider,
    NoopOperationHooks, ProviderConfig, ProviderId, ProviderOperationHooks, RetryPolicy,
    SecretString, Sleeper, build_provider,
};

pub use runtime::{build_gateway, build_gateway_from_settings, default_hooks, load_gateway};
pub use util::{assistant_turn, history_from_exchanges, parse_provider_id, user_turn};
