//! The provider gateway: the single entry point the application calls.
//!
//! ```rust
//! use pchat::Gateway;
//! use pprovider::ProviderConfig;
//!
//! let gateway = Gateway::from_config(ProviderConfig::new("mock")).unwrap();
//! assert!(gateway.is_available());
//!
//! let reply = gateway.send_message("hello", &[]).unwrap();
//! assert!(reply.contains("Hello"));
//! ```

mod gateway;
mod types;

pub mod prelude {
    pub use crate::{Gateway, GatewayBuilder, GatewayReply};
    pub use pcommon::{CancellationToken, ConversationTurn, TurnRole};
    pub use pprovider::{ErrorCode, GatewayError, ProviderConfig, ProviderId};
}

pub use gateway::{Gateway, GatewayBuilder};
pub use types::GatewayReply;
pub use pcommon::{CancellationToken, ConversationTurn, TurnRole};
