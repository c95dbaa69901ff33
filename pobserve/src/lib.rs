//! Production-friendly observability hooks for the provider retry loop.
//!
//! ```rust
//! use pobserve::{
//!     LayeredHooks, MetricsObservabilityHooks, SafeProviderHooks, TracingObservabilityHooks,
//! };
//!
//! let _hooks = SafeProviderHooks::new(LayeredHooks::new(
//!     TracingObservabilityHooks,
//!     MetricsObservabilityHooks,
//! ));
//! ```

mod layered_hooks;
mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use layered_hooks::LayeredHooks;
pub use metrics_hooks::MetricsObservabilityHooks;
pub use safe_hooks::SafeProviderHooks;
pub use tracing_hooks::TracingObservabilityHooks;

pub mod prelude {
    pub use crate::{
        LayeredHooks, MetricsObservabilityHooks, SafeProviderHooks, TracingObservabilityHooks,
    };
}

#[cfg(test)]
mod tests;
