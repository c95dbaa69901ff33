pub mod mock;

#[cfg(any(feature = "provider-openai", feature = "provider-claude"))]
mod http;

#[cfg(feature = "provider-openai")]
pub mod openai;

#[cfg(feature = "provider-claude")]
pub mod claude;
