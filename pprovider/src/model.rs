//! Provider identifiers and configuration-value selection.
//!
//! ```rust
//! use pprovider::ProviderId;
//!
//! assert_eq!(ProviderId::from_config_value(Some("OpenAI")), ProviderId::OpenAi);
//! assert_eq!(ProviderId::from_config_value(Some("gemini")), ProviderId::Mock);
//! assert_eq!(ProviderId::from_config_value(None), ProviderId::Mock);
//! ```

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenAi,
    Claude,
    Mock,
}

impl ProviderId {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "openai" => Some(Self::OpenAi),
            "claude" | "anthropic" => Some(Self::Claude),
            "mock" => Some(Self::Mock),
            _ => None,
        }
    }

    /// Absent and unrecognized identifiers select the mock provider.
    pub fn from_config_value(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or(Self::Mock)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Claude => "Claude",
            Self::Mock => "Mock",
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            Self::OpenAi => "openai",
            Self::Claude => "claude",
            Self::Mock => "mock",
        };

        f.write_str(id)
    }
}
