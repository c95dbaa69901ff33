//! Small convenience constructors for common types.

use crate::{ConversationTurn, ProviderId};

pub fn user_turn(content: impl Into<String>) -> ConversationTurn {
    ConversationTurn::user(content)
}

pub fn assistant_turn(content: impl Into<String>) -> ConversationTurn {
    ConversationTurn::assistant(content)
}

/// Strict parse; `None` for anything that is not a known provider.
pub fn parse_provider_id(value: &str) -> Option<ProviderId> {
    ProviderId::parse(value)
}

/// Builds alternating user/assistant turns from completed exchanges.
pub fn history_from_exchanges<U, A>(exchanges: impl IntoIterator<Item = (U, A)>) -> Vec<ConversationTurn>
where
    U: Into<String>,
    A: Into<String>,
{
    exchanges
        .into_iter()
        .flat_map(|(user, assistant)| [user_turn(user), assistant_turn(assistant)])
        .collect()
}
