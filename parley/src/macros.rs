/// Creates a single [`ConversationTurn`](crate::ConversationTurn) from a role shorthand.
///
/// ```rust
/// use parley::{TurnRole, parley_turn};
///
/// let turn = parley_turn!(assistant => "Done.");
/// assert_eq!(turn.role, TurnRole::Assistant);
/// assert_eq!(turn.content, "Done.");
/// ```
#[macro_export]
macro_rules! parley_turn {
    (user => $content:expr $(,)?) => {
        $crate::ConversationTurn::user($content)
    };
    (assistant => $content:expr $(,)?) => {
        $crate::ConversationTurn::assistant($content)
    };
    ($role:ident => $content:expr $(,)?) => {
        compile_error!("unsupported role: use user or assistant");
    };
}

/// Creates a conversation history from role/content pairs.
///
/// ```rust
/// use parley::{TurnRole, parley_history};
///
/// let history = parley_history![
///     user => "What is a lifetime?",
///     assistant => "A scope for which a reference is valid.",
/// ];
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history[0].role, TurnRole::User);
/// assert_eq!(history[1].role, TurnRole::Assistant);
/// ```
#[macro_export]
macro_rules! parley_history {
    () => {
        Vec::<$crate::ConversationTurn>::new()
    };
    ($($role:ident => $content:expr),+ $(,)?) => {
        vec![$($crate::parley_turn!($role => $content)),+]
    };
}
