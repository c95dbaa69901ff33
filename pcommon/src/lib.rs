//! Shared conversation values, text helpers, and cancellation primitives.
//!
//! ```rust
//! use pcommon::{CancellationToken, ConversationTurn, TurnRole, leading_words};
//!
//! let turn = ConversationTurn::user("What is borrow checking?");
//! assert_eq!(turn.role, TurnRole::User);
//!
//! let token = CancellationToken::new();
//! assert!(!token.is_cancelled());
//!
//! assert_eq!(leading_words("one two three four five six", 5), "one two three four five...");
//! ```

pub mod turn {
    //! Conversation history entries handed to providers.
    //!
    //! ```rust
    //! use pcommon::{ConversationTurn, TurnRole};
    //!
    //! let history = vec![
    //!     ConversationTurn::user("Hello"),
    //!     ConversationTurn::assistant("Hi there!"),
    //! ];
    //!
    //! assert_eq!(history[1].role.as_str(), "assistant");
    //! ```

    use std::fmt::{Display, Formatter};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum TurnRole {
        User,
        Assistant,
    }

    impl TurnRole {
        /// Wire name used by both provider message formats.
        pub fn as_str(self) -> &'static str {
            match self {
                Self::User => "user",
                Self::Assistant => "assistant",
            }
        }
    }

    impl Display for TurnRole {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.as_str())
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ConversationTurn {
        pub role: TurnRole,
        pub content: String,
    }

    impl ConversationTurn {
        pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
            Self {
                role,
                content: content.into(),
            }
        }

        pub fn user(content: impl Into<String>) -> Self {
            Self::new(TurnRole::User, content)
        }

        pub fn assistant(content: impl Into<String>) -> Self {
            Self::new(TurnRole::Assistant, content)
        }
    }
}

pub mod text {
    //! Character-safe truncation and word-based title helpers.
    //!
    //! ```rust
    //! use pcommon::{leading_words, truncate_chars};
    //!
    //! assert_eq!(truncate_chars("abcdef", 3), "abc...");
    //! assert_eq!(truncate_chars("abc", 3), "abc");
    //! assert_eq!(leading_words("  short title  ", 5), "short title");
    //! ```

    pub const ELLIPSIS: &str = "...";

    /// Keeps the first `max_chars` characters, appending `...` when anything was cut.
    pub fn truncate_chars(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((byte_index, _)) => format!("{}{ELLIPSIS}", &text[..byte_index]),
            None => text.to_string(),
        }
    }

    /// Joins the first `max_words` whitespace-separated words with single spaces,
    /// appending `...` when more words existed.
    pub fn leading_words(text: &str, max_words: usize) -> String {
        let mut words = text.split_whitespace();
        let kept = words.by_ref().take(max_words).collect::<Vec<_>>().join(" ");

        if words.next().is_some() {
            format!("{kept}{ELLIPSIS}")
        } else {
            kept
        }
    }

    pub fn is_blank(text: &str) -> bool {
        text.trim().is_empty()
    }
}

pub mod cancel {
    //! Cooperative cancellation for blocking waits.
    //!
    //! ```rust
    //! use std::time::Duration;
    //!
    //! use pcommon::CancellationToken;
    //!
    //! let token = CancellationToken::new();
    //! let caller = token.clone();
    //! caller.cancel();
    //!
    //! assert!(token.wait_timeout(Duration::from_secs(30)).is_err());
    //! ```

    use std::error::Error;
    use std::fmt::{Display, Formatter};
    use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
    use std::time::{Duration, Instant};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Cancelled;

    impl Display for Cancelled {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str("operation cancelled while waiting")
        }
    }

    impl Error for Cancelled {}

    #[derive(Debug, Default)]
    struct CancelState {
        cancelled: Mutex<bool>,
        signal: Condvar,
    }

    /// Clonable handle; every clone observes the same cancellation flag.
    #[derive(Debug, Clone, Default)]
    pub struct CancellationToken {
        state: Arc<CancelState>,
    }

    impl CancellationToken {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn cancel(&self) {
            *self.flag() = true;
            self.state.signal.notify_all();
        }

        pub fn is_cancelled(&self) -> bool {
            *self.flag()
        }

        /// Blocks for up to `timeout`, returning early with `Err(Cancelled)` once
        /// the token is cancelled.
        pub fn wait_timeout(&self, timeout: Duration) -> Result<(), Cancelled> {
            let deadline = Instant::now().checked_add(timeout);
            let mut cancelled = self.flag();

            loop {
                if *cancelled {
                    return Err(Cancelled);
                }

                let remaining = match deadline {
                    Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                    None => timeout,
                };
                if remaining.is_zero() {
                    return Ok(());
                }

                cancelled = self
                    .state
                    .signal
                    .wait_timeout(cancelled, remaining)
                    .unwrap_or_else(PoisonError::into_inner)
                    .0;
            }
        }

        fn flag(&self) -> MutexGuard<'_, bool> {
            self.state
                .cancelled
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
        }
    }
}

pub use cancel::{CancellationToken, Cancelled};
pub use text::{ELLIPSIS, is_blank, leading_words, truncate_chars};
pub use turn::{ConversationTurn, TurnRole};
