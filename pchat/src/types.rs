/// Outcome of [`crate::Gateway::respond`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayReply {
    pub reply: String,
    /// Present only for the first exchange of a conversation, and only when
    /// title generation succeeded.
    pub title: Option<String>,
}

impl GatewayReply {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
