//! Gateway construction, input guards, and orchestration of provider calls.

use std::sync::Arc;

use pcommon::{CancellationToken, ConversationTurn, is_blank};
use pprovider::{
    CancellableSleeper, ChatProvider, GatewayError, NoopOperationHooks, ProviderConfig,
    ProviderId, ProviderOperationHooks, RetryPolicy, Sleeper, build_provider, execute_with_retry,
};

use crate::GatewayReply;

const CHAT_OPERATION: &str = "chat";
const TITLE_OPERATION: &str = "generate_title";

#[derive(Clone)]
pub struct Gateway {
    provider: Arc<dyn ChatProvider>,
    policy: RetryPolicy,
    hooks: Arc<dyn ProviderOperationHooks>,
    sleeper: Arc<dyn Sleeper>,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("provider", &self.provider.id())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Gateway {
    pub fn builder(provider: Arc<dyn ChatProvider>) -> GatewayBuilder {
        GatewayBuilder::new(provider)
    }

    /// Validates `config`, selects its provider, and takes the retry policy from it.
    pub fn from_config(config: ProviderConfig) -> Result<Self, GatewayError> {
        Ok(GatewayBuilder::from_config(config)?.build())
    }

    pub fn provider_id(&self) -> ProviderId {
        self.provider.id()
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn send_message(
        &self,
        user_message: &str,
        history: &[ConversationTurn],
    ) -> Result<String, GatewayError> {
        self.send_message_with_cancel(user_message, history, &CancellationToken::new())
    }

    /// `None` is rejected like an empty message.
    pub fn send_message_opt(
        &self,
        user_message: Option<&str>,
        history: &[ConversationTurn],
    ) -> Result<String, GatewayError> {
        let user_message = user_message.ok_or_else(empty_user_message)?;
        self.send_message(user_message, history)
    }

    pub fn send_message_with_cancel(
        &self,
        user_message: &str,
        history: &[ConversationTurn],
        cancel: &CancellationToken,
    ) -> Result<String, GatewayError> {
        if is_blank(user_message) {
            return Err(empty_user_message());
        }

        tracing::debug!(
            provider = %self.provider.id(),
            history_len = history.len(),
            "sending message"
        );
        self.orchestrate(CHAT_OPERATION, cancel, || {
            self.provider.chat(user_message, history)
        })
    }

    pub fn generate_title(
        &self,
        first_user_message: &str,
        first_ai_response: &str,
    ) -> Result<String, GatewayError> {
        self.generate_title_with_cancel(
            first_user_message,
            first_ai_response,
            &CancellationToken::new(),
        )
    }

    pub fn generate_title_with_cancel(
        &self,
        first_user_message: &str,
        first_ai_response: &str,
        cancel: &CancellationToken,
    ) -> Result<String, GatewayError> {
        if is_blank(first_user_message) {
            return Err(GatewayError::invalid_input(
                "First user message cannot be empty",
            ));
        }

        self.orchestrate(TITLE_OPERATION, cancel, || {
            self.provider
                .generate_title(first_user_message, first_ai_response)
        })
    }

    /// Sends `user_message` and, when `history` is empty, also asks for a
    /// conversation title. A failed title leaves `title` unset.
    pub fn respond(
        &self,
        user_message: &str,
        history: &[ConversationTurn],
    ) -> Result<GatewayReply, GatewayError> {
        let reply = self.send_message(user_message, history)?;
        if !history.is_empty() {
            return Ok(GatewayReply::new(reply));
        }

        match self.generate_title(user_message, &reply) {
            Ok(title) => Ok(GatewayReply::new(reply).with_title(title)),
            Err(error) => {
                tracing::warn!(
                    provider = %self.provider.id(),
                    error_code = %error.code,
                    retryable = error.retryable,
                    error = %error,
                    "title generation failed, continuing without a title"
                );
                Ok(GatewayReply::new(reply))
            }
        }
    }

    /// Local check only.
    pub fn is_available(&self) -> bool {
        self.provider.is_configured()
    }

    fn orchestrate<T>(
        &self,
        operation: &str,
        cancel: &CancellationToken,
        mut call: impl FnMut() -> Result<T, GatewayError>,
    ) -> Result<T, GatewayError> {
        execute_with_retry(
            self.provider.id(),
            operation,
            &self.policy,
            self.hooks.as_ref(),
            |_| call(),
            |delay| self.sleeper.sleep(delay, cancel),
        )
    }
}

fn empty_user_message() -> GatewayError {
    GatewayError::invalid_input("User message cannot be empty")
}

pub struct GatewayBuilder {
    provider: Arc<dyn ChatProvider>,
    policy: RetryPolicy,
    hooks: Arc<dyn ProviderOperationHooks>,
    sleeper: Arc<dyn Sleeper>,
}

impl GatewayBuilder {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            provider,
            policy: RetryPolicy::default(),
            hooks: Arc::new(NoopOperationHooks),
            sleeper: Arc::new(CancellableSleeper),
        }
    }

    pub fn from_config(config: ProviderConfig) -> Result<Self, GatewayError> {
        config.validate()?;
        let policy = config.retry_policy();
        let provider = build_provider(Arc::new(config))?;

        if !provider.is_configured() {
            tracing::warn!(
                provider = %provider.id(),
                "provider has no API key; requests will fail until one is configured"
            );
        }

        Ok(Self::new(provider).with_retry_policy(policy))
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ProviderOperationHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn build(self) -> Gateway {
        Gateway {
            provider: self.provider,
            policy: self.policy,
            hooks: self.hooks,
            sleeper: self.sleeper,
        }
    }
}
