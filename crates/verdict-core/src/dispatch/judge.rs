//! The judge seam: genai-backed in production, mockable for tests.

use async_openai::types::chat::CreateChatCompletionResponse;
use async_trait::async_trait;
use genai::Client;
use genai::chat::{ChatMessage, ChatRequest};
use tracing::error;

use super::adapter::adapt_chat_response;
#[cfg(any(test, feature = "mock"))]
use super::adapter::completion_from_text;
use super::error::DispatchError;

/// A chat-completion judge. Implementations return responses already adapted
/// to the OpenAI wire shape.
#[async_trait]
pub trait ChatJudge: Send + Sync {
    /// Runs one system+user exchange and returns the completion.
    async fn complete(
        &self,
        system: &str,
        user: &str,
    ) -> Result<CreateChatCompletionResponse, DispatchError>;
}

/// Judge backed by a genai [`Client`].
///
/// The model name selects the provider; credentials come from the provider's
/// standard environment variable (e.g. `OPENAI_API_KEY`).
pub struct GenaiJudge {
    client: Client,
    model: String,
}

impl GenaiJudge {
    /// Creates a judge for `model` with a default genai client.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: Client::default(),
            model: model.into(),
        }
    }

    /// The configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl std::fmt::Debug for GenaiJudge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiJudge")
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl ChatJudge for GenaiJudge {
    async fn complete(
        &self,
        system: &str,
        user: &str,
    ) -> Result<CreateChatCompletionResponse, DispatchError> {
        let request = ChatRequest::new(vec![
            ChatMessage::system(system.to_string()),
            ChatMessage::user(user.to_string()),
        ]);

        let response = self
            .client
            .exec_chat(&self.model, request, None)
            .await
            .map_err(|e| {
                error!("Provider error: {}", e);
                DispatchError::Provider(e.to_string())
            })?;

        Ok(adapt_chat_response(response, &self.model))
    }
}

/// Canned judge for tests: replies with a fixed body, optionally failing for
/// prompts that contain a marker substring.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Clone)]
pub struct MockJudge {
    reply: String,
    fail_marker: Option<String>,
}

#[cfg(any(test, feature = "mock"))]
impl MockJudge {
    /// Judge that always replies with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            fail_marker: None,
        }
    }

    /// Fails any prompt containing `marker` instead of replying.
    pub fn failing_on(mut self, marker: impl Into<String>) -> Self {
        self.fail_marker = Some(marker.into());
        self
    }
}

#[cfg(any(test, feature = "mock"))]
#[async_trait]
impl ChatJudge for MockJudge {
    async fn complete(
        &self,
        _system: &str,
        user: &str,
    ) -> Result<CreateChatCompletionResponse, DispatchError> {
        if let Some(marker) = &self.fail_marker
            && user.contains(marker)
        {
            return Err(DispatchError::Provider("mock provider failure".to_string()));
        }

        Ok(completion_from_text("mock-judge", &self.reply))
    }
}
