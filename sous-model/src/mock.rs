//! Mock chat model for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ModelError, Result};
use crate::message::ChatMessage;
use crate::ChatModel;

/// A [`ChatModel`] that returns a canned reply and records every
/// transcript it receives.
///
/// # Example
///
/// ```rust
/// use sous_model::{ChatMessage, ChatModel, MockChatModel, Role};
///
/// # async fn run() {
/// let model = MockChatModel::new("Try the pancakes!");
/// let reply = model.complete(&[ChatMessage::new(Role::User, "breakfast?")]).await.unwrap();
/// assert_eq!(reply, "Try the pancakes!");
/// assert_eq!(model.requests().len(), 1);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MockChatModel {
    reply: String,
    fail: bool,
    requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockChatModel {
    /// Create a mock that always answers with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self { reply: reply.into(), fail: false, requests: Mutex::new(Vec::new()) }
    }

    /// Create a mock whose `complete` always fails, for error-path tests.
    pub fn failing() -> Self {
        Self { reply: String::new(), fail: true, requests: Mutex::new(Vec::new()) }
    }

    /// Every transcript passed to [`complete`](ChatModel::complete) so far.
    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().expect("mock requests lock poisoned").clone()
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        self.requests.lock().expect("mock requests lock poisoned").push(messages.to_vec());
        if self.fail {
            return Err(ModelError::Api {
                provider: "Mock".into(),
                message: "simulated failure".into(),
            });
        }
        Ok(self.reply.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Role;

    #[tokio::test]
    async fn records_transcripts_and_replies() {
        let model = MockChatModel::new("canned");
        let reply =
            model.complete(&[ChatMessage::new(Role::User, "question")]).await.unwrap();
        assert_eq!(reply, "canned");
        let requests = model.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0][0].content, "question");
    }

    #[tokio::test]
    async fn failing_mock_returns_api_error() {
        let model = MockChatModel::failing();
        let result = model.complete(&[]).await;
        assert!(matches!(result, Err(ModelError::Api { .. })));
    }
}
