//! # sous-model
//!
//! Chat-completion model clients for the Sous kitchen assistant.
//!
//! The chat service talks to a hosted LLM through the [`ChatModel`] trait.
//! Two implementations ship here:
//!
//! - [`OpenAIChatModel`] — OpenAI and OpenAI-compatible chat-completions
//!   APIs (Ollama, vLLM, etc.) via `reqwest`
//! - [`MockChatModel`] — canned replies for tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sous_model::{ChatMessage, ChatModel, OpenAIChatModel, Role};
//!
//! # async fn run() -> Result<(), sous_model::ModelError> {
//! let model = OpenAIChatModel::from_env()?;
//! let reply = model
//!     .complete(&[
//!         ChatMessage::new(Role::System, "You are a helpful kitchen coach."),
//!         ChatMessage::new(Role::User, "What's for dinner?"),
//!     ])
//!     .await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod message;
pub mod mock;
pub mod openai;

use async_trait::async_trait;

pub use error::{ModelError, Result};
pub use message::{ChatMessage, Role};
pub use mock::MockChatModel;
pub use openai::OpenAIChatModel;

/// A chat-completion backend.
///
/// Implementations wrap a specific provider behind a unified async
/// interface: a full message transcript in, one assistant reply out.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// The model identifier, for logging.
    fn name(&self) -> &str;

    /// Generate one assistant reply for the given transcript.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}
