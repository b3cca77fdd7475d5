//! # sous-server
//!
//! HTTP chat service for the Sous kitchen assistant.
//!
//! One endpoint does the work: `POST /api/chat` takes a user message (and
//! the client-held conversation history), retrieves matching catalog items,
//! grounds the model's reply with them, and returns both the reply and the
//! items for the client to render as suggestion cards. Conversation state
//! lives entirely on the client; the service is stateless.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use sous_catalog::Catalog;
//! use sous_model::MockChatModel;
//! use sous_server::{AppState, app};
//!
//! let state = AppState::new(Catalog::builtin(), Arc::new(MockChatModel::new("hi")));
//! let router = app(state);
//! ```

pub mod chat;
pub mod error;
pub mod prompt;
pub mod state;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::ServerError;
pub use state::AppState;

/// Build the service router: the chat endpoint, a liveness probe, and
/// trace/CORS layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/health", get(chat::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
