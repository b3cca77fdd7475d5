//! The chat endpoint.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sous_catalog::CatalogItem;
use sous_model::ChatMessage;
use sous_retrieval::{DEFAULT_LIMIT, parse_query, search_items};
use tracing::info;

use crate::error::ServerError;
use crate::prompt;
use crate::state::AppState;

/// One chat turn from the client. The client holds the conversation, so
/// it sends the history along with each message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
    /// Prior turns, oldest first. Only a trailing window is forwarded to
    /// the model.
    #[serde(default)]
    pub conversation_history: Vec<ChatMessage>,
}

/// The assistant's reply plus the catalog items used to ground it, for
/// the client to render as suggestion cards.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    /// The model's reply text.
    pub content: String,
    /// Retrieved items, best match first. May be empty.
    pub items: Vec<CatalogItem>,
}

/// POST /api/chat
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ServerError> {
    if request.message.trim().is_empty() {
        return Err(ServerError::EmptyMessage);
    }

    let query = parse_query(&request.message);
    let items = search_items(&state.catalog, &query, DEFAULT_LIMIT);
    info!(
        message = %request.message,
        result_count = items.len(),
        model = state.model.name(),
        "handling chat turn"
    );

    let transcript = prompt::build_transcript(&items, &request.conversation_history, &request.message);
    let content = state.model.complete(&transcript).await?;

    Ok(Json(ChatResponse { content, items }))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
