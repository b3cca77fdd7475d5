//! Error types and their HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use sous_model::ModelError;
use thiserror::Error;

/// Errors a chat request can produce.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The request carried no usable message text.
    #[error("message is required")]
    EmptyMessage,

    /// The model backend failed.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// The JSON error body. Model failures still carry a friendly `content`
/// the client can show in the chat, and an empty `items` list so the
/// client never has to special-case a missing field.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    items: Vec<()>,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error, content) = match &self {
            ServerError::EmptyMessage => {
                (StatusCode::BAD_REQUEST, "Message is required".to_string(), None)
            }
            ServerError::Model(ModelError::Config(message)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                message.clone(),
                Some(
                    "I'm sorry, the chatbot service isn't configured yet. Please check the \
                     setup instructions."
                        .to_string(),
                ),
            ),
            ServerError::Model(e) => (
                StatusCode::BAD_GATEWAY,
                e.to_string(),
                Some("I'm sorry, I encountered an error. Please try again.".to_string()),
            ),
        };
        (status, Json(ErrorBody { error, content, items: Vec::new() })).into_response()
    }
}
