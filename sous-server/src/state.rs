//! Shared application state.

use std::sync::Arc;

use sous_catalog::Catalog;
use sous_model::ChatModel;

/// State shared by every request handler.
///
/// The catalog is loaded once at startup and read-only thereafter, so
/// handlers can search it concurrently without coordination.
#[derive(Clone)]
pub struct AppState {
    /// The item catalog searched on every chat turn.
    pub catalog: Arc<Catalog>,
    /// The chat-completion backend.
    pub model: Arc<dyn ChatModel>,
}

impl AppState {
    /// Create state from a catalog and a model.
    pub fn new(catalog: Catalog, model: Arc<dyn ChatModel>) -> Self {
        Self { catalog: Arc::new(catalog), model }
    }
}
