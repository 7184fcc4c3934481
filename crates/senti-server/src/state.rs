use std::sync::Arc;

use senti_core::SentimentModel;

/// Shared, read-only state handed to every handler.
pub struct ServerState {
    pub model: Arc<dyn SentimentModel>,
}

impl ServerState {
    pub fn new(model: Arc<dyn SentimentModel>) -> Self {
        Self { model }
    }
}
