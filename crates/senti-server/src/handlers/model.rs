use std::sync::Arc;

use axum::{extract::State, Json};
use senti_core::ModelInfo;

use crate::state::ServerState;

/// GET /model-info - Describe the loaded model.
pub async fn info(State(state): State<Arc<ServerState>>) -> Json<ModelInfo> {
    Json(state.model.info())
}
