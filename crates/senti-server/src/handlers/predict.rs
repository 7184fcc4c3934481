use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::{error, info, warn};

use crate::dto::{PredictRequest, PredictResponse};
use crate::error::AppError;
use crate::extract::AppJson;
use crate::state::ServerState;

/// POST /predict - Classify the sentiment of a text.
pub async fn predict(
    State(state): State<Arc<ServerState>>,
    AppJson(req): AppJson<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    if req.is_blank() {
        warn!("Rejected prediction request with empty text");
        return Err(AppError::BadRequest("文本不能为空".into()));
    }

    let prediction = state.model.predict(&req.text).map_err(|e| {
        error!("Prediction failed: {}", e);
        AppError::from(e)
    })?;

    info!(
        label = %prediction.label,
        confidence = prediction.confidence,
        chars = req.text.chars().count(),
        "prediction complete"
    );

    Ok(Json(PredictResponse::new(prediction, state.model.version())))
}
