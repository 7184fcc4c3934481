//! HTTP route handlers for the sentiment server.

pub mod model;
pub mod predict;

use axum::Json;

use crate::dto::{Endpoints, HealthResponse, RootResponse, SERVICE_VERSION, WELCOME_MESSAGE};
use crate::error::AppError;

/// GET / - Service description and endpoint map.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: WELCOME_MESSAGE,
        version: SERVICE_VERSION,
        endpoints: Endpoints {
            health: "/health",
            predict: "/predict",
            model_info: "/model-info",
        },
    })
}

/// GET /health - Liveness check.
pub async fn health() -> Json<HealthResponse> {
    // the router cannot be built without a model
    Json(HealthResponse { status: "healthy", model_loaded: true })
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".into())
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
