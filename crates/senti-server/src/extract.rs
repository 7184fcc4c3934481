//! Request extractors that report failures in the service's error shape.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejections become `{"detail": ...}` responses.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
