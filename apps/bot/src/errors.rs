#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// An occupation or prefecture key from postback data is not in its table.
    /// The dispatch layer recovers this into a retry message; it only reaches
    /// the HTTP boundary if a new call site forgets to.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// The reply-send operation was rejected (expired token, transport error).
    /// Never retried: reply tokens are single-use.
    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidSelection(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_SELECTION",
                msg.clone(),
            ),
            AppError::Delivery(msg) => {
                tracing::error!("Delivery error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DELIVERY_ERROR",
                    "Failed to deliver a reply".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
