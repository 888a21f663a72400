use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocexError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("OCR unavailable: {0}")]
    OcrUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for DocexError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            DocexError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            DocexError::Processing(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            DocexError::Ocr(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            DocexError::OcrUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            DocexError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            DocexError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "detail": message
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, DocexError>;
