//! HTTP handlers.
//!
//! Two routes: a liveness probe and the multipart extraction endpoint.
//! Success is `{"text": …}`; every failure renders as `{"detail": …}` via
//! [`DocexError`]'s `IntoResponse` impl — error text is never embedded in a
//! success payload.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::api::AppState;
use crate::error::{DocexError, Result};

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
}

/// `GET /`
pub async fn service_status() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "OCR Service is running",
    })
}

#[derive(Debug, Serialize)]
pub struct ExtractionResponse {
    pub text: String,
}

/// `POST /ocr`
///
/// Accepts a multipart form with a single `file` field and returns the
/// extracted text. The upload's filename decides the extraction strategy.
pub async fn perform_ocr(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractionResponse>> {
    let mut file_bytes: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| DocexError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| DocexError::Validation(format!("Failed to read file: {e}")))?;
        file_bytes = Some(bytes.to_vec());
    }

    let content = file_bytes
        .ok_or_else(|| DocexError::Validation("Missing required 'file' field".to_string()))?;
    let filename = file_name
        .ok_or_else(|| DocexError::Validation("Uploaded file must carry a filename".to_string()))?;

    let text = state.extractor.extract(&filename, content).await?;

    Ok(Json(ExtractionResponse { text }))
}
