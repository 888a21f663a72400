//! Extraction Router
//!
//! Routes an uploaded file by extension to one of four extraction
//! strategies and normalizes their output into a single text blob:
//!
//! ```text
//! upload ──▶ stage ──▶ classify ──▶ strategy ──▶ trim
//!            (spool)   (suffix)    (pdf/docx/    (result)
//!                                   xlsx/image)
//! ```
//!
//! Every strategy operates on a file path inside a per-request staging
//! directory. The directory is removed on every exit path, so no transient
//! upload or page artifact survives the request.

mod docx;
mod image;
mod pdf;
mod staging;
mod xlsx;

use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::error::{DocexError, Result};
use crate::ocr::OcrProvider;

pub use staging::Staging;

/// Strategy selected for an upload, by filename suffix.
///
/// The match is case-insensitive and evaluated in fixed priority order.
/// Image is the default for anything unrecognized, not a validated
/// allow-list; a misnamed file is still attempted as an image and fails
/// inside the decoder or the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Pdf,
    Word,
    Spreadsheet,
    Image,
}

impl SourceKind {
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            SourceKind::Pdf
        } else if lower.ends_with(".docx") {
            SourceKind::Word
        } else if lower.ends_with(".xlsx") {
            SourceKind::Spreadsheet
        } else {
            SourceKind::Image
        }
    }
}

#[derive(Clone)]
pub struct Extractor {
    ocr: OcrProvider,
    config: Arc<Config>,
}

impl Extractor {
    pub fn new(ocr: OcrProvider, config: Arc<Config>) -> Self {
        Self { ocr, config }
    }

    /// Extract plain text from an uploaded file.
    ///
    /// Runs the whole pipeline on the blocking pool: pdfium and Tesseract
    /// are not async-safe, and each request is a single sequential pass
    /// over its pages/sheets anyway.
    pub async fn extract(&self, filename: &str, content: Vec<u8>) -> Result<String> {
        let this = self.clone();
        let filename = filename.to_string();

        tokio::task::spawn_blocking(move || this.extract_blocking(&filename, &content))
            .await
            .map_err(|e| DocexError::Internal(format!("extraction task failed: {e}")))?
    }

    /// Synchronous extraction pass. The staging directory owns every
    /// transient artifact and is removed when it drops, error or not.
    pub fn extract_blocking(&self, filename: &str, content: &[u8]) -> Result<String> {
        let kind = SourceKind::from_filename(filename);
        let staging = Staging::create(&self.config.spool.dir)?;
        let source_path = staging.store_upload(filename, content)?;

        debug!(
            filename = %filename,
            kind = ?kind,
            bytes = content.len(),
            "dispatching extraction"
        );

        let text = match kind {
            SourceKind::Pdf => pdf::extract(&source_path, &staging, &self.ocr, &self.config)?,
            SourceKind::Word => docx::extract(&source_path)?,
            SourceKind::Spreadsheet => xlsx::extract(&source_path)?,
            SourceKind::Image => image::extract(&source_path, &self.ocr, &self.config.ocr)?,
        };

        Ok(text.trim().to_string())
    }
}
