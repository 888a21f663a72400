use std::sync::{Arc, Mutex};

use leptess::LepTess;
use tracing::{info, warn};

use crate::config::OcrConfig;
use crate::error::{DocexError, Result};

#[derive(Clone)]
enum OcrBackend {
    Local { tesseract: Arc<Mutex<LepTess>> },
    Unavailable { reason: String },
}

/// Process-wide OCR engine handle.
///
/// Cloning is cheap: local backends share the same underlying engine, so a
/// clone handed to each request still serializes recognition through one
/// mutex. Engine initialization is expensive (model loading), which is why
/// the provider is built once in `main` and injected into the router.
#[derive(Clone)]
pub struct OcrProvider {
    backend: OcrBackend,
}

fn create_tesseract(languages: &str) -> std::result::Result<LepTess, String> {
    LepTess::new(None, languages).map_err(|e| e.to_string())
}

impl OcrProvider {
    pub fn new(config: &OcrConfig) -> Self {
        let backend = match create_tesseract(&config.languages) {
            Ok(lt) => {
                info!(languages = %config.languages, "Tesseract OCR initialized");
                OcrBackend::Local {
                    tesseract: Arc::new(Mutex::new(lt)),
                }
            }
            Err(e) => {
                let reason = format!("Tesseract not available: {e}");
                warn!("{}", reason);
                OcrBackend::Unavailable { reason }
            }
        };

        Self { backend }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, OcrBackend::Unavailable { .. })
    }

    /// Run a recognition pass over encoded image bytes.
    ///
    /// Returns the recognized line texts in engine order, newline-joined.
    /// Zero detections produce an empty string, not an error. The engine's
    /// per-region geometry and confidence payloads are discarded.
    ///
    /// Blocking; callers on an async runtime must already be on the
    /// blocking pool.
    pub fn recognize(&self, image: &[u8]) -> Result<String> {
        match &self.backend {
            OcrBackend::Local { tesseract } => {
                let mut lt = tesseract
                    .lock()
                    .map_err(|_| DocexError::Ocr("OCR engine lock poisoned".to_string()))?;
                lt.set_image_from_mem(image)
                    .map_err(|e| DocexError::Ocr(format!("Failed to set image: {e}")))?;
                let text = lt
                    .get_utf8_text()
                    .map_err(|e| DocexError::Ocr(format!("Failed to extract text: {e}")))?;
                Ok(text.trim().to_string())
            }
            OcrBackend::Unavailable { reason } => Err(DocexError::OcrUnavailable(reason.clone())),
        }
    }
}
