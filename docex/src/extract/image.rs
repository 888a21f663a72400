use std::fs;
use std::path::Path;

use crate::config::OcrConfig;
use crate::error::Result;
use crate::ocr::{preprocess_image, OcrProvider};

/// OCR primitive: recognize text in a raster image on disk.
///
/// Also invoked per rasterized PDF page. The engine's output line order is
/// whatever the engine returns (typically top-to-bottom); zero detections
/// yield an empty string rather than an error.
pub fn extract(path: &Path, ocr: &OcrProvider, config: &OcrConfig) -> Result<String> {
    let bytes = fs::read(path)?;
    let processed = preprocess_image(&bytes, config)?;
    ocr.recognize(&processed)
}
