use std::fs;
use std::path::Path;

use pdfium_render::prelude::*;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{DocexError, Result};
use crate::ocr::OcrProvider;

use super::staging::Staging;

// PDF user space is 72 points per inch.
const POINTS_PER_INCH: f32 = 72.0;

/// Rasterize each page and OCR it, one page at a time.
///
/// Pages are processed strictly in order starting at 1. Each page image is
/// written into the staging directory, recognized, and deleted before the
/// next page is rendered, so transient disk usage is bounded to one page
/// regardless of document length. A page failure still removes that page's
/// image and then aborts the whole document.
pub fn extract(path: &Path, staging: &Staging, ocr: &OcrProvider, config: &Config) -> Result<String> {
    let pdfium = bind_pdfium()?;
    let document = pdfium
        .load_pdf_from_file(path, None)
        .map_err(|e| DocexError::Processing(format!("PDF open failed: {e}")))?;

    let render_config = PdfRenderConfig::new().scale_page_by_factor(config.pdf.dpi / POINTS_PER_INCH);

    let mut full_text = String::new();

    for (index, page) in document.pages().iter().enumerate() {
        let page_number = index + 1;

        let bitmap = page.render_with_config(&render_config).map_err(|e| {
            DocexError::Processing(format!("PDF render failed on page {page_number}: {e}"))
        })?;

        let page_path = staging.page_path(page_number);
        bitmap
            .as_image()
            .save_with_format(&page_path, image::ImageFormat::Png)
            .map_err(|e| {
                DocexError::Processing(format!(
                    "Failed to write page image {page_number}: {e}"
                ))
            })?;

        let page_text = super::image::extract(&page_path, ocr, &config.ocr);

        if let Err(e) = fs::remove_file(&page_path) {
            warn!(page = page_number, error = %e, "failed to remove page image");
        }

        let page_text = page_text?;
        debug!(page = page_number, chars = page_text.len(), "page recognized");

        full_text.push_str(&format!("\n--- Page {page_number} ---\n{page_text}"));
    }

    Ok(full_text)
}

fn bind_pdfium() -> Result<Pdfium> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./lib"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| DocexError::Processing(format!("PDF rasterizer unavailable: {e}")))?;
    Ok(Pdfium::new(bindings))
}
