use std::fs;
use std::path::Path;

use crate::error::{DocexError, Result};

/// Extract paragraph text from a `.docx` file, in document order.
///
/// Paragraphs are newline-joined; an empty paragraph yields an empty line.
/// Tables, headers/footers, and embedded objects are not traversed.
pub fn extract(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let docx = docx_rs::read_docx(&bytes)
        .map_err(|e| DocexError::Processing(format!("DOCX parse error: {e}")))?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            paragraphs.push(paragraph_text(paragraph));
        }
    }

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut content = String::new();
    for para_child in &paragraph.children {
        if let docx_rs::ParagraphChild::Run(run) = para_child {
            for run_child in &run.children {
                if let docx_rs::RunChild::Text(text) = run_child {
                    content.push_str(&text.text);
                }
            }
        }
    }
    content
}
