use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{DocexError, Result};

/// Extract cell text from a workbook, sheet by sheet.
///
/// Sheets keep workbook order and each gets a labeled section. Within a
/// sheet, every row becomes one line of space-joined non-empty cell values.
/// Column alignment is not preserved; that loss is intentional.
pub fn extract(path: &Path) -> Result<String> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| DocexError::Processing(format!("XLSX parse error: {e}")))?;

    let mut text = String::new();

    for (name, range) in workbook.worksheets() {
        text.push_str(&format!("\n--- Sheet: {name} ---\n"));

        for row in range.rows() {
            let cells: Vec<String> = row.iter().filter_map(format_cell_value).collect();
            text.push_str(&cells.join(" "));
            text.push('\n');
        }
    }

    Ok(text)
}

/// Stringify a cell, dropping empty and error cells.
///
/// Numeric zero and `false` are kept; only genuinely empty values vanish.
fn format_cell_value(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            if s.is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => {
            let s = format!("{f}");
            if s.contains('.') {
                Some(s.trim_end_matches('0').trim_end_matches('.').to_string())
            } else {
                Some(s)
            }
        }
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(dt.to_string()),
        Data::DateTimeIso(dt) => Some(dt.to_string()),
        Data::DurationIso(d) => Some(d.to_string()),
        Data::Empty => None,
        _ => None,
    }
}
