//! Spreadsheet (XLSX) decoder.

use super::ExtractedContent;
use crate::error::DecodeError;
use calamine::{open_workbook, Reader, Xlsx};
use std::fmt::Write;
use std::path::Path;

/// String form of every cell value, space-separated, in
/// sheet-then-row-then-column order.
pub(super) fn decode(path: &Path) -> Result<ExtractedContent, DecodeError> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|error| DecodeError::malformed("xlsx", path, error))?;

    let mut content = String::new();
    let sheets = workbook.sheet_names().to_vec();
    for sheet in sheets {
        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|error| DecodeError::malformed("xlsx", path, error))?;
        for row in range.rows() {
            for cell in row {
                // Write into a String cannot fail.
                let _ = write!(content, "{} ", cell);
            }
        }
    }

    Ok(ExtractedContent::text_only(content))
}
