//! Portable document (PDF) decoder.

use super::ExtractedContent;
use crate::error::DecodeError;
use std::path::Path;

/// Concatenated per-page text in page order; no layout reconstruction.
pub(super) fn decode(path: &Path) -> Result<ExtractedContent, DecodeError> {
    let text = pdf_extract::extract_text(path)
        .map_err(|error| DecodeError::malformed("pdf", path, error))?;
    Ok(ExtractedContent::text_only(text))
}
