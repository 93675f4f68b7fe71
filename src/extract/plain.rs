//! Plain text decoder.

use super::ExtractedContent;
use crate::error::DecodeError;
use std::path::Path;

pub(super) fn decode(path: &Path) -> Result<ExtractedContent, DecodeError> {
    let text = std::fs::read_to_string(path).map_err(|source| DecodeError::io(path, source))?;
    Ok(ExtractedContent::text_only(text))
}
