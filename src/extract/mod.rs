//! Document decoders.
//!
//! Each recognized format has exactly one decoder, dispatched through the
//! closed [`DocumentFormat`] enum rather than extension checks scattered
//! through the pipeline. Decoding is blocking (file I/O plus CPU-bound
//! parsing) and produces a fresh [`ExtractedContent`] per request; nothing
//! is cached.

mod pdf;
mod plain;
mod rich;
mod sheet;
mod table;

use crate::error::DecodeError;
use std::path::Path;

/// The five recognized document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.txt`, read whole file as UTF-8 text.
    PlainText,
    /// `.csv`, encoding-sniffed, rows joined with `" | "`.
    DelimitedTable,
    /// `.pdf`, concatenated per-page text.
    PortableDocument,
    /// `.docx`, paragraph text plus embedded images as data URIs.
    RichDocument,
    /// `.xlsx`, every cell's string form across every sheet.
    Spreadsheet,
}

impl DocumentFormat {
    /// Map a path's extension to a format. Unrecognized extensions return
    /// `None`: such files are still scored by the selector but are never
    /// decoded.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "txt" => Some(Self::PlainText),
            "csv" => Some(Self::DelimitedTable),
            "pdf" => Some(Self::PortableDocument),
            "docx" => Some(Self::RichDocument),
            "xlsx" => Some(Self::Spreadsheet),
            _ => None,
        }
    }

    /// Decode the file at `path` into text (and images, for rich documents).
    pub fn decode(self, path: &Path) -> Result<ExtractedContent, DecodeError> {
        match self {
            Self::PlainText => plain::decode(path),
            Self::DelimitedTable => table::decode(path),
            Self::PortableDocument => pdf::decode(path),
            Self::RichDocument => rich::decode(path),
            Self::Spreadsheet => sheet::decode(path),
        }
    }
}

/// Text extracted from one document, with any embedded images as
/// `data:` URI strings. Images are only ever non-empty for rich documents.
#[derive(Debug, Clone, Default)]
pub struct ExtractedContent {
    pub text: String,
    pub images: Vec<String>,
}

impl ExtractedContent {
    pub(crate) fn text_only(text: String) -> Self {
        Self {
            text,
            images: Vec::new(),
        }
    }
}
