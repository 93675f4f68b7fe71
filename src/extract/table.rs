//! Delimited table (CSV) decoder.
//!
//! Encoding is sniffed from a leading sample of the raw bytes; when the
//! sniffed encoding produces replacement characters the whole file is
//! re-decoded with the fixed legacy single-byte fallback instead.

use super::ExtractedContent;
use crate::error::DecodeError;
use chardetng::EncodingDetector;
use std::path::Path;

/// How many leading bytes feed the encoding detector.
const SNIFF_LEN: usize = 10_000;

pub(super) fn decode(path: &Path) -> Result<ExtractedContent, DecodeError> {
    let bytes = std::fs::read(path).map_err(|source| DecodeError::io(path, source))?;
    let text = decode_bytes(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut content = String::new();
    for record in reader.records() {
        let record = record.map_err(|error| DecodeError::malformed("csv", path, error))?;
        let fields: Vec<&str> = record.iter().collect();
        content.push_str(&fields.join(" | "));
        content.push('\n');
    }

    Ok(ExtractedContent::text_only(content))
}

fn decode_bytes(bytes: &[u8]) -> String {
    let mut detector = EncodingDetector::new();
    let sample_len = bytes.len().min(SNIFF_LEN);
    detector.feed(&bytes[..sample_len], sample_len == bytes.len());
    let encoding = detector.guess(None, true);

    let (text, _, had_errors) = encoding.decode(bytes);
    if !had_errors {
        return text.into_owned();
    }

    // Legacy fallback, total by construction: every byte maps to a character.
    let (fallback, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    fallback.into_owned()
}
