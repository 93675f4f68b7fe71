//! Rich document (DOCX) decoder.
//!
//! A DOCX file is a ZIP container: paragraph text lives in
//! `word/document.xml` as `<w:t>` runs, embedded images under `word/media/`.
//! Temporary lock files (the `~$` prefix a word processor leaves while a
//! document is open) yield empty content and no images rather than an error.

use super::ExtractedContent;
use crate::error::DecodeError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// Prefix of word-processor lock files.
const LOCK_FILE_MARKER: &str = "~$";

/// MIME type used when the image bytes cannot be sniffed.
const FALLBACK_IMAGE_MIME: &str = "image/jpeg";

pub(super) fn decode(path: &Path) -> Result<ExtractedContent, DecodeError> {
    let is_lock_file = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(LOCK_FILE_MARKER));
    if is_lock_file {
        return Ok(ExtractedContent::default());
    }

    let file = File::open(path).map_err(|source| DecodeError::io(path, source))?;
    let mut archive =
        ZipArchive::new(file).map_err(|error| DecodeError::malformed("docx", path, error))?;

    let text = paragraph_text(&mut archive, path)?;
    let images = media_images(&mut archive, path)?;
    Ok(ExtractedContent { text, images })
}

/// Concatenate all `<w:t>` runs, one newline per closed paragraph.
fn paragraph_text(archive: &mut ZipArchive<File>, path: &Path) -> Result<String, DecodeError> {
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|error| DecodeError::malformed("docx", path, error))?
        .read_to_string(&mut xml)
        .map_err(|source| DecodeError::io(path, source))?;

    let mut reader = Reader::from_str(&xml);
    let mut content = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) if element.local_name().as_ref() == b"t" => {
                in_text_run = true;
            }
            Ok(Event::End(element)) => match element.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => content.push('\n'),
                _ => {}
            },
            Ok(Event::Text(text)) if in_text_run => {
                let run = text
                    .unescape()
                    .map_err(|error| DecodeError::malformed("docx", path, error))?;
                content.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(error) => return Err(DecodeError::malformed("docx", path, error)),
            Ok(_) => {}
        }
    }

    Ok(content)
}

/// Every `word/media/*` entry as a `data:` URI, name-sorted for a stable
/// order, MIME type sniffed from the bytes.
fn media_images(archive: &mut ZipArchive<File>, path: &Path) -> Result<Vec<String>, DecodeError> {
    let mut names: Vec<String> = archive
        .file_names()
        .filter(|name| name.starts_with("word/media/"))
        .map(String::from)
        .collect();
    names.sort();

    let mut images = Vec::with_capacity(names.len());
    for name in names {
        let mut data = Vec::new();
        archive
            .by_name(&name)
            .map_err(|error| DecodeError::malformed("docx", path, error))?
            .read_to_end(&mut data)
            .map_err(|source| DecodeError::io(path, source))?;

        let mime = infer::get(&data)
            .map(|kind| kind.mime_type())
            .filter(|mime| mime.starts_with("image/"))
            .unwrap_or(FALLBACK_IMAGE_MIME);
        let payload = STANDARD.encode(&data);
        images.push(format!("data:{};base64,{}", mime, payload));
    }

    Ok(images)
}
