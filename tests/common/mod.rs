//! Shared test fixtures: a temporary data directory of documents.
//!
//! Each test gets its own [`DataDir`], cleaned up on drop, so tests never
//! share state (the pipeline itself is stateless by design).

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// Minimal PNG: the 8-byte signature plus filler, enough for MIME sniffing.
#[allow(dead_code)]
pub const PNG_BYTES: [u8; 12] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

pub struct DataDir {
    temp: TempDir,
}

#[allow(dead_code)] // Helpers used across different integration test crates
impl DataDir {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::write(&path, contents).expect("write fixture file");
        path
    }

    pub fn create_subdir(&self, name: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::create_dir(&path).expect("create fixture subdir");
        path
    }

    /// Build a minimal DOCX container: one `word/document.xml` with the given
    /// paragraphs, optionally one PNG under `word/media/`.
    pub fn write_docx(&self, name: &str, paragraphs: &[&str], with_image: bool) -> PathBuf {
        let path = self.temp.path().join(name);
        let file = std::fs::File::create(&path).expect("create docx fixture");
        let mut writer = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        let mut body = String::from(
            "<?xml version=\"1.0\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>",
        );
        for paragraph in paragraphs {
            body.push_str("<w:p><w:r><w:t>");
            body.push_str(paragraph);
            body.push_str("</w:t></w:r></w:p>");
        }
        body.push_str("</w:body></w:document>");

        writer
            .start_file("word/document.xml", options)
            .expect("start document.xml");
        writer.write_all(body.as_bytes()).expect("write document.xml");

        if with_image {
            writer
                .start_file("word/media/image1.png", options)
                .expect("start media entry");
            writer.write_all(&PNG_BYTES).expect("write media entry");
        }

        writer.finish().expect("finish docx fixture");
        path
    }
}
