//! Directory snapshot and best-file selection.
//!
//! Scoring considers every regular file in the snapshot regardless of
//! extension; only extraction is limited to the known formats. Files that
//! never decode still win selection when their name matches best.

use crate::config::MatchConfig;
use crate::error::Result;
use crate::matching::similar;
use crate::text::{normalize, words};
use ahash::AHashSet;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// One regular file observed in the data directory.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// File name including extension, as shown to the caller.
    pub name: String,
    /// Full path for extraction.
    pub path: PathBuf,
}

impl FileEntry {
    /// File name without its final extension, the part that gets scored.
    fn stem(&self) -> &str {
        Path::new(&self.name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.name)
    }
}

/// An explicit read-only snapshot of the data directory, taken once per
/// request and passed into the selector. No cross-request index or cache.
#[derive(Debug, Clone, Default)]
pub struct DirSnapshot {
    files: Vec<FileEntry>,
}

impl DirSnapshot {
    /// Enumerate the regular files in `dir`, name-sorted for deterministic
    /// tie-breaking. Non-files (and non-UTF-8 names) are skipped silently.
    pub fn scan(dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("failed to list data directory '{}'", dir.display()))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("failed to read entry in '{}'", dir.display()))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            files.push(FileEntry {
                name: name.to_string(),
                path: path.clone(),
            });
        }
        files.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!("snapshot of '{}': {} files", dir.display(), files.len());
        Ok(Self { files })
    }

    /// Build a snapshot from pre-enumerated entries, preserving their order.
    pub fn from_files(files: Vec<FileEntry>) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }
}

/// Count of fuzzy (keyword, filename-token) matches over all pairs.
///
/// The filename tokens are deduplicated into a set; the keyword list is not,
/// so a repeated question keyword scores twice. A single filename token
/// matching several keywords also counts once per keyword.
pub fn filename_score(keywords: &[String], stem: &str, config: &MatchConfig) -> usize {
    let filename_tokens: AHashSet<String> = words(&normalize(stem)).into_iter().collect();

    keywords
        .iter()
        .map(|keyword| {
            filename_tokens
                .iter()
                .filter(|token| similar(keyword, token, config))
                .count()
        })
        .sum()
}

/// Pick the single best-scoring file, or `None` when nothing scores above
/// zero. Strict `>` tracking: the first file to reach the top score wins,
/// later ties never replace it.
pub fn select_best<'a>(
    keywords: &[String],
    snapshot: &'a DirSnapshot,
    config: &MatchConfig,
) -> Option<&'a FileEntry> {
    let mut best: Option<&FileEntry> = None;
    let mut highest = 0usize;

    for entry in snapshot.files() {
        let score = filename_score(keywords, entry.stem(), config);
        tracing::trace!("file '{}' scored {}", entry.name, score);
        if score > highest {
            highest = score;
            best = Some(entry);
        }
    }

    best
}
