//! Error handling types and utilities.

use std::path::{Path, PathBuf};

/// A specialized Result type for docdesk operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when decoding a selected document fails.
///
/// A decode failure is terminal for the request: there is no fallback to the
/// next-best file and no partial content. Absence of any matching file is not
/// an error and is represented as `Ok(None)` by the answer pipeline.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The file could not be read from disk.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file was readable but its contents could not be parsed.
    #[error("malformed {format} file '{}': {reason}", path.display())]
    Malformed {
        format: &'static str,
        path: PathBuf,
        reason: String,
    },
}

impl DecodeError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn malformed(format: &'static str, path: &Path, reason: impl ToString) -> Self {
        Self::Malformed {
            format,
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}
