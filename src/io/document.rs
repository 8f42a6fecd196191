use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Error type for board document I/O
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("no board file at {0} (run `cb init` to create one)")]
    NotFound(PathBuf),
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Handle to the board document on disk.
///
/// The document text is the system of record: every read hits the
/// filesystem and nothing is cached between calls, so a toggle always
/// patches the text that is actually on disk at that moment.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Document { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the full current document text.
    pub fn read(&self) -> Result<String, DocumentError> {
        fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DocumentError::NotFound(self.path.clone())
            } else {
                DocumentError::Read {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })
    }

    /// Replace the full document text. Writes to a temp file in the same
    /// directory and renames over the target, so a failed write never
    /// leaves a half-written document behind.
    pub fn write(&self, content: &str) -> Result<(), DocumentError> {
        let write_err = |e: std::io::Error| DocumentError::Write {
            path: self.path.clone(),
            source: e,
        };

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.flush().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}
