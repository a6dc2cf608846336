//! Durable crontab storage.
//!
//! The scheduler core never touches I/O directly; it only produces and
//! consumes the serialized text blob. This seam is what the host wires to
//! real storage.

use std::path::{Path, PathBuf};

use lp_domain::{Error, Result};

/// Opaque durable blob accessor for the serialized crontab.
pub trait CrontabStore: Send + Sync {
    fn read_all(&self) -> Result<String>;
    fn write_all(&self, text: &str) -> Result<()>;
}

/// Flat-file store: the whole crontab lives in one file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CrontabStore for FileStore {
    fn read_all(&self) -> Result<String> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| Error::Store(format!("read {}: {e}", self.path.display())))
    }

    fn write_all(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| Error::Store(format!("create {}: {e}", parent.display())))?;
            }
        }
        std::fs::write(&self.path, text)
            .map_err(|e| Error::Store(format!("write {}: {e}", self.path.display())))
    }
}
