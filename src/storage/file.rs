//! File-backed sample store

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{SampleStore, StoreError};
use crate::core::DEFAULT_LOG_FILE_NAME;
use crate::utils::config::SamplerConfig;

/// Whole-file store backed by a fixed path in application-private storage
#[derive(Debug, Clone)]
pub struct FileSampleStore {
    path: PathBuf,
}

impl FileSampleStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store rooted at `dir` under the default log file name
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join(DEFAULT_LOG_FILE_NAME),
        }
    }

    /// Store rooted at `dir` under the configured log file name
    pub fn from_config<P: AsRef<Path>>(dir: P, config: &SamplerConfig) -> Self {
        Self {
            path: dir.as_ref().join(&config.log_file_name),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SampleStore for FileSampleStore {
    fn read(&self) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::ReadFailed {
                message: format!("'{}': {}", self.path.display(), e),
            }),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), StoreError> {
        debug!(path = %self.path.display(), len = bytes.len(), "rewriting sample log");
        fs::write(&self.path, bytes).map_err(|e| StoreError::WriteFailed {
            message: format!("'{}': {}", self.path.display(), e),
        })
    }
}
