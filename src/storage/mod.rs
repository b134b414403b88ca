//! Persisted store collaborators for the sample log

pub mod file;
pub mod memory;

pub use file::FileSampleStore;
pub use memory::InMemorySampleStore;

use std::fmt;

/// Errors raised by a sample store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Underlying read failed
    ReadFailed { message: String },
    /// Underlying write failed
    WriteFailed { message: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::ReadFailed { message } => write!(f, "store read failed: {}", message),
            StoreError::WriteFailed { message } => write!(f, "store write failed: {}", message),
        }
    }
}

impl std::error::Error for StoreError {}

/// Byte-level access to the persisted sample log at a fixed logical path.
///
/// The log is always read and replaced as a whole; there is no incremental
/// append surface.
pub trait SampleStore {
    /// Read the full serialized log. `Ok(None)` means no log exists yet.
    fn read(&self) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replace the full serialized log.
    fn write(&mut self, bytes: &[u8]) -> Result<(), StoreError>;
}
