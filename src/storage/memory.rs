//! In-memory sample store

use super::{SampleStore, StoreError};

/// In-memory store for tests. Not durable, but good for unit and small
/// scenario tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySampleStore {
    data: Option<Vec<u8>>,
    writes: usize,
}

impl InMemorySampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with serialized log contents
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Some(bytes.into()),
            writes: 0,
        }
    }

    pub fn contents(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    /// Number of writes performed since construction
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl SampleStore for InMemorySampleStore {
    fn read(&self) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.data.clone())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), StoreError> {
        self.data = Some(bytes.to_vec());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = InMemorySampleStore::new();
        assert_eq!(store.read().unwrap(), None);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_write_replaces_contents() {
        let mut store = InMemorySampleStore::new();
        store.write(b"first").unwrap();
        store.write(b"second").unwrap();
        assert_eq!(store.read().unwrap(), Some(b"second".to_vec()));
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_with_contents_seeds_data() {
        let store = InMemorySampleStore::with_contents(b"[]".to_vec());
        assert_eq!(store.read().unwrap(), Some(b"[]".to_vec()));
    }
}
