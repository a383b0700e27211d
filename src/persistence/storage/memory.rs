use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use super::{ReadBlobState, Storage, StorageResult};

/// Keeps blobs in memory, used where touching the filesystem is not wanted
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read_blob(&self, path: &Path) -> StorageResult<ReadBlobState> {
        match self.blobs.get(path) {
            Some(bytes) => Ok(ReadBlobState::Found(bytes.clone())),
            None => Ok(ReadBlobState::NotFound),
        }
    }

    fn write_blob(&mut self, path: &Path, bytes: &[u8]) -> StorageResult<()> {
        self.blobs.insert(path.to_path_buf(), bytes.to_vec());

        Ok(())
    }
}
