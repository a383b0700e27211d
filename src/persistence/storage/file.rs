use std::{
    fs::{File, OpenOptions},
    io::{Read, Write},
    path::Path,
};

use super::{ReadBlobState, Storage, StorageError, StorageResult};

#[derive(Debug, Default)]
pub struct FileStorage;

impl FileStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for FileStorage {
    fn read_blob(&self, path: &Path) -> StorageResult<ReadBlobState> {
        let to_error = |source: std::io::Error| StorageError::UnableToReadBlob {
            path: path.to_path_buf(),
            source,
        };

        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(err) => match err.kind() {
                std::io::ErrorKind::NotFound => return Ok(ReadBlobState::NotFound),
                _ => return Err(to_error(err)),
            },
        };

        let mut buf = Vec::new();

        file.read_to_end(&mut buf).map_err(to_error)?;

        Ok(ReadBlobState::Found(buf))
    }

    fn write_blob(&mut self, path: &Path, bytes: &[u8]) -> StorageResult<()> {
        let to_error = |source: std::io::Error| StorageError::UnableToWriteBlob {
            path: path.to_path_buf(),
            source,
        };

        // Truncate, a shorter book must not leave stale bytes behind
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(to_error)?;

        file.write_all(bytes).map_err(to_error)?;

        file.sync_all().map_err(to_error)
    }
}
