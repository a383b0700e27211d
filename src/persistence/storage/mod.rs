use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod file;
pub mod memory;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Unable to read blob at {path}: {source}")]
    UnableToReadBlob {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to write blob at {path}: {source}")]
    UnableToWriteBlob {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, PartialEq)]
pub enum ReadBlobState {
    Found(Vec<u8>),
    NotFound,
}

/// Whole-blob reads and writes, a write always replaces the previous contents
pub trait Storage {
    fn read_blob(&self, path: &Path) -> StorageResult<ReadBlobState>;
    fn write_blob(&mut self, path: &Path, bytes: &[u8]) -> StorageResult<()>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn read_blob(&self, path: &Path) -> StorageResult<ReadBlobState> {
        (**self).read_blob(path)
    }

    fn write_blob(&mut self, path: &Path, bytes: &[u8]) -> StorageResult<()> {
        (**self).write_blob(path, bytes)
    }
}
