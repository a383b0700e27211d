use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::address_book::AddressBook;

use super::{
    codec::{Codec, CodecError},
    storage::{ReadBlobState, Storage, StorageError},
};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Address book not found at {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse address book at {path}: {source}")]
    Decode { path: PathBuf, source: CodecError },

    #[error("Failed to encode address book: {0}")]
    Encode(CodecError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// What `load` does when there is no file yet
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MissingFile {
    CreateNew,
    Fail,
}

pub struct AddressBookStore<S: Storage> {
    storage: S,
    codec: Box<dyn Codec>,
}

impl<S: Storage> AddressBookStore<S> {
    pub fn new(storage: S, codec: Box<dyn Codec>) -> Self {
        Self { storage, codec }
    }

    #[tracing::instrument(skip(self))]
    pub fn load(&self, path: &Path, missing: MissingFile) -> StoreResult<AddressBook> {
        match self.storage.read_blob(path)? {
            ReadBlobState::Found(bytes) => {
                let book = self
                    .codec
                    .decode(&bytes)
                    .map_err(|source| StoreError::Decode {
                        path: path.to_path_buf(),
                        source,
                    })?;

                log::debug!("Loaded {} people from {}", book.len(), path.display());

                Ok(book)
            }
            ReadBlobState::NotFound => match missing {
                MissingFile::CreateNew => {
                    log::info!("{}: File not found, creating a new file", path.display());

                    Ok(AddressBook::default())
                }
                MissingFile::Fail => Err(StoreError::NotFound(path.to_path_buf())),
            },
        }
    }

    #[tracing::instrument(skip(self, book))]
    pub fn save(&mut self, path: &Path, book: &AddressBook) -> StoreResult<()> {
        let bytes = self.codec.encode(book).map_err(StoreError::Encode)?;

        self.storage.write_blob(path, &bytes)?;

        log::debug!("Saved {} people to {}", book.len(), path.display());

        Ok(())
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
