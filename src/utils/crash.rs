use std::{io, path::PathBuf, process};

use thiserror::Error;

use crate::{
    builder::builder::BuildError,
    persistence::{storage::StorageError, store::StoreError},
};

#[derive(Error, Debug)]
pub enum AppCrash {
    #[error("Invalid input: {0}")]
    Input(#[from] BuildError),

    #[error("{}: File not found", .0.display())]
    NotFound(PathBuf),

    #[error("{0}")]
    Decode(StoreError),

    #[error("{0}")]
    Read(StoreError),

    /// Encoding or writing the book failed, the previous file may be gone
    #[error("Failed to write address book: {0}")]
    Write(StoreError),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl From<StoreError> for AppCrash {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(path) => AppCrash::NotFound(path),
            StoreError::Decode { .. } => AppCrash::Decode(error),
            StoreError::Encode(_) => AppCrash::Write(error),
            StoreError::Storage(StorageError::UnableToReadBlob { .. }) => AppCrash::Read(error),
            StoreError::Storage(StorageError::UnableToWriteBlob { .. }) => AppCrash::Write(error),
        }
    }
}

impl AppCrash {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppCrash::Input(_) => 2,
            AppCrash::NotFound(_) | AppCrash::Decode(_) | AppCrash::Read(_) => 3,
            AppCrash::Write(_) | AppCrash::Output(_) => 4,
        }
    }
}

pub fn crash(reason: AppCrash) -> ! {
    log::error!("{}", reason);

    process::exit(reason.exit_code());
}
