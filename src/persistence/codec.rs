use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use thiserror::Error;

use crate::model::address_book::AddressBook;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Unable to encode address book: {0}")]
    Encode(String),

    #[error("Unable to decode address book: {0}")]
    Decode(String),
}

pub type CodecResult<T> = Result<T, CodecError>;

/// Turns a whole address book into bytes and back. The byte layout belongs
/// to the implementation, callers only rely on structural round-trips.
pub trait Codec {
    fn encode(&self, book: &AddressBook) -> CodecResult<Vec<u8>>;
    fn decode(&self, bytes: &[u8]) -> CodecResult<AddressBook>;
}

pub struct BincodeCodec;

impl Codec for BincodeCodec {
    fn encode(&self, book: &AddressBook) -> CodecResult<Vec<u8>> {
        bincode::serialize(book).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<AddressBook> {
        bincode::deserialize(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}

pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode(&self, book: &AddressBook) -> CodecResult<Vec<u8>> {
        serde_json::to_vec(book).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<AddressBook> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum CodecKind {
    #[default]
    Binary,
    Json,
}

impl CodecKind {
    pub fn codec(&self) -> Box<dyn Codec> {
        match self {
            CodecKind::Binary => Box::new(BincodeCodec),
            CodecKind::Json => Box::new(JsonCodec),
        }
    }
}
