//! Body serialization.
//!
//! `Request` encodes outbound bodies and decodes inbound ones through a
//! `Codec`, so a client and server that agree on another format can swap
//! `JsonCodec` out consistently.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Failure reported by a codec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("decode failed: {0}")]
    Decode(String),
}

/// Encodes request bodies and decodes response bodies.
pub trait Codec: Send + Sync {
    fn encode<T>(&self, value: &T) -> Result<Vec<u8>, CodecError>
    where
        T: Serialize + ?Sized;

    fn decode<T>(&self, bytes: &[u8]) -> Result<T, CodecError>
    where
        T: DeserializeOwned;
}

/// JSON via `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T>(&self, value: &T) -> Result<Vec<u8>, CodecError>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_vec(value).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode<T>(&self, bytes: &[u8]) -> Result<T, CodecError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}
