pub mod gzip;
pub mod json;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use thiserror::Error;

/// Errors surfaced by a serializer. Every failure aborts the single document
/// operation in progress; no retries happen at this level.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value cannot be represented as JSON (e.g. a map with non-string keys).
    #[error("value cannot be encoded as JSON: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The payload is not valid JSON, or cannot be coerced into the requested shape.
    #[error("payload does not decode into the requested shape: {0}")]
    Decoding(#[source] serde_json::Error),

    /// The compression stream could not be finalized or read to its end marker,
    /// typically signaling truncated or corrupted input.
    #[error("compression stream failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Describes the expected result of a `decode` call: the target type plus
/// whether the caller treats it as nullable.
///
/// Non-nullable shapes get null-tolerant decoding (a JSON `null` payload
/// collapses to the type's default value); explicitly nullable shapes decode
/// the payload directly.
pub struct Shape<T> {
    nullable: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Shape<T> {
    /// Shape of a plain value: `null` payloads collapse to `T::default()`.
    pub fn value() -> Self {
        Shape {
            nullable: false,
            _marker: PhantomData,
        }
    }

    /// Shape of an explicitly nullable value, decoded without coercion.
    pub fn nullable() -> Self {
        Shape {
            nullable: true,
            _marker: PhantomData,
        }
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

impl<T> Clone for Shape<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Shape<T> {}

/// Represents a bidirectional transform between structured values and opaque
/// wire payloads, pluggable into a document store.
pub trait Serializer {
    /// Encodes the value into a self-contained byte payload.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    /// Decodes a payload produced by a matching `encode` call into the
    /// requested shape. Empty input yields the shape's default value.
    fn decode<T>(&self, bytes: &[u8], shape: &Shape<T>) -> Result<T, CodecError>
    where
        T: DeserializeOwned + Default;

    /// Returns the name of the serializer.
    fn name(&self) -> &str;
}

/// Maps a serialization failure onto the error taxonomy. serde_json reports
/// writer failures through its own error type, so I/O-category errors are
/// reclassified as stream failures.
pub(crate) fn encode_error(err: serde_json::Error) -> CodecError {
    if err.is_io() {
        CodecError::Io(err.into())
    } else {
        CodecError::Encoding(err)
    }
}

/// Parses a JSON document into the target shape.
///
/// Non-nullable shapes decode through a nullable intermediate so a `null`
/// payload collapses to the shape's default instead of failing.
pub(crate) fn parse_into_shape<T>(json: &[u8], shape: &Shape<T>) -> Result<T, CodecError>
where
    T: DeserializeOwned + Default,
{
    if shape.is_nullable() {
        serde_json::from_slice(json).map_err(CodecError::Decoding)
    } else {
        let parsed: Option<T> = serde_json::from_slice(json).map_err(CodecError::Decoding)?;
        Ok(parsed.unwrap_or_default())
    }
}
