//! JSON + GZip serializer
//!
//! Wraps the JSON codec with a GZip stream so documents travel compressed.
//! The payload is a single gzip member; its own header and trailer (checksum,
//! size) mark the end of the stream, so no extra framing is added.

use crate::codec::{encode_error, parse_into_shape, CodecError, Serializer, Shape};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Read;

/// Serializer combining JSON encoding with GZip compression
///
/// Holds only the compression level; every call allocates its own encoder
/// and buffers, so a shared instance is safe for concurrent use.
pub struct JsonGzipSerializer {
    level: Compression, // Immutable configuration, never mutated mid-call
}

impl JsonGzipSerializer {
    pub fn new() -> Self {
        Self::with_level(Compression::default())
    }

    /// Creates a serializer with an explicit compression level. Two instances
    /// with the same level produce byte-identical output for the same input.
    pub fn with_level(level: Compression) -> Self {
        JsonGzipSerializer { level }
    }
}

impl Default for JsonGzipSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializer for JsonGzipSerializer {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        let mut encoder = GzEncoder::new(Vec::new(), self.level);
        serde_json::to_writer(&mut encoder, value).map_err(encode_error)?;
        encoder.finish().map_err(CodecError::Io)
    }

    fn decode<T>(&self, bytes: &[u8], shape: &Shape<T>) -> Result<T, CodecError>
    where
        T: DeserializeOwned + Default,
    {
        // "No stored document" is not a decompression error
        if bytes.is_empty() {
            return Ok(T::default());
        }

        let mut json = Vec::new();
        GzDecoder::new(bytes).read_to_end(&mut json)?;

        parse_into_shape(&json, shape)
    }

    fn name(&self) -> &str {
        "JsonGzip"
    }
}
