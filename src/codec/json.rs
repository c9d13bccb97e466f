//! Plain JSON baseline implementation
//!
//! Provides a no-compression baseline for performance comparison. Stores the
//! JSON text unchanged while following the same decode rules (empty input,
//! null tolerance) as the compressing serializer.

use crate::codec::{encode_error, parse_into_shape, CodecError, Serializer, Shape};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Baseline serializer that stores JSON text without compression
pub struct JsonSerializer;

impl JsonSerializer {
    pub fn new() -> Self {
        JsonSerializer
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializer for JsonSerializer {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(encode_error)
    }

    fn decode<T>(&self, bytes: &[u8], shape: &Shape<T>) -> Result<T, CodecError>
    where
        T: DeserializeOwned + Default,
    {
        if bytes.is_empty() {
            return Ok(T::default());
        }

        parse_into_shape(bytes, shape)
    }

    fn name(&self) -> &str {
        "Json"
    }
}
