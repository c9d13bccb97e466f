use crate::codec::{CodecError, Serializer, Shape};
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// In-memory document store parameterized by a pluggable serializer.
///
/// Stands in for an external key-value bucket: values are encoded before
/// being stored under a key and decoded when read back. The store never
/// inspects payloads itself, so serializers are interchangeable at
/// construction time.
pub struct DocumentStore<S: Serializer> {
    serializer: S,
    documents: FxHashMap<String, Vec<u8>>,
}

impl<S: Serializer> DocumentStore<S> {
    pub fn new(serializer: S) -> Self {
        DocumentStore {
            serializer,
            documents: FxHashMap::default(),
        }
    }

    /// Encodes the value and stores it under `key`. An encode failure stores
    /// nothing, leaving any previous document for `key` intact.
    pub fn insert<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), CodecError> {
        let payload = self.serializer.encode(value)?;
        self.documents.insert(key.to_string(), payload);
        Ok(())
    }

    /// Reads the bytes stored under `key` and decodes them into the requested
    /// shape. A missing document decodes as the shape's default value.
    pub fn get<T>(&self, key: &str, shape: &Shape<T>) -> Result<T, CodecError>
    where
        T: DeserializeOwned + Default,
    {
        let payload = self.documents.get(key).map(Vec::as_slice).unwrap_or(&[]);
        self.serializer.decode(payload, shape)
    }

    pub fn serializer(&self) -> &S {
        &self.serializer
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::gzip::JsonGzipSerializer;

    #[test]
    fn insert_then_get_round_trips() {
        let mut store = DocumentStore::new(JsonGzipSerializer::new());
        store.insert("doc-1", &vec!["a".to_string(), "b".to_string()]).unwrap();

        let read_back: Vec<String> = store.get("doc-1", &Shape::value()).unwrap();
        assert_eq!(read_back, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.serializer().name(), "JsonGzip");
    }

    #[test]
    fn missing_key_yields_shape_default() {
        let store = DocumentStore::new(JsonGzipSerializer::new());
        let value: u64 = store.get("absent", &Shape::value()).unwrap();
        assert_eq!(value, 0);
    }

    #[test]
    fn failed_insert_keeps_previous_document() {
        use std::collections::BTreeMap;

        let mut store = DocumentStore::new(JsonGzipSerializer::new());
        store.insert("doc-1", &7u64).unwrap();

        let mut bad: BTreeMap<Vec<u8>, u64> = BTreeMap::new();
        bad.insert(vec![0], 0);
        assert!(store.insert("doc-1", &bad).is_err());

        let value: u64 = store.get("doc-1", &Shape::value()).unwrap();
        assert_eq!(value, 7);
    }
}
