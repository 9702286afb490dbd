use super::traits::{Document, StoredDocument, INTERNAL_ID_FIELD};
use crate::common::error::{PortfolioError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Boundary between the storage representation and the API representation.
///
/// Every document read goes through `to_public`, which renames the store's
/// internal identifier to the public `id` field.
pub struct Serialization;

impl Serialization {
    /// Convert a domain value into a storable document
    pub fn encode<T: Serialize>(value: &T) -> Result<Document> {
        match serde_json::to_value(value)? {
            Value::Object(mut map) => {
                map.remove(INTERNAL_ID_FIELD);
                Ok(map)
            }
            other => Err(PortfolioError::storage(format!(
                "Expected a JSON object document, got {other}"
            ))),
        }
    }

    /// Normalize a stored document into its public shape.
    ///
    /// `_id` never leaves this function. The internal id becomes `id` unless
    /// the body already carries its own identifier (status checks do).
    pub fn to_public(document: StoredDocument) -> Document {
        let StoredDocument {
            internal_id,
            mut body,
        } = document;
        body.remove(INTERNAL_ID_FIELD);
        body.entry("id").or_insert(Value::String(internal_id));
        body
    }

    /// Convert a stored document into a domain value
    pub fn decode<T: DeserializeOwned>(document: StoredDocument) -> Result<T> {
        let public = Self::to_public(document);
        Ok(serde_json::from_value(Value::Object(public))?)
    }

    pub fn decode_all<T: DeserializeOwned>(documents: Vec<StoredDocument>) -> Result<Vec<T>> {
        documents.into_iter().map(Self::decode).collect()
    }
}
