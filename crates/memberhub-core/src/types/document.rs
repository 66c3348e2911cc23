//! Document and write payload types exchanged with a [`DocumentStore`].
//!
//! [`DocumentStore`]: crate::traits::DocumentStore

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, ErrorKind};
use crate::result::AppResult;

/// The field map of a stored document.
pub type Document = serde_json::Map<String, Value>;

/// A document read back from the store, together with its identifier.
///
/// The identifier lives outside the field map, as in hosted document stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    /// Store-assigned identifier.
    pub id: String,
    /// Field values.
    pub fields: Document,
}

impl StoredDocument {
    /// Create a stored document.
    pub fn new(id: impl Into<String>, fields: Document) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Value of a single field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Deserialize into a typed record, exposing the identifier as `id`.
    pub fn decode<T: DeserializeOwned>(&self) -> AppResult<T> {
        let mut fields = self.fields.clone();
        fields.insert("id".to_string(), Value::String(self.id.clone()));
        serde_json::from_value(Value::Object(fields)).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Failed to decode document '{}'", self.id),
                e,
            )
        })
    }
}

/// A field value in a write.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A concrete JSON value.
    Value(Value),
    /// Resolved by the store to its own clock at write time.
    ServerTimestamp,
}

/// The set of fields sent to the store by a create or update.
///
/// Null values never enter a write: absent optional fields are simply not
/// sent, so an update never erases a field it did not mention.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentWrite {
    fields: BTreeMap<String, FieldValue>,
}

impl DocumentWrite {
    /// Create an empty write.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a write from a serializable payload, dropping null fields.
    ///
    /// The payload must serialize to a JSON object.
    pub fn from_record<T: Serialize>(record: &T) -> AppResult<Self> {
        match serde_json::to_value(record)? {
            Value::Object(map) => {
                let mut write = Self::new();
                for (field, value) in map {
                    write.set(field, value);
                }
                Ok(write)
            }
            other => Err(AppError::new(
                ErrorKind::Serialization,
                format!("Write payload must be an object, got {other}"),
            )),
        }
    }

    /// Set a field. Null values are ignored.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        if !value.is_null() {
            self.fields.insert(field.into(), FieldValue::Value(value));
        }
        self
    }

    /// Mark a field to receive the store's timestamp.
    pub fn set_server_timestamp(&mut self, field: impl Into<String>) -> &mut Self {
        self.fields.insert(field.into(), FieldValue::ServerTimestamp);
        self
    }
}

impl IntoIterator for DocumentWrite {
    type Item = (String, FieldValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
