//! # Additional Properties
//!
//! Storage for the keys of an inbound JSON object that the record's schema
//! does not declare. Values are kept as raw JSON and are never decoded, so
//! unmodeled data survives a decode → encode cycle byte-for-byte (modulo
//! key order).
//!
//! ## Invariant
//!
//! The map owned by a record never holds one of that record's declared wire
//! keys: decode removes declared keys before capture, and
//! [`Record::set_property`](crate::Record::set_property) refuses them.

use std::ops::Index;

use serde_json::Value;

use crate::JsonObject;

/// Open-ended map of unknown keys held by a record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdditionalProperties(JsonObject);

impl AdditionalProperties {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of unknown keys held.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no unknown keys are held.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Membership test by key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Read a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Mutably borrow a value by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Insert or overwrite a key, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove a key, keeping the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Keys currently held, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    /// Borrow the underlying JSON object.
    pub fn as_object(&self) -> &JsonObject {
        &self.0
    }

    /// Consume the map, returning the underlying JSON object.
    pub fn into_object(self) -> JsonObject {
        self.0
    }
}

impl From<JsonObject> for AdditionalProperties {
    fn from(object: JsonObject) -> Self {
        Self(object)
    }
}

impl<'a> IntoIterator for &'a AdditionalProperties {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Indexed read.
///
/// # Panics
///
/// Panics if the key is not held, like `HashMap`'s `Index`. Use
/// [`AdditionalProperties::get`] for a fallible read.
impl Index<&str> for AdditionalProperties {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.0.get(key) {
            Some(value) => value,
            None => panic!("no additional property named '{key}'"),
        }
    }
}
