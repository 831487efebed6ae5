//! # Typed Records
//!
//! [`Record`] is the contract every schema entity fulfils: decode from a JSON
//! object, encode back to one, and expose the passthrough map. Implementations
//! are generated by [`record!`](crate::record!); the functions at the bottom of
//! this module are the building blocks the generated code calls, one per
//! field.
//!
//! ## Decode order
//!
//! Required fields are extracted first, then optional fields, each in
//! declaration order. Whatever is left in the object afterwards becomes the
//! passthrough map. Because extraction removes keys, declared and passthrough
//! keys are disjoint by construction. After decode the map is only reachable
//! mutably through [`Record::set_property`] and [`Record::remove_property`],
//! so the two sets stay disjoint.
//!
//! ## Encode order
//!
//! The passthrough map is copied first, then required fields are written
//! (overwriting on collision), then present optional fields. With
//! `serde_json`'s `preserve_order` feature the output key order is stable.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{json_type_name, CodecError, PropertyError};
use crate::field::Field;
use crate::properties::AdditionalProperties;
use crate::schema::{Presence, RecordSchema, UnionSchema};
use crate::wire::WireValue;
use crate::JsonObject;

/// A schema entity with lossless JSON conversion.
pub trait Record: Sized {
    /// Static description of the declared fields.
    const SCHEMA: &'static RecordSchema;

    /// Decode, taking ownership of the object.
    fn decode_owned(object: JsonObject) -> Result<Self, CodecError>;

    /// Encode into a JSON object.
    ///
    /// Encoding is total: every wire value type has an infallible encoding.
    fn encode(&self) -> JsonObject;

    /// The unknown keys captured at decode time (or set since).
    fn additional_properties(&self) -> &AdditionalProperties;

    /// Insert or overwrite an unknown key, returning the previous value.
    ///
    /// Declared wire keys are rejected; set those through the typed field.
    fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, PropertyError>;

    /// Delete an unknown key, returning its value.
    fn remove_property(&mut self, key: &str) -> Result<Value, PropertyError>;

    /// Decode from a borrowed object. The caller's map is left untouched;
    /// decoding works on a private copy.
    fn decode(object: &JsonObject) -> Result<Self, CodecError> {
        Self::decode_owned(object.clone()).map_err(|e| {
            tracing::debug!(record = Self::SCHEMA.name, error = %e, "decode failed");
            e
        })
    }

    /// Decode from an arbitrary JSON value, which must be an object.
    fn from_value(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::Object(object) => Self::decode_owned(object).map_err(|e| {
                tracing::debug!(record = Self::SCHEMA.name, error = %e, "decode failed");
                e
            }),
            other => Err(CodecError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// Parse JSON text and decode it.
    fn from_json_str(text: &str) -> Result<Self, CodecError> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// Encode as a `serde_json::Value::Object`.
    fn to_value(&self) -> Value {
        Value::Object(self.encode())
    }

    /// Encode as compact JSON text.
    fn to_json_string(&self) -> String {
        self.to_value().to_string()
    }

    /// Keys currently held in the passthrough map.
    fn additional_keys(&self) -> Vec<&str> {
        self.additional_properties().keys().collect()
    }

    /// Membership test on the passthrough map.
    fn contains_property(&self, key: &str) -> bool {
        self.additional_properties().contains_key(key)
    }

    /// Read an unknown key.
    fn property(&self, key: &str) -> Result<&Value, PropertyError> {
        self.additional_properties()
            .get(key)
            .ok_or_else(|| PropertyError::NotFound(key.to_string()))
    }
}

/// A field type that is one of several record types, chosen by which
/// signature keys the value carries. Implemented by
/// [`union_field!`](crate::union_field!).
pub trait TaggedUnion: WireValue {
    /// Members and their signatures, in priority order.
    const SCHEMA: &'static UnionSchema;

    /// Name of the member this value holds.
    fn variant_name(&self) -> &'static str;
}

/// Storage for an optional field: `Option<T>` or [`Field<T>`].
///
/// The slot type decides whether `null` is accepted, so nullability is
/// carried by the field's Rust type rather than by a runtime flag.
pub trait OptionalSlot: Default {
    /// The value type held when present.
    type Value: WireValue;

    /// Presence recorded in the schema artifact.
    const PRESENCE: Presence;

    /// Decode a value found under the field's key.
    fn decode_slot(raw: Value) -> Result<Self, CodecError>;

    /// Encode the slot; `None` means the key is omitted.
    fn encode_slot(&self) -> Option<Value>;
}

impl<T: WireValue> OptionalSlot for Option<T> {
    type Value = T;

    const PRESENCE: Presence = Presence::Optional;

    fn decode_slot(raw: Value) -> Result<Self, CodecError> {
        if raw.is_null() {
            return Err(CodecError::UnexpectedNull {
                path: String::new(),
            });
        }
        T::decode_wire(raw).map(Some)
    }

    fn encode_slot(&self) -> Option<Value> {
        self.as_ref().map(WireValue::encode_wire)
    }
}

impl<T: WireValue> OptionalSlot for Field<T> {
    type Value = T;

    const PRESENCE: Presence = Presence::Nullable;

    fn decode_slot(raw: Value) -> Result<Self, CodecError> {
        if raw.is_null() {
            return Ok(Field::Null);
        }
        T::decode_wire(raw).map(Field::Present)
    }

    fn encode_slot(&self) -> Option<Value> {
        match self {
            Field::Absent => None,
            Field::Null => Some(Value::Null),
            Field::Present(v) => Some(v.encode_wire()),
        }
    }
}

/// Remove and decode a required field.
#[doc(hidden)]
pub fn take_required<T: WireValue>(
    object: &mut JsonObject,
    key: &'static str,
) -> Result<T, CodecError> {
    match object.shift_remove(key) {
        Some(raw) => T::decode_wire(raw).map_err(|e| e.at(key)),
        None => Err(CodecError::MissingRequiredField {
            path: String::new(),
            key,
        }),
    }
}

/// Remove and decode an optional field; a missing key yields the empty slot.
#[doc(hidden)]
pub fn take_optional<S: OptionalSlot>(
    object: &mut JsonObject,
    key: &'static str,
) -> Result<S, CodecError> {
    match object.shift_remove(key) {
        Some(raw) => S::decode_slot(raw).map_err(|e| e.at(key)),
        None => Ok(S::default()),
    }
}

/// Write a required field unconditionally.
#[doc(hidden)]
pub fn put_required<T: WireValue>(object: &mut JsonObject, key: &'static str, value: &T) {
    object.insert(key.to_string(), value.encode_wire());
}

/// Write an optional field unless it is absent.
#[doc(hidden)]
pub fn put_optional<S: OptionalSlot>(object: &mut JsonObject, key: &'static str, slot: &S) {
    if let Some(value) = slot.encode_slot() {
        object.insert(key.to_string(), value);
    }
}

/// Insert an unknown key into a record's passthrough map unless `schema`
/// declares it.
#[doc(hidden)]
pub fn set_passthrough(
    schema: &RecordSchema,
    properties: &mut AdditionalProperties,
    key: String,
    value: Value,
) -> Result<Option<Value>, PropertyError> {
    if schema.declares(&key) {
        return Err(PropertyError::DeclaredField {
            record: schema.name,
            key,
        });
    }
    Ok(properties.insert(key, value))
}

#[doc(hidden)]
pub fn remove_passthrough(
    properties: &mut AdditionalProperties,
    key: &str,
) -> Result<Value, PropertyError> {
    properties
        .remove(key)
        .ok_or_else(|| PropertyError::NotFound(key.to_string()))
}

/// Decode a record embedded as a field value.
#[doc(hidden)]
pub fn decode_nested<R: Record>(value: Value) -> Result<R, CodecError> {
    R::decode_owned(expect_object(value)?)
}

#[doc(hidden)]
pub fn expect_object(value: Value) -> Result<JsonObject, CodecError> {
    match value {
        Value::Object(object) => Ok(object),
        other => Err(CodecError::malformed("object", &other)),
    }
}

#[doc(hidden)]
pub fn unresolved_union(schema: &UnionSchema) -> CodecError {
    CodecError::UnresolvedUnion {
        path: String::new(),
        union: schema.name,
        expected: schema.expected(),
    }
}

/// Serialize any wire value through its codec.
#[doc(hidden)]
pub fn serialize_wire<T: WireValue, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    value.encode_wire().serialize(serializer)
}

/// Deserialize any wire value through its codec, surfacing codec errors as
/// the deserializer's custom error.
#[doc(hidden)]
pub fn deserialize_wire<'de, T: WireValue, D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    T::decode_wire(raw).map_err(serde::de::Error::custom)
}
