//! # Wire Values
//!
//! [`WireValue`] is the per-type half of the codec: how one field value is
//! read out of, and written back into, a `serde_json::Value`. Records,
//! tagged unions and string enumerations get their implementations from the
//! declarative macros; this module covers scalars, opaque JSON and the
//! container types.
//!
//! Decoders report failures relative to the value they were handed. The
//! caller (a record field, a list or a map) prefixes the location, see
//! [`CodecError::at`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::CodecError;
use crate::JsonObject;

/// Static description of a wire value type, part of the schema artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WireKind {
    /// JSON string.
    String,
    /// JSON boolean.
    Boolean,
    /// JSON integer.
    Integer,
    /// Any JSON value, carried opaquely.
    Json,
    /// Any JSON object, carried opaquely.
    Object,
    /// Ordered list of elements.
    List {
        /// Element type.
        items: Box<WireKind>,
    },
    /// String-keyed map.
    Map {
        /// Value type.
        values: Box<WireKind>,
    },
    /// Nested record.
    Record {
        /// Record type name.
        name: &'static str,
    },
    /// Tagged union of record types.
    Union {
        /// Union type name.
        name: &'static str,
    },
    /// String enumeration.
    Enum {
        /// Enumeration type name.
        name: &'static str,
    },
}

impl fmt::Display for WireKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Boolean => f.write_str("boolean"),
            Self::Integer => f.write_str("integer"),
            Self::Json => f.write_str("json"),
            Self::Object => f.write_str("object"),
            Self::List { items } => write!(f, "list<{items}>"),
            Self::Map { values } => write!(f, "map<{values}>"),
            Self::Record { name } | Self::Union { name } | Self::Enum { name } => {
                f.write_str(name)
            }
        }
    }
}

/// A type that can appear as a field value in a record.
pub trait WireValue: Sized {
    /// Describe this type for the schema artifact.
    fn kind() -> WireKind;

    /// Convert a raw JSON value into this type.
    fn decode_wire(value: Value) -> Result<Self, CodecError>;

    /// Convert this value back into raw JSON.
    fn encode_wire(&self) -> Value;
}

impl WireValue for String {
    fn kind() -> WireKind {
        WireKind::String
    }

    fn decode_wire(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(CodecError::malformed("string", &other)),
        }
    }

    fn encode_wire(&self) -> Value {
        Value::String(self.clone())
    }
}

impl WireValue for bool {
    fn kind() -> WireKind {
        WireKind::Boolean
    }

    fn decode_wire(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(CodecError::malformed("boolean", &other)),
        }
    }

    fn encode_wire(&self) -> Value {
        Value::Bool(*self)
    }
}

impl WireValue for i64 {
    fn kind() -> WireKind {
        WireKind::Integer
    }

    fn decode_wire(value: Value) -> Result<Self, CodecError> {
        match value.as_i64() {
            Some(n) => Ok(n),
            None => Err(CodecError::malformed("integer", &value)),
        }
    }

    fn encode_wire(&self) -> Value {
        Value::from(*self)
    }
}

impl WireValue for u64 {
    fn kind() -> WireKind {
        WireKind::Integer
    }

    fn decode_wire(value: Value) -> Result<Self, CodecError> {
        match value.as_u64() {
            Some(n) => Ok(n),
            None => Err(CodecError::malformed("non-negative integer", &value)),
        }
    }

    fn encode_wire(&self) -> Value {
        Value::from(*self)
    }
}

/// Opaque JSON: protocol messages, credentials and other payloads this
/// layer does not interpret. Any value is accepted, including `null`.
impl WireValue for Value {
    fn kind() -> WireKind {
        WireKind::Json
    }

    fn decode_wire(value: Value) -> Result<Self, CodecError> {
        Ok(value)
    }

    fn encode_wire(&self) -> Value {
        self.clone()
    }
}

impl WireValue for JsonObject {
    fn kind() -> WireKind {
        WireKind::Object
    }

    fn decode_wire(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::Object(object) => Ok(object),
            other => Err(CodecError::malformed("object", &other)),
        }
    }

    fn encode_wire(&self) -> Value {
        Value::Object(self.clone())
    }
}

impl<T: WireValue> WireValue for Vec<T> {
    fn kind() -> WireKind {
        WireKind::List {
            items: Box::new(T::kind()),
        }
    }

    fn decode_wire(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| T::decode_wire(item).map_err(|e| e.at_index(i)))
                .collect(),
            other => Err(CodecError::malformed("array", &other)),
        }
    }

    fn encode_wire(&self) -> Value {
        Value::Array(self.iter().map(WireValue::encode_wire).collect())
    }
}

impl<T: WireValue> WireValue for BTreeMap<String, T> {
    fn kind() -> WireKind {
        WireKind::Map {
            values: Box::new(T::kind()),
        }
    }

    fn decode_wire(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::Object(object) => object
                .into_iter()
                .map(|(key, item)| match T::decode_wire(item) {
                    Ok(decoded) => Ok((key, decoded)),
                    Err(e) => Err(e.at(&key)),
                })
                .collect(),
            other => Err(CodecError::malformed("object", &other)),
        }
    }

    fn encode_wire(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, item)| (key.clone(), item.encode_wire()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_pass_through() {
        assert_eq!(String::decode_wire(json!("abc")).unwrap(), "abc");
        assert!(bool::decode_wire(json!(true)).unwrap());
        assert_eq!(i64::decode_wire(json!(-4)).unwrap(), -4);
        assert_eq!(u64::decode_wire(json!(1_640_995_199)).unwrap(), 1_640_995_199);
        assert_eq!("abc".to_string().encode_wire(), json!("abc"));
        assert_eq!(7i64.encode_wire(), json!(7));
    }

    #[test]
    fn scalar_type_mismatch_is_malformed() {
        let err = String::decode_wire(json!(12)).unwrap_err();
        assert!(matches!(
            err,
            CodecError::MalformedElement { ref expected, ref found, .. }
                if expected == "string" && found == "number"
        ));
    }

    #[test]
    fn scalar_null_is_unexpected_null() {
        assert!(matches!(
            bool::decode_wire(Value::Null),
            Err(CodecError::UnexpectedNull { .. })
        ));
    }

    #[test]
    fn integers_reject_floats_and_negatives_where_needed() {
        assert!(i64::decode_wire(json!(1.5)).is_err());
        assert!(u64::decode_wire(json!(-1)).is_err());
    }

    #[test]
    fn opaque_json_accepts_anything() {
        let payload = json!({"@context": ["x"], "n": [1, null, 2.5]});
        assert_eq!(Value::decode_wire(payload.clone()).unwrap(), payload);
        assert_eq!(Value::decode_wire(Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn list_preserves_order_and_reports_index() {
        let decoded = Vec::<String>::decode_wire(json!(["b", "a", "c"])).unwrap();
        assert_eq!(decoded, vec!["b", "a", "c"]);
        assert_eq!(decoded.encode_wire(), json!(["b", "a", "c"]));

        let err = Vec::<String>::decode_wire(json!(["ok", 3])).unwrap_err();
        assert_eq!(err.path(), Some("/1"));
    }

    #[test]
    fn empty_list_stays_empty() {
        let decoded = Vec::<i64>::decode_wire(json!([])).unwrap();
        assert!(decoded.is_empty());
        assert_eq!(decoded.encode_wire(), json!([]));
    }

    #[test]
    fn map_reports_offending_key() {
        let err = BTreeMap::<String, String>::decode_wire(json!({"a": "x", "b/c": false}))
            .unwrap_err();
        assert_eq!(err.path(), Some("/b~1c"));
    }

    #[test]
    fn nested_containers_compose() {
        let raw = json!([{"cred_def_id": "abc"}, {}]);
        let decoded = Vec::<BTreeMap<String, String>>::decode_wire(raw.clone()).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded.encode_wire(), raw);
        assert_eq!(
            Vec::<BTreeMap<String, String>>::kind().to_string(),
            "list<map<string>>"
        );
    }

    #[test]
    fn kind_serializes_with_tag() {
        let kind = Vec::<String>::kind();
        assert_eq!(
            serde_json::to_value(&kind).unwrap(),
            json!({"kind": "list", "items": {"kind": "string"}})
        );
    }
}
