//! # Error Types — Codec and Passthrough Failures
//!
//! Defines the error types raised while converting between JSON objects and
//! typed records. All errors use `thiserror` for derive-based `Display` and
//! `Error` implementations.
//!
//! ## Design
//!
//! - Decode is all-or-nothing: the first failure aborts the enclosing record
//!   and, transitively, every ancestor embedding it. No partial record is
//!   ever returned.
//! - Every failure carries a JSON Pointer (RFC 6901) to the offending
//!   location. Nested decoders raise errors relative to their own object and
//!   each enclosing field prepends its wire key (or list index / map key) on
//!   the way out, so the error kind survives the trip to the top level.

use serde_json::Value;
use thiserror::Error;

/// Error while decoding a JSON object into a typed record.
#[derive(Error, Debug)]
pub enum CodecError {
    /// A declared-required key is missing from the object at `path`.
    #[error("missing required field '{key}' at {}", display_path(.path))]
    MissingRequiredField {
        /// JSON Pointer to the object that lacks the key.
        path: String,
        /// Wire key of the missing field.
        key: &'static str,
    },

    /// A tagged-union value carries none of the member signatures.
    #[error(
        "value at {} matches no member of union {union} (expected one of: {})",
        display_path(.path),
        join_expected(.expected)
    )]
    UnresolvedUnion {
        /// JSON Pointer to the union field.
        path: String,
        /// Name of the union type.
        union: &'static str,
        /// Signature keys of each member, in priority order.
        expected: Vec<String>,
    },

    /// A field, list element, map value or enum value has the wrong shape.
    #[error("malformed element at {}: expected {expected}, found {found}", display_path(.path))]
    MalformedElement {
        /// JSON Pointer to the offending value.
        path: String,
        /// What the declared type requires.
        expected: String,
        /// What the input actually held.
        found: String,
    },

    /// A JSON `null` was supplied for a field that is not declared nullable.
    #[error("unexpected null at {}", display_path(.path))]
    UnexpectedNull {
        /// JSON Pointer to the null value.
        path: String,
    },

    /// A top-level decode was handed something other than a JSON object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject {
        /// JSON type of the rejected value.
        found: &'static str,
    },

    /// JSON text could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodecError {
    /// Build a shape mismatch for `found`, relative to the current value.
    ///
    /// A `null` where a concrete value is required is reported as
    /// [`CodecError::UnexpectedNull`] rather than a type mismatch.
    pub fn malformed(expected: impl Into<String>, found: &Value) -> Self {
        match found {
            Value::Null => Self::UnexpectedNull {
                path: String::new(),
            },
            other => Self::MalformedElement {
                path: String::new(),
                expected: expected.into(),
                found: json_type_name(other).to_string(),
            },
        }
    }

    /// Build the error for a string that is not one of an enumeration's
    /// accepted values.
    pub fn unknown_variant(values: &[&str], found: &str) -> Self {
        Self::MalformedElement {
            path: String::new(),
            expected: format!("one of: {}", values.join(", ")),
            found: format!("{found:?}"),
        }
    }

    /// Prefix this error's location with an object key.
    pub fn at(mut self, segment: &str) -> Self {
        if let Some(path) = self.path_mut() {
            let mut prefixed = String::with_capacity(path.len() + segment.len() + 1);
            prefixed.push('/');
            prefixed.push_str(&escape_pointer_token(segment));
            prefixed.push_str(path);
            *path = prefixed;
        }
        self
    }

    /// Prefix this error's location with a list index.
    pub fn at_index(self, index: usize) -> Self {
        self.at(&index.to_string())
    }

    /// JSON Pointer of the value (or, for a missing field, of the object)
    /// where decoding stopped. `None` for errors without a location.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredField { path, .. }
            | Self::UnresolvedUnion { path, .. }
            | Self::MalformedElement { path, .. }
            | Self::UnexpectedNull { path } => Some(path),
            Self::NotAnObject { .. } | Self::Json(_) => None,
        }
    }

    fn path_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::MissingRequiredField { path, .. }
            | Self::UnresolvedUnion { path, .. }
            | Self::MalformedElement { path, .. }
            | Self::UnexpectedNull { path } => Some(path),
            Self::NotAnObject { .. } | Self::Json(_) => None,
        }
    }
}

/// Error from the passthrough-map accessors of a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// No additional property with this key is held by the record.
    #[error("no additional property named '{0}'")]
    NotFound(String),

    /// The key is a declared field of the record and cannot live in the
    /// passthrough map.
    #[error("'{key}' is a declared field of {record}; assign it through the typed field")]
    DeclaredField {
        /// Record type name.
        record: &'static str,
        /// The rejected key.
        key: String,
    },
}

/// Name of a JSON value's type, as used in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Escape a single reference token per RFC 6901 (`~` → `~0`, `/` → `~1`).
fn escape_pointer_token(token: &str) -> std::borrow::Cow<'_, str> {
    if token.contains(['~', '/']) {
        token.replace('~', "~0").replace('/', "~1").into()
    } else {
        token.into()
    }
}

fn join_expected(expected: &[String]) -> String {
    expected.join(", ")
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "(root)"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_field_reports_root_location() {
        let err = CodecError::MissingRequiredField {
            path: String::new(),
            key: "connection_id",
        };
        assert_eq!(err.path(), Some(""));
        assert_eq!(
            err.to_string(),
            "missing required field 'connection_id' at (root)"
        );
    }

    #[test]
    fn at_prepends_segments_outermost_last() {
        let err = CodecError::malformed("string", &json!(7))
            .at("name")
            .at_index(2)
            .at("attributes");
        assert_eq!(err.path(), Some("/attributes/2/name"));
        assert_eq!(
            err.to_string(),
            "malformed element at /attributes/2/name: expected string, found number"
        );
    }

    #[test]
    fn at_escapes_pointer_tokens() {
        let err = CodecError::malformed("array", &json!("x")).at("request~attach");
        assert_eq!(err.path(), Some("/request~0attach"));

        let err = CodecError::malformed("array", &json!("x")).at("a/b");
        assert_eq!(err.path(), Some("/a~1b"));
    }

    #[test]
    fn malformed_null_is_unexpected_null() {
        let err = CodecError::malformed("string", &Value::Null).at("label");
        assert!(matches!(err, CodecError::UnexpectedNull { ref path } if path == "/label"));
    }

    #[test]
    fn unresolved_union_lists_expected_signatures() {
        let err = CodecError::UnresolvedUnion {
            path: String::new(),
            union: "V20CredFilter",
            expected: vec!["indy".to_string(), "ld_proof".to_string()],
        }
        .at("filter");
        assert_eq!(
            err.to_string(),
            "value at /filter matches no member of union V20CredFilter (expected one of: indy, ld_proof)"
        );
    }

    #[test]
    fn not_an_object_has_no_path() {
        let mut err = CodecError::NotAnObject { found: "array" };
        err = err.at("ignored");
        assert_eq!(err.path(), None);
    }

    #[test]
    fn json_type_names() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!(1)), "number");
        assert_eq!(json_type_name(&json!("s")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }
}
