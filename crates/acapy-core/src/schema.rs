//! # Schema Artifacts
//!
//! Static, compile-time descriptions of every record and tagged union. The
//! declarative macros emit one [`RecordSchema`] per record and one
//! [`UnionSchema`] per union. Nothing here is computed at runtime.
//!
//! A union's member list is ordered: when a value carries the signature
//! keys of more than one member, the first member in declaration order wins.
//! That order is part of the artifact and is reported by [`UnionSchema::to_json`].

use serde::Serialize;
use serde_json::{json, Value};

use crate::wire::WireKind;
use crate::JsonObject;

/// How a declared field may be populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Always present; decode fails without it.
    Required,
    /// May be absent; `null` is rejected.
    Optional,
    /// May be absent, `null`, or a value.
    Nullable,
}

/// One declared field of a record.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// In-memory field name.
    pub name: &'static str,
    /// JSON key on the wire.
    pub wire_key: &'static str,
    /// Required, optional or nullable.
    pub presence: Presence,
    /// Describes the declared value type.
    pub kind: fn() -> WireKind,
}

impl FieldSpec {
    /// JSON description of this field.
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "wire_key": self.wire_key,
            "presence": self.presence,
            "type": (self.kind)(),
        })
    }
}

/// Declared field set of a record type, in declaration order.
#[derive(Debug)]
pub struct RecordSchema {
    /// Record type name.
    pub name: &'static str,
    /// Declared fields: required fields first, then optional ones.
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    /// Look up a field by its wire key.
    pub fn field(&self, wire_key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.wire_key == wire_key)
    }

    /// Returns `true` if `wire_key` belongs to a declared field.
    pub fn declares(&self, wire_key: &str) -> bool {
        self.field(wire_key).is_some()
    }

    /// Wire keys of the required fields.
    pub fn required_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|f| f.presence == Presence::Required)
            .map(|f| f.wire_key)
    }

    /// JSON description of this record.
    pub fn to_json(&self) -> Value {
        json!({
            "record": self.name,
            "fields": self.fields.iter().map(FieldSpec::to_json).collect::<Vec<_>>(),
        })
    }
}

/// One member of a tagged union.
#[derive(Debug)]
pub struct UnionMember {
    /// Enum variant name.
    pub variant: &'static str,
    /// Schema of the member record.
    pub record: &'static RecordSchema,
    /// Keys that must all be present for a value to select this member.
    pub signature: &'static [&'static str],
}

impl UnionMember {
    /// Returns `true` if every signature key is present in `object`.
    pub fn matches(&self, object: &JsonObject) -> bool {
        self.signature.iter().all(|key| object.contains_key(*key))
    }
}

/// Members of a tagged union, in priority order.
#[derive(Debug)]
pub struct UnionSchema {
    /// Union type name.
    pub name: &'static str,
    /// Members, highest priority first.
    pub members: &'static [UnionMember],
}

impl UnionSchema {
    /// Select the member whose signature matches `object`, first match in
    /// priority order.
    pub fn resolve(&self, object: &JsonObject) -> Option<&UnionMember> {
        let mut candidates = self.members.iter().filter(|m| m.matches(object));
        let selected = candidates.next()?;
        let shadowed: Vec<&str> = candidates.map(|m| m.variant).collect();
        if !shadowed.is_empty() {
            tracing::debug!(
                union = self.name,
                selected = selected.variant,
                ?shadowed,
                "union value matches several members; using declared priority"
            );
        }
        Some(selected)
    }

    /// Human-readable signatures of every member, in priority order.
    pub fn expected(&self) -> Vec<String> {
        self.members
            .iter()
            .map(|m| m.signature.join("+"))
            .collect()
    }

    /// JSON description of this union.
    pub fn to_json(&self) -> Value {
        json!({
            "union": self.name,
            "members": self.members.iter().map(|m| json!({
                "variant": m.variant,
                "record": m.record.name,
                "signature": m.signature,
            })).collect::<Vec<_>>(),
        })
    }
}
