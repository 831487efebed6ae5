//! # acapy-core — Codec Runtime for Typed Admin API Records
//!
//! This crate is the single reusable mechanism behind every entity of the
//! ACA-Py admin API model. An entity is a typed record: a fixed set of
//! declared fields plus an open-ended bag for keys the schema does not
//! know. Records decode from and encode to plain JSON objects, and
//! `encode(decode(m))` reproduces `m` for every schema-valid `m`.
//!
//! ## Key Design Principles
//!
//! 1. **Three field states, two types.** Required fields are plain `T`.
//!    Optional fields are `Option<T>` (absent or value) or [`Field<T>`]
//!    (absent, explicit null, or value). "Not sent" and "sent as null" are
//!    never the same value.
//!
//! 2. **Passthrough by construction.** Decode removes each declared key from
//!    a private copy of the input and keeps whatever remains in
//!    [`AdditionalProperties`]. Declared and unknown keys cannot overlap.
//!
//! 3. **One mechanism, declared per entity.** [`record!`], [`union_field!`]
//!    and [`wire_enum!`] generate the codec and a static schema artifact
//!    ([`RecordSchema`], [`UnionSchema`]) from a field list. No entity
//!    hand-writes its own encode/decode.
//!
//! 4. **Located, all-or-nothing errors.** A decode either returns a complete
//!    record or a [`CodecError`] whose JSON Pointer names the failing field,
//!    list index or map key.
//!
//! ## Crate Policy
//!
//! - No I/O, no shared state, no internal synchronization. Decode and encode
//!   are pure CPU transformations.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests, except `Index` on
//!   [`AdditionalProperties`], which panics like `HashMap`'s.
//! - JSON is the only wire format.

pub mod error;
pub mod field;
pub mod macros;
pub mod properties;
pub mod record;
pub mod schema;
pub mod wire;

/// A JSON object: string keys to raw JSON values, insertion-ordered.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

// Re-export primary types for ergonomic imports.
pub use error::{json_type_name, CodecError, PropertyError};
pub use field::Field;
pub use properties::AdditionalProperties;
pub use record::{OptionalSlot, Record, TaggedUnion};
pub use schema::{FieldSpec, Presence, RecordSchema, UnionMember, UnionSchema};
pub use wire::{WireKind, WireValue};

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
    pub use tracing;
}
