//! # acapy-cli — Record Inspector
//!
//! A small clap-based tool over the `acapy-models` registry.
//!
//! ## Subcommands
//!
//! - `list`: registered entities (optionally one API area) and unions
//! - `schema`: declared fields of an entity, or members of a union
//! - `decode`: decode a document, report unknown keys, print it re-encoded
//! - `roundtrip`: fail unless `encode(decode(doc))` equals `doc`
//!
//! Documents are read from a file, or from stdin when no file (or `-`) is
//! given. Log output goes to stderr and is controlled by `RUST_LOG`.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handlers; handlers write to any
//!   `io::Write` so they can be tested without a terminal.
//! - No codec logic here. Everything goes through `acapy_models::registry`.

pub mod decode;
pub mod input;
pub mod list;
pub mod schema;
