//! # Decode and Roundtrip Subcommands
//!
//! Both push a JSON document through an entity's codec. `decode` prints the
//! re-encoded document together with the keys the entity does not declare;
//! `roundtrip` only checks that the document came back unchanged.

use std::io::Write;
use std::path::PathBuf;

use acapy_models::registry::{self, Decoded, Entity};
use anyhow::Context;
use clap::Args;
use serde_json::{json, Value};

use crate::input::read_document;

/// Arguments for the decode subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Entity name, e.g. `ConnRecord`.
    pub entity: String,

    /// Input file; stdin when omitted or `-`.
    pub file: Option<PathBuf>,

    /// Print only the re-encoded document, without the report wrapper.
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the roundtrip subcommand.
#[derive(Args, Debug)]
pub struct RoundtripArgs {
    /// Entity name, e.g. `V20CredSendRequest`.
    pub entity: String,

    /// Input file; stdin when omitted or `-`.
    pub file: Option<PathBuf>,
}

fn lookup(name: &str) -> anyhow::Result<&'static Entity> {
    registry::entity(name)
        .with_context(|| format!("unknown entity '{name}' (see `acapy list`)"))
}

/// Decode `document` as `entity`, attaching the entity name to failures.
pub fn decode_document(entity: &Entity, document: Value) -> anyhow::Result<Decoded> {
    entity
        .decode(document)
        .with_context(|| format!("document is not a valid {}", entity.name()))
}

/// Top-level keys whose values differ between `input` and `output`.
pub fn changed_keys(input: &Value, output: &Value) -> Vec<String> {
    match (input, output) {
        (Value::Object(a), Value::Object(b)) => {
            let mut keys: Vec<String> = a
                .iter()
                .filter(|(k, v)| b.get(*k) != Some(*v))
                .map(|(k, _)| k.clone())
                .collect();
            keys.extend(b.keys().filter(|k| !a.contains_key(*k)).cloned());
            keys
        }
        _ => Vec::new(),
    }
}

/// Handle `acapy decode`.
pub fn run_decode(args: &DecodeArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let entity = lookup(&args.entity)?;
    let document = read_document(args.file.as_deref())?;
    let decoded = decode_document(entity, document)?;

    if !decoded.additional_keys.is_empty() {
        tracing::info!(
            entity = entity.name(),
            keys = ?decoded.additional_keys,
            "document carries keys outside the schema"
        );
    }

    let report = if args.raw {
        decoded.encoded
    } else {
        json!({
            "entity": entity.name(),
            "additional_keys": decoded.additional_keys,
            "encoded": decoded.encoded,
        })
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Handle `acapy roundtrip`. Errors when the document does not survive.
pub fn run_roundtrip(args: &RoundtripArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let entity = lookup(&args.entity)?;
    let document = read_document(args.file.as_deref())?;
    let decoded = decode_document(entity, document.clone())?;

    if !decoded.round_trips(&document) {
        let changed = changed_keys(&document, &decoded.encoded);
        anyhow::bail!(
            "{} round trip changed the document (keys: {})",
            entity.name(),
            changed.join(", ")
        );
    }
    writeln!(
        out,
        "ok: {} ({} unknown key(s) preserved)",
        entity.name(),
        decoded.additional_keys.len()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_reports_unknown_keys() {
        let entity = lookup("V20CredAttrSpec").unwrap();
        let decoded = decode_document(
            entity,
            json!({"name": "age", "value": "30", "x-source": "registrar"}),
        )
        .unwrap();
        assert_eq!(decoded.additional_keys, vec!["x-source"]);
    }

    #[test]
    fn decode_failure_names_entity_and_cause() {
        let entity = lookup("V20CredSendRequest").unwrap();
        let err = decode_document(entity, json!({"filter": {"indy": {}}})).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("not a valid V20CredSendRequest"));
        assert!(chain.contains("missing required field 'connection_id'"));
    }

    #[test]
    fn unknown_entity() {
        assert!(lookup("V10CredentialExchange").is_err());
    }

    #[test]
    fn changed_keys_lists_differences() {
        let a = json!({"a": 1, "b": 2});
        let b = json!({"a": 1, "b": 3, "c": 4});
        assert_eq!(changed_keys(&a, &b), vec!["b", "c"]);
        assert!(changed_keys(&a, &a).is_empty());
    }

    #[test]
    fn decode_and_roundtrip_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conn-record.json");
        std::fs::write(
            &path,
            r#"{"connection_id": "c-1", "state": "active", "x-extra": [1, 2]}"#,
        )
        .unwrap();

        let mut out = Vec::new();
        run_decode(
            &DecodeArgs {
                entity: "ConnRecord".into(),
                file: Some(path.clone()),
                raw: false,
            },
            &mut out,
        )
        .unwrap();
        let report: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(report["entity"], "ConnRecord");
        assert_eq!(report["additional_keys"], json!(["x-extra"]));
        assert_eq!(report["encoded"]["x-extra"], json!([1, 2]));

        let mut out = Vec::new();
        run_roundtrip(
            &RoundtripArgs {
                entity: "ConnRecord".into(),
                file: Some(path.clone()),
            },
            &mut out,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ok: ConnRecord (1 unknown key(s) preserved)\n"
        );
    }
}
