//! Reading JSON documents from a file or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

/// Read and parse one JSON document. `None` or `-` reads stdin.
pub fn read_document(path: Option<&Path>) -> anyhow::Result<Value> {
    let text = match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    tracing::debug!(bytes = text.len(), "read input document");
    parse_document(&text)
}

/// Parse JSON text into a value.
pub fn parse_document(text: &str) -> anyhow::Result<Value> {
    serde_json::from_str(text).context("input is not valid JSON")
}
