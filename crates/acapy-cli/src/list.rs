//! # List Subcommand

use std::io::Write;

use acapy_models::registry::{ENTITIES, UNIONS};
use clap::Args;
use serde_json::json;

/// Arguments for the list subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list entities of this API area (e.g. `issue_credential`).
    #[arg(long)]
    pub group: Option<String>,

    /// Emit JSON instead of one name per line.
    #[arg(long)]
    pub json: bool,
}

/// Write the registered entities, then the unions.
pub fn run(args: &ListArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let entities: Vec<_> = ENTITIES
        .iter()
        .filter(|e| args.group.as_deref().map_or(true, |g| e.group == g))
        .collect();
    if entities.is_empty() {
        anyhow::bail!(
            "no entities in group '{}'",
            args.group.as_deref().unwrap_or_default()
        );
    }

    if args.json {
        let listing = json!({
            "entities": entities.iter().map(|e| json!({
                "name": e.name(),
                "group": e.group,
                "fields": e.schema.fields.len(),
            })).collect::<Vec<_>>(),
            "unions": UNIONS.iter().map(|u| u.name).collect::<Vec<_>>(),
        });
        serde_json::to_writer_pretty(&mut *out, &listing)?;
        writeln!(out)?;
        return Ok(());
    }

    for entity in &entities {
        writeln!(out, "{:<18} {}", entity.group, entity.name())?;
    }
    if args.group.is_none() {
        for union in UNIONS {
            writeln!(out, "{:<18} {}", "union", union.name)?;
        }
    }
    Ok(())
}
