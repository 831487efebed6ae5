//! # Schema Subcommand
//!
//! Prints the static schema artifact of a record or tagged union as JSON.

use std::io::Write;

use acapy_models::registry;
use clap::Args;

/// Arguments for the schema subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Entity or union name, e.g. `V20CredSendRequest`.
    pub name: String,
}

/// Write the schema of the named entity or union.
pub fn run(args: &SchemaArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let described = if let Some(entity) = registry::entity(&args.name) {
        entity.schema.to_json()
    } else if let Some(union) = registry::union(&args.name) {
        union.to_json()
    } else {
        anyhow::bail!("unknown entity or union '{}' (see `acapy list`)", args.name);
    };
    serde_json::to_writer_pretty(&mut *out, &described)?;
    writeln!(out)?;
    Ok(())
}
