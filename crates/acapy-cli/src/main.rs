//! # acapy CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::io;

use clap::Parser;

/// ACA-Py admin API record inspector.
///
/// Lists the registered entities, prints their schemas, and pushes JSON
/// documents through an entity's codec.
#[derive(Parser, Debug)]
#[command(name = "acapy", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List registered entities and unions.
    List(acapy_cli::list::ListArgs),
    /// Print the schema of an entity or union.
    Schema(acapy_cli::schema::SchemaArgs),
    /// Decode a document and print it re-encoded.
    Decode(acapy_cli::decode::DecodeArgs),
    /// Check that a document survives decode and encode unchanged.
    Roundtrip(acapy_cli::decode::RoundtripArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::List(args) => acapy_cli::list::run(&args, &mut stdout),
        Commands::Schema(args) => acapy_cli::schema::run(&args, &mut stdout),
        Commands::Decode(args) => acapy_cli::decode::run_decode(&args, &mut stdout),
        Commands::Roundtrip(args) => acapy_cli::decode::run_roundtrip(&args, &mut stdout),
    }
}
