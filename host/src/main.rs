// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sigil_kernel::digest::Digest;
use sigil_host::{digest_from_hex, run_commit};

#[derive(Parser, Debug)]
#[command(author, version, about = "Commit a payload and print the execution receipt")]
struct Args {
    /// Path to the journal payload. Reads stdin when omitted and --hex is
    /// not given.
    input: Option<PathBuf>,

    /// Journal payload as a hex string (instead of a file).
    #[arg(long, conflicts_with = "input")]
    hex: Option<String>,

    /// Assumptions digest as 64 hex chars. Defaults to the all-zero digest.
    #[arg(long)]
    assumptions: Option<String>,

    /// Guest exit code to halt with.
    #[arg(long, default_value_t = 0)]
    exit_code: u8,
}

fn init_telemetry() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "sigil_host=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_payload(args: &Args) -> Result<Vec<u8>> {
    if let Some(hex_str) = &args.hex {
        return hex::decode(hex_str).context("Invalid --hex payload");
    }
    if let Some(path) = &args.input {
        return fs::read(path).context("Failed to read payload file");
    }
    let mut buf = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buf)
        .context("Failed to read payload from stdin")?;
    Ok(buf)
}

fn main() -> Result<()> {
    init_telemetry();
    let args = Args::parse();

    let journal = read_payload(&args)?;
    let assumptions = match &args.assumptions {
        Some(s) => digest_from_hex(s).context("Invalid assumptions digest")?,
        None => Digest::ZERO,
    };

    let receipt = run_commit(&journal, &assumptions, args.exit_code)
        .context("Commitment failed")?;

    println!("{}", serde_json::to_string_pretty(&receipt)?);
    Ok(())
}
