use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use sigil_kernel::arena::WordArena;
use sigil_kernel::digest::Digest;
use sigil_kernel::platform::Platform;
use sigil_kernel::sha::{compress, engine};
use sigil_kernel::tagged::tagged_struct;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the receipt JSON produced by sigil-host.
    receipt: PathBuf,
}

// Field layout matches sigil-host's Receipt; the verifier stays decoupled
// from the host crate the same way an external auditor would be.
#[derive(Serialize, Deserialize, Debug)]
struct Receipt {
    pub exit_code: u8,
    pub journal: String,
    pub journal_digest: String,
    pub assumptions_digest: String,
    pub tag: String,
    pub output_digest: String,
}

#[derive(Serialize, Debug)]
struct Verdict {
    pub valid: bool,
    pub journal_digest_ok: bool,
    pub output_digest_ok: bool,
    pub recomputed_output_digest: String,
}

/// Pure recomputation host: reference compressor, no output, no halt state.
struct VerifyPlatform;

impl Platform for VerifyPlatform {
    fn compress_blocks(&mut self, state: &[u32; 8], words: &[u32]) -> [u32; 8] {
        compress::compress_blocks(state, words)
    }

    fn write_output(&mut self, _channel: u32, _bytes: &[u8]) {}

    fn halt(&mut self, _exit_code: u8, _digest: &Digest) {}
}

fn parse_digest(s: &str, what: &str) -> Result<Digest> {
    let bytes = hex::decode(s).with_context(|| format!("Invalid hex in {}", what))?;
    let bytes: [u8; 32] = bytes
        .try_into()
        .map_err(|_| anyhow::anyhow!("{} must be 32 bytes", what))?;
    Ok(Digest::from_be_bytes(&bytes))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let receipt: Receipt = serde_json::from_slice(
        &fs::read(&args.receipt).context("Failed to read receipt file")?,
    )
    .context("Failed to parse receipt JSON")?;

    let journal = hex::decode(&receipt.journal).context("Invalid hex in journal")?;
    let claimed_journal_digest = parse_digest(&receipt.journal_digest, "journal_digest")?;
    let assumptions = parse_digest(&receipt.assumptions_digest, "assumptions_digest")?;
    let claimed_output_digest = parse_digest(&receipt.output_digest, "output_digest")?;

    let mut arena = WordArena::new();
    let mut platform = VerifyPlatform;

    let journal_digest = engine::digest(&mut arena, &mut platform, &journal)
        .map_err(|e| anyhow::anyhow!("Journal hashing failed: {:?}", e))?;
    let output_digest = tagged_struct(
        &mut arena,
        &mut platform,
        &receipt.tag,
        &[journal_digest, assumptions],
    )
    .map_err(|e| anyhow::anyhow!("Tagged-struct recomputation failed: {:?}", e))?;

    let verdict = Verdict {
        journal_digest_ok: journal_digest == claimed_journal_digest,
        output_digest_ok: output_digest == claimed_output_digest,
        valid: journal_digest == claimed_journal_digest
            && output_digest == claimed_output_digest,
        recomputed_output_digest: hex::encode(output_digest.to_be_bytes()),
    };

    println!("{}", serde_json::to_string_pretty(&verdict)?);
    if !verdict.valid {
        std::process::exit(1);
    }
    Ok(())
}
