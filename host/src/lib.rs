// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Host-side execution of the commitment kernel.
//!
//! Implements the guest capability surface in software: blocks compress via
//! the kernel's reference compressor, journal writes are captured, and the
//! terminal halt is recorded so the run can be packaged as a [`Receipt`].

use serde::{Deserialize, Serialize};
use sigil_kernel::arena::WordArena;
use sigil_kernel::commit;
use sigil_kernel::config::{JOURNAL_CHANNEL, OUTPUT_TAG};
use sigil_kernel::digest::Digest;
use sigil_kernel::error::CommitError;
use sigil_kernel::platform::Platform;
use sigil_kernel::sha::compress;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Kernel error: {0:?}")]
    Kernel(CommitError),
    #[error("Invalid digest encoding: {0}")]
    BadDigest(String),
    #[error("Guest did not halt")]
    NoHalt,
}

impl From<CommitError> for HostError {
    fn from(e: CommitError) -> Self {
        HostError::Kernel(e)
    }
}

/// Software platform: the host side of a simulated single-shot execution.
pub struct SimPlatform {
    journal: Vec<u8>,
    halted: Option<(u8, Digest)>,
    blocks: u64,
}

impl SimPlatform {
    pub fn new() -> Self {
        Self {
            journal: Vec::new(),
            halted: None,
            blocks: 0,
        }
    }

    /// Bytes the guest wrote to the journal channel.
    pub fn journal(&self) -> &[u8] {
        &self.journal
    }

    /// The recorded terminal call, if the guest halted.
    pub fn halted(&self) -> Option<(u8, Digest)> {
        self.halted
    }

    /// Total 64-byte blocks compressed during the run.
    pub fn blocks_compressed(&self) -> u64 {
        self.blocks
    }
}

impl Default for SimPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for SimPlatform {
    fn compress_blocks(&mut self, state: &[u32; 8], words: &[u32]) -> [u32; 8] {
        self.blocks += (words.len() / 16) as u64;
        compress::compress_blocks(state, words)
    }

    fn write_output(&mut self, channel: u32, bytes: &[u8]) {
        tracing::debug!(channel, len = bytes.len(), "guest write");
        if channel == JOURNAL_CHANNEL {
            self.journal.extend_from_slice(bytes);
        }
    }

    fn halt(&mut self, exit_code: u8, digest: &Digest) {
        tracing::info!(
            exit_code,
            output_digest = %hex::encode(digest.to_be_bytes()),
            "guest halted"
        );
        self.halted = Some((exit_code, *digest));
    }
}

/// Receipt of one committed execution. Self-contained: a verifier can
/// recompute every digest from the journal bytes and the assumptions digest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Receipt {
    pub exit_code: u8,
    /// Journal bytes, hex encoded.
    pub journal: String,
    /// SHA-256 of the journal, standard hex presentation.
    pub journal_digest: String,
    /// The externally supplied assumptions digest, hex encoded.
    pub assumptions_digest: String,
    /// Domain-separation tag the output digest was built under.
    pub tag: String,
    /// The tagged-struct commitment handed to halt.
    pub output_digest: String,
}

pub fn digest_to_hex(digest: &Digest) -> String {
    hex::encode(digest.to_be_bytes())
}

pub fn digest_from_hex(s: &str) -> Result<Digest, HostError> {
    let bytes = hex::decode(s).map_err(|e| HostError::BadDigest(e.to_string()))?;
    let bytes: [u8; 32] = bytes
        .try_into()
        .map_err(|_| HostError::BadDigest(format!("expected 32 bytes, got {}", s.len() / 2)))?;
    Ok(Digest::from_be_bytes(&bytes))
}

/// Runs the one-shot committer over `journal` and packages the result.
pub fn run_commit(
    journal: &[u8],
    assumptions: &Digest,
    exit_code: u8,
) -> Result<Receipt, HostError> {
    let mut arena = WordArena::new();
    let mut platform = SimPlatform::new();

    let commitment =
        commit::commit_and_halt(&mut arena, &mut platform, journal, assumptions, exit_code)?;

    let (halt_code, halt_digest) = platform.halted().ok_or(HostError::NoHalt)?;
    debug_assert_eq!(halt_digest, commitment.output_digest);

    Ok(Receipt {
        exit_code: halt_code,
        journal: hex::encode(platform.journal()),
        journal_digest: digest_to_hex(&commitment.journal_digest),
        assumptions_digest: digest_to_hex(assumptions),
        tag: OUTPUT_TAG.to_string(),
        output_digest: digest_to_hex(&commitment.output_digest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_commit_records_halt() {
        let receipt = run_commit(&[0, 1, 2, 3], &Digest::ZERO, 0).unwrap();
        assert_eq!(receipt.exit_code, 0);
        assert_eq!(receipt.journal, "00010203");
        assert_eq!(receipt.tag, OUTPUT_TAG);
    }

    #[test]
    fn test_digest_hex_round_trip() {
        let digest = Digest::from_words([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(digest_from_hex(&digest_to_hex(&digest)).unwrap(), digest);
    }

    #[test]
    fn test_bad_hex_rejected() {
        assert!(digest_from_hex("zz").is_err());
        assert!(digest_from_hex("0011").is_err());
    }
}
