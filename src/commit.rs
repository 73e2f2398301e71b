// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Guest-facing commitment entry points.
//!
//! The one-shot path digests the whole journal at once; the streaming
//! [`Committer`] feeds output bytes to the journal channel and an
//! incremental session as the guest produces them. Both end in a terminal
//! `halt` that hands the commitment digest to the host; nothing runs after
//! exit on a real target.

use crate::arena::WordArena;
use crate::config::{JOURNAL_CHANNEL, OUTPUT_TAG};
use crate::digest::Digest;
use crate::error::Result;
use crate::platform::Platform;
use crate::sha::engine::{self, Sha256Session};
use crate::tagged::tagged_struct;

/// The digests produced by one committed execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commitment {
    /// SHA-256 of the journal bytes.
    pub journal_digest: Digest,
    /// Tagged-struct combination of the journal and assumptions digests.
    pub output_digest: Digest,
}

/// One-shot commitment: digests `journal`, writes it verbatim to the journal
/// channel, folds in `assumptions` under the output tag, and halts with the
/// resulting digest.
pub fn commit_and_halt<P: Platform>(
    arena: &mut WordArena,
    platform: &mut P,
    journal: &[u8],
    assumptions: &Digest,
    exit_code: u8,
) -> Result<Commitment> {
    let journal_digest = engine::digest(arena, platform, journal)?;
    platform.write_output(JOURNAL_CHANNEL, journal);

    let output_digest = tagged_struct(
        arena,
        platform,
        OUTPUT_TAG,
        &[journal_digest, *assumptions],
    )?;
    platform.halt(exit_code, &output_digest);
    Ok(Commitment {
        journal_digest,
        output_digest,
    })
}

/// Streaming committer. Output bytes flow to the host journal channel and
/// into an incremental hash session as they are committed; one of the exit
/// operations consumes the committer and halts.
pub struct Committer {
    session: Sha256Session,
}

impl Committer {
    pub fn new() -> Self {
        Self {
            session: Sha256Session::new(),
        }
    }

    /// Appends output bytes: written verbatim to the journal channel and
    /// absorbed into the running hash.
    pub fn commit<P: Platform>(&mut self, platform: &mut P, bytes: &[u8]) {
        self.session.update(bytes);
        platform.write_output(JOURNAL_CHANNEL, bytes);
    }

    /// Finalizes the journal digest, folds in `assumptions` under the output
    /// tag, and halts with the combined digest.
    pub fn exit<P: Platform>(
        self,
        arena: &mut WordArena,
        platform: &mut P,
        assumptions: &Digest,
        exit_code: u8,
    ) -> Result<Commitment> {
        let journal_digest = self.session.finalize(arena, platform)?;
        let output_digest = tagged_struct(
            arena,
            platform,
            OUTPUT_TAG,
            &[journal_digest, *assumptions],
        )?;
        platform.halt(exit_code, &output_digest);
        Ok(Commitment {
            journal_digest,
            output_digest,
        })
    }

    /// Simple commitment mode: halts with the raw finalized journal digest,
    /// no tagged-struct combination. Used when no assumptions digest applies.
    pub fn exit_raw<P: Platform>(
        self,
        arena: &mut WordArena,
        platform: &mut P,
        exit_code: u8,
    ) -> Result<Digest> {
        let digest = self.session.finalize(arena, platform)?;
        platform.halt(exit_code, &digest);
        Ok(digest)
    }
}

impl Default for Committer {
    fn default() -> Self {
        Self::new()
    }
}
