// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Digest orchestration: one-shot and incremental hashing over the injected
//! block compressor.

use alloc::vec::Vec;

use crate::arena::WordArena;
use crate::config::{BLOCK_WORDS, SHA256_INIT};
use crate::digest::Digest;
use crate::error::Result;
use crate::platform::Platform;
use crate::sha::pad;

/// One-shot digest from the standard initial state.
pub fn digest<P: Platform>(
    arena: &mut WordArena,
    platform: &mut P,
    bytes: &[u8],
) -> Result<Digest> {
    digest_with_state(arena, platform, &SHA256_INIT, bytes)
}

/// One-shot digest from a caller-supplied running state.
pub fn digest_with_state<P: Platform>(
    arena: &mut WordArena,
    platform: &mut P,
    state: &[u32; 8],
    bytes: &[u8],
) -> Result<Digest> {
    let handle = pad::pad(arena, bytes)?;
    let words = arena.words(handle);
    debug_assert_eq!(words.len() % BLOCK_WORDS, 0);
    Ok(Digest::from_words(platform.compress_blocks(state, words)))
}

/// Incremental hashing session.
///
/// Updates append to a pending buffer; the result is the digest of the
/// concatenation of every update, however the input was split. `finalize`
/// consumes the session, so a finished session cannot be reused.
pub struct Sha256Session {
    state: [u32; 8],
    pending: Vec<u8>,
}

impl Sha256Session {
    pub fn new() -> Self {
        Self {
            state: SHA256_INIT,
            pending: Vec::new(),
        }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        self.pending.extend_from_slice(bytes);
    }

    /// Bytes accumulated so far.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pads and compresses the accumulated bytes, consuming the session.
    pub fn finalize<P: Platform>(
        self,
        arena: &mut WordArena,
        platform: &mut P,
    ) -> Result<Digest> {
        digest_with_state(arena, platform, &self.state, &self.pending)
    }
}

impl Default for Sha256Session {
    fn default() -> Self {
        Self::new()
    }
}
