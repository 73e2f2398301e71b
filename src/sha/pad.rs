//! SHA-256 message padding.
//!
//! Builds a block-aligned word buffer in arena scratch following the
//! Merkle-Damgard padding rule: message bytes, a 0x80 terminator, zeros, and
//! the message bit length in the final word. Message bytes pack big-endian
//! into words, the order the compression schedule consumes them in, so the
//! buffer feeds straight into the block compressor.

use crate::arena::{Handle, WordArena};
use crate::config::BLOCK_WORDS;
use crate::error::{CommitError, Result};

/// Message bit length for a `len`-byte payload.
///
/// Only the low word of the 64-bit length field is populated, so payloads
/// whose bit count does not fit in 32 bits are rejected rather than
/// silently truncated.
pub fn message_bits(len: usize) -> Result<u32> {
    let bits = (len as u64).checked_mul(8).ok_or(CommitError::SizeOverflow)?;
    u32::try_from(bits).map_err(|_| CommitError::PayloadTooLarge)
}

/// Words needed to pad a `len`-byte message: one terminator byte, rounded up
/// to whole words, two trailing words for the bit length, rounded up to the
/// 16-word block. All arithmetic is checked.
pub fn padded_words(len: usize) -> Result<usize> {
    let with_term = len.checked_add(1).ok_or(CommitError::SizeOverflow)?;
    let words = with_term.checked_add(3).ok_or(CommitError::SizeOverflow)? / 4;
    let with_len = words.checked_add(2).ok_or(CommitError::SizeOverflow)?;
    let blocks = with_len
        .checked_add(BLOCK_WORDS - 1)
        .ok_or(CommitError::SizeOverflow)?
        / BLOCK_WORDS;
    blocks
        .checked_mul(BLOCK_WORDS)
        .ok_or(CommitError::SizeOverflow)
}

/// Pads `bytes` into freshly allocated arena scratch and returns the handle.
/// The resulting word count is always a multiple of 16.
pub fn pad(arena: &mut WordArena, bytes: &[u8]) -> Result<Handle> {
    let bits = message_bits(bytes.len())?;
    let handle = arena.alloc_words(padded_words(bytes.len())?)?;
    let words = arena.words_mut(handle);

    for (i, &b) in bytes.iter().enumerate() {
        words[i / 4] |= u32::from(b) << (24 - 8 * (i % 4));
    }

    // Mandatory terminator immediately after the message.
    let t = bytes.len();
    words[t / 4] |= 0x80u32 << (24 - 8 * (t % 4));

    let last = words.len() - 1;
    words[last] = bits;

    Ok(handle)
}
