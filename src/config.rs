// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Protocol constants.

/// Words per SHA-256 digest and hash state.
pub const DIGEST_WORDS: usize = 8;

/// Words per SHA-256 block.
pub const BLOCK_WORDS: usize = 16;

/// Bytes per SHA-256 block (BLOCK_WORDS * 4).
pub const BLOCK_BYTES: usize = BLOCK_WORDS * 4;

/// Standard SHA-256 initial hash state (FIPS 180-4).
pub const SHA256_INIT: [u32; DIGEST_WORDS] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a,
    0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Domain-separation tag for the guest output commitment.
pub const OUTPUT_TAG: &str = "risc0.Output";

/// Host output channel carrying the public journal bytes.
pub const JOURNAL_CHANNEL: u32 = 3;

/// Maximum number of digests in one tagged struct. The count is serialized
/// into a 2-byte field; anything larger is rejected, never wrapped.
pub const MAX_STRUCT_DIGESTS: usize = u16::MAX as usize;

/// Default scratch arena capacity, in words.
pub const DEFAULT_ARENA_WORDS: usize = 1 << 16;
