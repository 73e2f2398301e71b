// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Tagged-struct digest combination.
//!
//! Folds a domain tag and an ordered list of digests into one digest in two
//! hashing passes: the tag is hashed on its own, then the tag digest, the
//! input digests in order, and a 2-byte count are serialized and hashed
//! again. Structurally different commitments (different tag, count, or
//! order) therefore cannot collide unless both passes collide.

use alloc::vec::Vec;
use byteorder::{ByteOrder, LittleEndian};

use crate::arena::WordArena;
use crate::config::MAX_STRUCT_DIGESTS;
use crate::digest::Digest;
use crate::error::{CommitError, Result};
use crate::platform::Platform;
use crate::sha::engine;

/// Serialized length of a tagged struct over `count` digests: the tag digest,
/// each input digest (4-byte little-endian words), and the count field.
fn encoded_len(count: usize) -> usize {
    (1 + count) * 32 + 2
}

/// Combines `tag` and `digests` into a single domain-separated digest.
///
/// The count field is exact; a list longer than the 2-byte field can carry
/// is rejected with [`CommitError::TooManyDigests`].
pub fn tagged_struct<P: Platform>(
    arena: &mut WordArena,
    platform: &mut P,
    tag: &str,
    digests: &[Digest],
) -> Result<Digest> {
    if digests.len() > MAX_STRUCT_DIGESTS {
        return Err(CommitError::TooManyDigests);
    }

    let tag_digest = engine::digest(arena, platform, tag.as_bytes())?;

    let mut buf = Vec::with_capacity(encoded_len(digests.len()));
    buf.extend_from_slice(&tag_digest.to_le_bytes());
    for d in digests {
        buf.extend_from_slice(&d.to_le_bytes());
    }
    let mut count = [0u8; 2];
    LittleEndian::write_u16(&mut count, digests.len() as u16);
    buf.extend_from_slice(&count);

    engine::digest(arena, platform, &buf)
}
