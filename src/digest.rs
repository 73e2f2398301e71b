//! The 8-word SHA-256 digest value type.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};

use crate::config::DIGEST_WORDS;

/// A SHA-256 digest in the compression primitive's native form: eight u32
/// state words whose big-endian encoding is the standard digest byte string.
/// Immutable once produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Digest([u32; DIGEST_WORDS]);

impl Digest {
    /// The all-zero digest, used when no assumptions apply.
    pub const ZERO: Digest = Digest([0; DIGEST_WORDS]);

    pub const fn from_words(words: [u32; DIGEST_WORDS]) -> Self {
        Digest(words)
    }

    pub fn as_words(&self) -> &[u32; DIGEST_WORDS] {
        &self.0
    }

    /// Standard byte presentation, matching what `sha256sum` prints.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        BigEndian::write_u32_into(&self.0, &mut out);
        out
    }

    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        let mut words = [0u32; DIGEST_WORDS];
        BigEndian::read_u32_into(bytes, &mut words);
        Digest(words)
    }

    /// Per-word little-endian encoding, the form digests take inside a
    /// serialized tagged struct.
    pub fn to_le_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        LittleEndian::write_u32_into(&self.0, &mut out);
        out
    }

    pub fn from_le_bytes(bytes: &[u8; 32]) -> Self {
        let mut words = [0u32; DIGEST_WORDS];
        LittleEndian::read_u32_into(bytes, &mut words);
        Digest(words)
    }
}

impl From<[u32; DIGEST_WORDS]> for Digest {
    fn from(words: [u32; DIGEST_WORDS]) -> Self {
        Digest(words)
    }
}
