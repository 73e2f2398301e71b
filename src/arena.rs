// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Bump word arena.
//!
//! Scratch memory for padded blocks and serialization buffers. The bump
//! pointer only moves forward; nothing is freed before the execution ends,
//! and handed-out regions are never aliased. Callers receive index-based
//! handles rather than raw addresses.

use alloc::vec::Vec;

use crate::config::DEFAULT_ARENA_WORDS;
use crate::error::{CommitError, Result};

/// Handle to a word run inside the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Handle {
    offset: usize,
    len: usize,
}

impl Handle {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

pub struct WordArena {
    words: Vec<u32>,
    capacity: usize,
}

impl WordArena {
    /// An arena that will hand out at most `capacity` words in total.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::new(),
            capacity,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ARENA_WORDS)
    }

    /// Bump-allocates `len` zeroed words.
    pub fn alloc_words(&mut self, len: usize) -> Result<Handle> {
        let offset = self.words.len();
        let end = offset.checked_add(len).ok_or(CommitError::SizeOverflow)?;
        if end > self.capacity {
            return Err(CommitError::ArenaExhausted);
        }
        self.words.resize(end, 0);
        Ok(Handle { offset, len })
    }

    pub fn words(&self, handle: Handle) -> &[u32] {
        &self.words[handle.offset..handle.offset + handle.len]
    }

    pub fn words_mut(&mut self, handle: Handle) -> &mut [u32] {
        &mut self.words[handle.offset..handle.offset + handle.len]
    }

    /// Words handed out so far.
    pub fn used(&self) -> usize {
        self.words.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for WordArena {
    fn default() -> Self {
        Self::new()
    }
}
