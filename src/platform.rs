// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Host capability surface.

use crate::digest::Digest;

/// The capabilities the kernel consumes from its host.
///
/// Execution is single-threaded; every call is synchronous and assumed to
/// succeed. There is no cancellation, timeout, or retry anywhere in this
/// contract.
pub trait Platform {
    /// Applies the SHA-256 compression function to `words`, starting from
    /// `state`, and returns the updated state. `words` holds whole 64-byte
    /// blocks: its length must be an exact multiple of 16.
    fn compress_blocks(&mut self, state: &[u32; 8], words: &[u32]) -> [u32; 8];

    /// Appends bytes to a host-visible output channel.
    fn write_output(&mut self, channel: u32, bytes: &[u8]);

    /// Hands the final commitment digest to the host and ends execution.
    /// Terminal on real targets; software hosts record the call instead so
    /// callers can observe it.
    fn halt(&mut self, exit_code: u8, digest: &Digest);
}
