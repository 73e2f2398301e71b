pub mod commit_tests;

use std::vec::Vec;

use crate::digest::Digest;
use crate::platform::Platform;
use crate::sha::compress;

/// Software host for unit tests: compresses with the reference compressor,
/// captures every output write, records the halt call.
pub struct TestPlatform {
    pub writes: Vec<(u32, Vec<u8>)>,
    pub halted: Option<(u8, Digest)>,
    pub blocks: usize,
}

impl TestPlatform {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            halted: None,
            blocks: 0,
        }
    }

    /// Concatenated bytes written to `channel`, in write order.
    pub fn channel(&self, channel: u32) -> Vec<u8> {
        let mut out = Vec::new();
        for (c, bytes) in &self.writes {
            if *c == channel {
                out.extend_from_slice(bytes);
            }
        }
        out
    }
}

impl Platform for TestPlatform {
    fn compress_blocks(&mut self, state: &[u32; 8], words: &[u32]) -> [u32; 8] {
        self.blocks += words.len() / 16;
        compress::compress_blocks(state, words)
    }

    fn write_output(&mut self, channel: u32, bytes: &[u8]) {
        self.writes.push((channel, bytes.to_vec()));
    }

    fn halt(&mut self, exit_code: u8, digest: &Digest) {
        assert!(self.halted.is_none(), "halt must be terminal");
        self.halted = Some((exit_code, *digest));
    }
}
