// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
#![no_std]

//! sigil-kernel: A deterministic, no_std commitment kernel for single-shot
//! guest executions. Hashes the guest's public output with SHA-256 over an
//! injected block-compression primitive and folds it into a domain-separated
//! "tagged struct" digest that the host receives at halt.

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod config;
pub mod error;
pub mod digest;
pub mod arena;
pub mod platform;
pub mod sha;
pub mod tagged;
pub mod commit;

#[cfg(test)]
pub mod tests;
