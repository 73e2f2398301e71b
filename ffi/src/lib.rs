// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! C ABI for guests written against the commitment kernel.
//!
//! A context handle owns the scratch arena, the software platform, and the
//! streaming committer. `sigil_exit` consumes the committer: further calls
//! on the context after exit report an error instead of double-finalizing.

use sigil_host::SimPlatform;
use sigil_kernel::arena::WordArena;
use sigil_kernel::commit::Committer;
use sigil_kernel::digest::Digest;
use sigil_kernel::error::CommitError;

pub const SIGIL_OK: i32 = 0;
pub const SIGIL_ERR_PAYLOAD_TOO_LARGE: i32 = -1;
pub const SIGIL_ERR_SIZE_OVERFLOW: i32 = -2;
pub const SIGIL_ERR_ARENA_EXHAUSTED: i32 = -3;
pub const SIGIL_ERR_TOO_MANY_DIGESTS: i32 = -4;
pub const SIGIL_ERR_FINISHED: i32 = -5;

fn error_code(e: CommitError) -> i32 {
    match e {
        CommitError::PayloadTooLarge => SIGIL_ERR_PAYLOAD_TOO_LARGE,
        CommitError::SizeOverflow => SIGIL_ERR_SIZE_OVERFLOW,
        CommitError::ArenaExhausted => SIGIL_ERR_ARENA_EXHAUSTED,
        CommitError::TooManyDigests => SIGIL_ERR_TOO_MANY_DIGESTS,
    }
}

pub struct SigilCtx {
    arena: WordArena,
    platform: SimPlatform,
    committer: Option<Committer>,
}

/// Creates a fresh commitment context. Free with [`sigil_free`].
#[no_mangle]
pub extern "C" fn sigil_init() -> *mut SigilCtx {
    Box::into_raw(Box::new(SigilCtx {
        arena: WordArena::new(),
        platform: SimPlatform::new(),
        committer: Some(Committer::new()),
    }))
}

/// Appends `len` output bytes: journaled and absorbed into the running hash.
///
/// # Safety
/// `ctx` must come from [`sigil_init`] and not have been freed; `bytes_ptr`
/// must be valid for `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn sigil_commit(
    ctx: *mut SigilCtx,
    bytes_ptr: *const u8,
    len: u32,
) -> i32 {
    let ctx = &mut *ctx;
    let Some(committer) = ctx.committer.as_mut() else {
        return SIGIL_ERR_FINISHED;
    };
    let bytes = core::slice::from_raw_parts(bytes_ptr, len as usize);
    committer.commit(&mut ctx.platform, bytes);
    SIGIL_OK
}

/// Finalizes the journal, folds in the zero assumptions digest under the
/// output tag, halts, and writes the 8 output digest words to `out_words`.
///
/// # Safety
/// `ctx` as in [`sigil_commit`]; `out_words` must be valid for 8 u32 writes.
#[no_mangle]
pub unsafe extern "C" fn sigil_exit(
    ctx: *mut SigilCtx,
    exit_code: u8,
    out_words: *mut u32,
) -> i32 {
    let ctx = &mut *ctx;
    let Some(committer) = ctx.committer.take() else {
        return SIGIL_ERR_FINISHED;
    };
    match committer.exit(&mut ctx.arena, &mut ctx.platform, &Digest::ZERO, exit_code) {
        Ok(commitment) => {
            let out = core::slice::from_raw_parts_mut(out_words, 8);
            out.copy_from_slice(commitment.output_digest.as_words());
            SIGIL_OK
        }
        Err(e) => error_code(e),
    }
}

/// Simple commitment mode: halts with the raw journal digest.
///
/// # Safety
/// Same contract as [`sigil_exit`].
#[no_mangle]
pub unsafe extern "C" fn sigil_exit_raw(
    ctx: *mut SigilCtx,
    exit_code: u8,
    out_words: *mut u32,
) -> i32 {
    let ctx = &mut *ctx;
    let Some(committer) = ctx.committer.take() else {
        return SIGIL_ERR_FINISHED;
    };
    match committer.exit_raw(&mut ctx.arena, &mut ctx.platform, exit_code) {
        Ok(digest) => {
            let out = core::slice::from_raw_parts_mut(out_words, 8);
            out.copy_from_slice(digest.as_words());
            SIGIL_OK
        }
        Err(e) => error_code(e),
    }
}

/// Releases a context created by [`sigil_init`].
///
/// # Safety
/// `ctx` must come from [`sigil_init`] and must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn sigil_free(ctx: *mut SigilCtx) {
    if !ctx.is_null() {
        drop(Box::from_raw(ctx));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_flow_matches_golden_vector() {
        let ctx = sigil_init();
        let journal = [0u8, 1, 2, 3];
        let mut out = [0u32; 8];
        unsafe {
            assert_eq!(sigil_commit(ctx, journal.as_ptr(), 4), SIGIL_OK);
            assert_eq!(sigil_exit(ctx, 0, out.as_mut_ptr()), SIGIL_OK);
        }
        assert_eq!(
            out,
            [
                0xd20c7834, 0xd17d51f2, 0x8a712737, 0x1b658260,
                0xb7dfab81, 0x6498ee84, 0x49b59a9c, 0xa2057cd0,
            ]
        );
        unsafe {
            // Exit consumed the committer; the context is finished.
            assert_eq!(sigil_exit(ctx, 0, out.as_mut_ptr()), SIGIL_ERR_FINISHED);
            assert_eq!(sigil_commit(ctx, journal.as_ptr(), 4), SIGIL_ERR_FINISHED);
            sigil_free(ctx);
        }
    }
}
