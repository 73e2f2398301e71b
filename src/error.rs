//! Error types.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitError {
    /// Message bit length does not fit the 32-bit length word.
    PayloadTooLarge,
    /// Buffer-size arithmetic overflowed.
    SizeOverflow,
    /// Scratch arena capacity exceeded. Fatal in the single-shot model.
    ArenaExhausted,
    /// Tagged-struct digest count exceeds the 2-byte count field.
    TooManyDigests,
}

pub type CommitResult<T> = core::result::Result<T, CommitError>;
pub type Result<T> = CommitResult<T>;
