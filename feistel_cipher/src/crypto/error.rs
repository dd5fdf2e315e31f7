use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    #[error("value 0x{value:x} does not fit into {bits} bits")]
    InvalidBlockWidth { value: u128, bits: u32 },

    #[error("round count must be at least 1")]
    EmptyKeySchedule,

    #[error("expected a sequence of {expected} blocks, got {actual}")]
    SequenceLengthMismatch { expected: usize, actual: usize },
}
