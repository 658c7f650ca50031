//! Core types for the coder and interleaver
//!
//! Shared aliases, limits, and the error enum used throughout the crate.
//! Every fallible operation returns a [`CodecResult`]; nothing panics on
//! bad input outside of documented `assert!` preconditions.

/// A trellis/shift-register state. With a maximum constraint length of 16
/// there are at most 2^15 states, so `u16` always fits.
pub type CoderState = u16;

/// Result type for coder operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Maximum number of generator polynomials per code.
pub const MAX_POLYNOMIALS: usize = 16;

/// Maximum constraint length (polynomial width in bits).
pub const MAX_CONSTRAINT_LENGTH: usize = 16;

/// Errors that can occur during encoding or decoding.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CodecError {
    #[error("invalid constraint length {0}: must be between 1 and 16")]
    InvalidConstraintLength(usize),

    #[error("invalid polynomial count {0}: must be between 1 and 16")]
    InvalidPolynomialCount(usize),

    #[error("start state {state} out of range: coder has {num_states} states")]
    InvalidStartState { state: CoderState, num_states: usize },

    #[error("decoder capacity exceeded: trellis holds {trellis_size} steps")]
    CapacityExceeded { trellis_size: usize },

    #[error("output sink aborted: {0}")]
    SinkAborted(String),
}
