//! # trellis-fec
//!
//! Convolutional encoding, Viterbi (maximum-likelihood) decoding, and block
//! bit interleaving for forward-error-correction chains.
//!
//! A producer encodes a bitstream before transmission or storage; a consumer
//! decodes the possibly corrupted bitstream, recovering the original bits
//! plus an estimate of how many errors (or how much uncertainty) the channel
//! introduced. The interleaver scatters burst errors across a codeword so
//! the Viterbi decoder sees them as isolated flips, which it corrects far
//! more effectively.
//!
//! ## Signal Flow
//!
//! ```text
//! TX: Data -> Convolutional Encode -> Interleave -> Channel
//! RX: Channel -> De-interleave -> Viterbi Decode -> Data (+ num_errs)
//! ```
//!
//! ## Features
//!
//! - Constraint lengths 1..=16 with up to 16 generator polynomials
//! - Recursive/systematic (RSC) form usable as a turbo constituent encoder
//! - Zero-tail termination or caller-driven tail biting
//! - Hard-decision and soft-decision (per-bit uncertainty) decoding, with an
//!   optional per-bit uncertainty output recovered during traceback
//! - Streaming interfaces with sub-symbol leftover buffering, plus
//!   single-call block variants writing straight into caller buffers
//! - Presets for well-known codes (Voyager, LTE, CDMA2000, Cassini)
//!
//! ## Example
//!
//! ```rust
//! use trellis_fec::{ConvCode, ConvCodeConfig};
//!
//! let config = ConvCodeConfig::voyager_k7_rate_half().with_max_decode_len(256);
//! let mut coder = ConvCode::new(&config, None, None)?;
//!
//! let data = *b"hi";
//! let mut encoded = [0u8; 6];
//! let coded_bits = coder.encode_block(&data, 16, &mut encoded);
//!
//! let mut decoded = [0u8; 2];
//! let num_errs = coder.decode_block(&encoded, coded_bits, None, &mut decoded, None)?;
//! assert_eq!(decoded, data);
//! assert_eq!(num_errs, 0);
//! # Ok::<(), trellis_fec::CodecError>(())
//! ```

pub mod bit_io;
pub mod block_interleaver;
pub mod convolutional;
pub mod types;

pub use block_interleaver::{interleave, BlockDeinterleaver, BlockInterleaver};
pub use convolutional::{
    ConvCode, ConvCodeConfig, OutputSink, DEFAULT_INIT_OTHER_STATES, DEFAULT_START_STATE,
    DEFAULT_UNCERTAINTY_100,
};
pub use types::{CodecError, CodecResult, CoderState, MAX_CONSTRAINT_LENGTH, MAX_POLYNOMIALS};
