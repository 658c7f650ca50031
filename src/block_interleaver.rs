//! Block Bit Interleaver
//!
//! Spreads bursts of channel errors across a codeword by permuting bits in a
//! fixed column-major pattern. Convolutional codes correct scattered errors
//! far better than clustered ones, and real-world corruption is bursty, so a
//! transmitter interleaves after encoding and the receiver deinterleaves
//! before Viterbi decoding.
//!
//! The data is treated as a grid `interleave` columns wide, filled row-major
//! in input order and read out column-major. When `total_bits` is not a
//! multiple of `interleave` the final row is ragged: only the first
//! `total_bits % interleave` columns get the extra row, and the cursor drops
//! the effective row count once it walks past the last full-height column.
//!
//! All buffers are bit-addressed, low bit first within each byte.
//! GNU Radio equivalent: `gr::digital` block interleaver.
//!
//! ## Example
//!
//! ```rust
//! use trellis_fec::block_interleaver::{interleave, BlockDeinterleaver};
//!
//! // 10 bits, 4 columns: output order is 0,4,8, 1,5,9, 2,6, 3,7.
//! let (data, _) = trellis_fec::bit_io::pack_bitstring("1100101101");
//! let mut permuted = Vec::new();
//! interleave(4, &data, 10, |bit| permuted.push(bit));
//! assert_eq!(permuted, vec![1, 1, 0, 1, 0, 1, 0, 1, 0, 1]);
//!
//! // Feeding the permuted bits back restores the original order.
//! let mut restored = vec![0u8; 2];
//! let mut di = BlockDeinterleaver::new(4, &mut restored, 10);
//! for &bit in &permuted {
//!     di.push_bit(bit);
//! }
//! assert_eq!(restored, data);
//! ```

use crate::bit_io::{get_bit, set_bit};

/// Grid geometry plus the (row, col) walk cursor, shared by the reader and
/// writer sides.
#[derive(Debug, Clone)]
struct GridCursor {
    interleave: usize,
    total_bits: usize,
    /// Effective row count; drops by one after the last full-height column.
    num_rows: usize,
    /// Last column that still has `num_rows` rows. Equal to `interleave`
    /// when the grid is rectangular.
    last_full_col: usize,
    row: usize,
    col: usize,
}

impl GridCursor {
    fn new(interleave: usize, total_bits: usize) -> Self {
        assert!(interleave >= 1, "interleave must be at least 1");
        let mut num_rows = total_bits / interleave;
        let last_full_col = if total_bits % interleave == 0 {
            interleave
        } else {
            num_rows += 1;
            total_bits % interleave - 1
        };
        Self {
            interleave,
            total_bits,
            num_rows,
            last_full_col,
            row: 0,
            col: 0,
        }
    }

    /// Bit position in the flat buffer for the current (row, col).
    fn bit_pos(&self) -> usize {
        self.row * self.interleave + self.col
    }

    fn advance(&mut self) {
        self.row += 1;
        if self.row >= self.num_rows {
            if self.col == self.last_full_col {
                self.num_rows -= 1;
            }
            self.col += 1;
            self.row = 0;
        }
    }
}

/// Streaming interleaver: pulls bits out of a buffer in interleaved order.
///
/// Call [`next_bit`](Self::next_bit) at most `total_bits` times.
#[derive(Debug)]
pub struct BlockInterleaver<'a> {
    cursor: GridCursor,
    data: &'a [u8],
}

impl<'a> BlockInterleaver<'a> {
    /// Create an interleaver over `total_bits` bits of `data` with the given
    /// column count.
    ///
    /// # Panics
    /// Panics if `interleave` is zero.
    pub fn new(interleave: usize, data: &'a [u8], total_bits: usize) -> Self {
        Self {
            cursor: GridCursor::new(interleave, total_bits),
            data,
        }
    }

    /// Return the next bit in interleaved order and advance the cursor.
    pub fn next_bit(&mut self) -> u8 {
        let bit = get_bit(self.data, self.cursor.bit_pos());
        self.cursor.advance();
        bit
    }

    /// Total number of bits this interleaver will produce.
    pub fn total_bits(&self) -> usize {
        self.cursor.total_bits
    }
}

/// Streaming deinterleaver: accepts bits in interleaved order and stores them
/// in original order.
///
/// The output buffer must start zeroed (bits are OR'd in). Call
/// [`push_bit`](Self::push_bit) at most `total_bits` times.
#[derive(Debug)]
pub struct BlockDeinterleaver<'a> {
    cursor: GridCursor,
    data: &'a mut [u8],
}

impl<'a> BlockDeinterleaver<'a> {
    /// Create a deinterleaver writing into `total_bits` bits of `data`.
    ///
    /// # Panics
    /// Panics if `interleave` is zero.
    pub fn new(interleave: usize, data: &'a mut [u8], total_bits: usize) -> Self {
        Self {
            cursor: GridCursor::new(interleave, total_bits),
            data,
        }
    }

    /// Store the next interleaved-order bit at its original position.
    pub fn push_bit(&mut self, bit: u8) {
        set_bit(self.data, self.cursor.bit_pos(), bit);
        self.cursor.advance();
    }

    /// Total number of bits this deinterleaver will accept.
    pub fn total_bits(&self) -> usize {
        self.cursor.total_bits
    }
}

/// One-shot interleave: walk the full grid and hand every bit (0 or 1) to
/// `output` in interleaved order.
pub fn interleave(interleave_len: usize, data: &[u8], total_bits: usize, mut output: impl FnMut(u8)) {
    let mut il = BlockInterleaver::new(interleave_len, data, total_bits);
    for _ in 0..total_bits {
        output(il.next_bit());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bit_io::pack_bitstring;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn interleave_order(interleave: usize, total_bits: usize) -> Vec<usize> {
        let mut cursor = GridCursor::new(interleave, total_bits);
        (0..total_bits)
            .map(|_| {
                let pos = cursor.bit_pos();
                cursor.advance();
                pos
            })
            .collect()
    }

    #[test]
    fn test_rectangular_order() {
        // 3 columns x 2 rows
        assert_eq!(interleave_order(3, 6), vec![0, 3, 1, 4, 2, 5]);
    }

    #[test]
    fn test_ragged_order() {
        // 4 columns, 10 bits: columns 0 and 1 get the extra row
        assert_eq!(interleave_order(4, 10), vec![0, 4, 8, 1, 5, 9, 2, 6, 3, 7]);
    }

    #[test]
    fn test_interleave_one_is_identity() {
        assert_eq!(interleave_order(1, 5), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_interleave_wider_than_data() {
        // Single ragged row: straight pass-through
        assert_eq!(interleave_order(8, 3), vec![0, 1, 2]);
    }

    #[test]
    fn test_one_shot_matches_streaming() {
        let (data, nbits) = pack_bitstring("110010110100011");
        let mut il = BlockInterleaver::new(4, &data, nbits);
        let streamed: Vec<u8> = (0..nbits).map(|_| il.next_bit()).collect();

        let mut shot = Vec::new();
        interleave(4, &data, nbits, |bit| shot.push(bit));
        assert_eq!(shot, streamed);
    }

    #[test]
    fn test_deinterleave_inverts_interleave() {
        let (data, nbits) = pack_bitstring("10110100111000101");
        let mut permuted = Vec::new();
        interleave(5, &data, nbits, |bit| permuted.push(bit));

        let mut restored = vec![0u8; data.len()];
        let mut di = BlockDeinterleaver::new(5, &mut restored, nbits);
        for &bit in &permuted {
            di.push_bit(bit);
        }
        assert_eq!(restored, data);
    }

    #[test]
    fn test_involution_random_geometry() {
        let mut rng = StdRng::seed_from_u64(0x1EAF);
        for _ in 0..32 {
            let total_bits = rng.gen_range(1..=256);
            let interleave_len = rng.gen_range(1..=32);

            let mut data = vec![0u8; total_bits / 8 + 1];
            for i in 0..total_bits {
                if rng.gen::<bool>() {
                    set_bit(&mut data, i, 1);
                }
            }

            let mut il = BlockInterleaver::new(interleave_len, &data, total_bits);
            let permuted: Vec<u8> = (0..total_bits).map(|_| il.next_bit()).collect();

            let mut restored = vec![0u8; data.len()];
            let mut di = BlockDeinterleaver::new(interleave_len, &mut restored, total_bits);
            for &bit in &permuted {
                di.push_bit(bit);
            }
            assert_eq!(
                restored, data,
                "involution failed for interleave={interleave_len} total_bits={total_bits}"
            );
        }
    }

    #[test]
    fn test_permutation_is_bijective() {
        for (interleave_len, total_bits) in [(3, 17), (7, 7), (4, 15), (16, 33)] {
            let mut seen = vec![false; total_bits];
            for pos in interleave_order(interleave_len, total_bits) {
                assert!(pos < total_bits, "position {pos} out of range");
                assert!(!seen[pos], "position {pos} visited twice");
                seen[pos] = true;
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_zero_interleave_rejected() {
        GridCursor::new(0, 8);
    }
}
