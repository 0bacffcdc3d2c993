//! 256-bit square sets.
//!
//! One bit per square of the padded 16x16 embedding, stored as four 64-bit
//! words (word 0 holds bits 0..=63). All shifts propagate carries across
//! word boundaries; bits pushed past either end drop, which is what lets
//! the one-square border ring absorb directional-shift overflow.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

use crate::board::types::Square;
use crate::errors::BoardError;

const WORDS: usize = 4;

const DEBRUIJN64: u64 = 0x03f7_9d71_b4cb_0a89;

/// `DEBRUIJN_INDEX[(isolated_bit * DEBRUIJN64) >> 58]` is the bit index of
/// the isolated bit within its word.
const DEBRUIJN_INDEX: [u8; 64] = [
    0, 1, 48, 2, 57, 49, 28, 3, 61, 58, 50, 42, 38, 29, 17, 4, 62, 55, 59, 36, 53, 51, 43, 22, 45,
    39, 33, 30, 24, 18, 12, 5, 63, 47, 56, 27, 60, 41, 37, 16, 54, 35, 52, 21, 44, 32, 23, 11, 46,
    26, 40, 15, 34, 20, 31, 10, 25, 14, 19, 9, 13, 8, 7, 6,
];

/// A set of squares over the 256-square embedded board.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard(pub [u64; WORDS]);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard([0; WORDS]);
    pub const FULL: Bitboard = Bitboard([u64::MAX; WORDS]);

    #[inline]
    pub const fn from_square(square: Square) -> Bitboard {
        let mut words = [0u64; WORDS];
        words[(square / 64) as usize] = 1u64 << (square % 64);
        Bitboard(words)
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        self.0[(square / 64) as usize] & (1u64 << (square % 64)) != 0
    }

    #[inline]
    pub const fn with_square(self, square: Square) -> Bitboard {
        let mut words = self.0;
        words[(square / 64) as usize] |= 1u64 << (square % 64);
        Bitboard(words)
    }

    #[inline]
    pub fn set(&mut self, square: Square) {
        self.0[(square / 64) as usize] |= 1u64 << (square % 64);
    }

    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.0[(square / 64) as usize] &= !(1u64 << (square % 64));
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0[0] | self.0[1] | self.0[2] | self.0[3] == 0
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0[0].count_ones()
            + self.0[1].count_ones()
            + self.0[2].count_ones()
            + self.0[3].count_ones()
    }

    /// Index of the lowest set bit, De Bruijn multiplication adapted to the
    /// word array: isolate the lowest nonzero word, isolate its lowest bit,
    /// look the bit up, and offset by the word position.
    ///
    /// Scanning the empty set is a programming error; callers must have
    /// established non-emptiness.
    #[inline]
    pub fn bit_scan_forward(self) -> Result<Square, BoardError> {
        let mut word_index = 0;
        while word_index < WORDS {
            let word = self.0[word_index];
            if word != 0 {
                let isolated = word & word.wrapping_neg();
                let within = DEBRUIJN_INDEX[(isolated.wrapping_mul(DEBRUIJN64) >> 58) as usize];
                return Ok((word_index as u8) * 64 + within);
            }
            word_index += 1;
        }
        Err(BoardError::EmptyBitboard)
    }

    /// Scan-and-clear form of [`bit_scan_forward`](Self::bit_scan_forward)
    /// for `while let` iteration loops.
    #[inline]
    pub fn pop_lowest(&mut self) -> Option<Square> {
        match self.bit_scan_forward() {
            Ok(square) => {
                self.clear(square);
                Some(square)
            }
            Err(_) => None,
        }
    }

    /// Carry-propagating left shift; bits pushed past bit 255 drop.
    pub const fn shifted_left(self, amount: u32) -> Bitboard {
        let word_shift = (amount / 64) as usize;
        let bit_shift = amount % 64;
        let mut out = [0u64; WORDS];
        let mut i = WORDS;
        while i > 0 {
            i -= 1;
            if i >= word_shift {
                let src = i - word_shift;
                let mut word = self.0[src] << bit_shift;
                if bit_shift > 0 && src > 0 {
                    word |= self.0[src - 1] >> (64 - bit_shift);
                }
                out[i] = word;
            }
        }
        Bitboard(out)
    }

    /// Carry-propagating right shift; bits pushed past bit 0 drop.
    pub const fn shifted_right(self, amount: u32) -> Bitboard {
        let word_shift = (amount / 64) as usize;
        let bit_shift = amount % 64;
        let mut out = [0u64; WORDS];
        let mut i = 0;
        while i < WORDS {
            if i + word_shift < WORDS {
                let src = i + word_shift;
                let mut word = self.0[src] >> bit_shift;
                if bit_shift > 0 && src + 1 < WORDS {
                    word |= self.0[src + 1] << (64 - bit_shift);
                }
                out[i] = word;
            }
            i += 1;
        }
        Bitboard(out)
    }

    // Const forms of the bit operators, for building masks in const context.

    pub const fn union(self, other: Bitboard) -> Bitboard {
        Bitboard([
            self.0[0] | other.0[0],
            self.0[1] | other.0[1],
            self.0[2] | other.0[2],
            self.0[3] | other.0[3],
        ])
    }

    pub const fn intersection(self, other: Bitboard) -> Bitboard {
        Bitboard([
            self.0[0] & other.0[0],
            self.0[1] & other.0[1],
            self.0[2] & other.0[2],
            self.0[3] & other.0[3],
        ])
    }

    pub const fn inverse(self) -> Bitboard {
        Bitboard([!self.0[0], !self.0[1], !self.0[2], !self.0[3]])
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        self.intersection(rhs)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        self.union(rhs)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard([
            self.0[0] ^ rhs.0[0],
            self.0[1] ^ rhs.0[1],
            self.0[2] ^ rhs.0[2],
            self.0[3] ^ rhs.0[3],
        ])
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        self.inverse()
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        *self = *self & rhs;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        *self = *self | rhs;
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        *self = *self ^ rhs;
    }
}

impl Shl<u32> for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn shl(self, amount: u32) -> Bitboard {
        self.shifted_left(amount)
    }
}

impl Shr<u32> for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn shr(self, amount: u32) -> Bitboard {
        self.shifted_right(amount)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bitboard({:#018x}, {:#018x}, {:#018x}, {:#018x})",
            self.0[3], self.0[2], self.0[1], self.0[0]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Bitboard;
    use crate::errors::BoardError;

    #[test]
    fn from_square_and_contains_cover_all_words() {
        for square in [0u8, 63, 64, 127, 128, 191, 192, 255] {
            let bb = Bitboard::from_square(square);
            assert!(bb.contains(square));
            assert_eq!(bb.count(), 1);
        }
    }

    #[test]
    fn left_shift_carries_across_word_boundary() {
        let bb = Bitboard::from_square(63) << 1;
        assert_eq!(bb, Bitboard::from_square(64));

        let bb = Bitboard::from_square(60) << 16;
        assert_eq!(bb, Bitboard::from_square(76));

        let bb = Bitboard::from_square(0) << 255;
        assert_eq!(bb, Bitboard::from_square(255));
    }

    #[test]
    fn right_shift_carries_across_word_boundary() {
        let bb = Bitboard::from_square(64) >> 1;
        assert_eq!(bb, Bitboard::from_square(63));

        let bb = Bitboard::from_square(200) >> 128;
        assert_eq!(bb, Bitboard::from_square(72));
    }

    #[test]
    fn shifts_past_either_end_drop_bits() {
        assert_eq!(Bitboard::from_square(250) << 16, Bitboard::EMPTY);
        assert_eq!(Bitboard::from_square(5) >> 16, Bitboard::EMPTY);
        assert_eq!(Bitboard::FULL << 256, Bitboard::EMPTY);
    }

    #[test]
    fn shift_by_zero_is_identity() {
        let bb = Bitboard([0xdead, 0xbeef, 0xcafe, 0xf00d]);
        assert_eq!(bb << 0, bb);
        assert_eq!(bb >> 0, bb);
    }

    #[test]
    fn bit_scan_forward_finds_lowest_bit_in_each_word() {
        for square in [0u8, 1, 17, 63, 64, 100, 190, 255] {
            let bb = Bitboard::from_square(square) | Bitboard::from_square(255);
            assert_eq!(bb.bit_scan_forward(), Ok(square));
        }
    }

    #[test]
    fn bit_scan_forward_rejects_empty_set() {
        assert_eq!(
            Bitboard::EMPTY.bit_scan_forward(),
            Err(BoardError::EmptyBitboard)
        );
    }

    #[test]
    fn pop_lowest_drains_in_ascending_order() {
        let mut bb = Bitboard::from_square(3)
            | Bitboard::from_square(70)
            | Bitboard::from_square(140)
            | Bitboard::from_square(255);
        let mut seen = Vec::new();
        while let Some(square) = bb.pop_lowest() {
            seen.push(square);
        }
        assert_eq!(seen, vec![3, 70, 140, 255]);
        assert!(bb.is_empty());
    }

    #[test]
    fn set_operators_behave_like_sets() {
        let a = Bitboard::from_square(10) | Bitboard::from_square(200);
        let b = Bitboard::from_square(200) | Bitboard::from_square(30);
        assert_eq!(a & b, Bitboard::from_square(200));
        assert_eq!((a ^ b).count(), 2);
        assert!(!(a & !b).contains(200));
    }
}
