//! Bitboard implementation for per-cell marks

use super::Pos;

/// One bit per cell of a `size` x `size` board.
///
/// Used for the win and threat mark grids. Positions outside the board read
/// as unset and are ignored on write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitboard {
    size: usize,
    bits: Vec<u64>,
}

impl Bitboard {
    /// Create empty bitboard for a board of the given size
    pub fn new(size: usize) -> Self {
        let words = (size * size).div_ceil(64);
        Self {
            size,
            bits: vec![0; words],
        }
    }

    /// Side length of the board this bitboard covers
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> Option<usize> {
        if (pos.row as usize) < self.size && (pos.col as usize) < self.size {
            Some(pos.to_index(self.size))
        } else {
            None
        }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        if let Some(idx) = self.index(pos) {
            self.bits[idx / 64] |= 1u64 << (idx % 64);
        }
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        if let Some(idx) = self.index(pos) {
            self.bits[idx / 64] &= !(1u64 << (idx % 64));
        }
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        match self.index(pos) {
            Some(idx) => (self.bits[idx / 64] >> (idx % 64)) & 1 == 1,
            None => false,
        }
    }

    /// Clear every bit
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits.fill(0);
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter<'_> {
        BitboardIter {
            board: self,
            word_idx: 0,
            current_word: self.bits.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter<'a> {
    board: &'a Bitboard,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter<'_> {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= self.board.bits.len() {
                return None;
            }
            self.current_word = self.board.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        let idx = self.word_idx * 64 + bit_pos;

        // Clear the bit we just found
        self.current_word &= self.current_word - 1;

        Some(Pos::from_index(idx, self.board.size))
    }
}
