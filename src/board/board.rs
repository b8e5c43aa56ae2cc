//! Board structure: cell storage and geometric queries

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Game board
///
/// Knows nothing about whose turn it is or what counts as a win. Every
/// accessor bounds-checks: reads outside the board see `Stone::Empty`,
/// writes outside the board are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    /// Create an empty board of the given size.
    ///
    /// Callers are expected to have checked the size with [`Board::is_valid_size`].
    pub fn new(size: usize) -> Self {
        debug_assert!(Self::is_valid_size(size));
        Self {
            size,
            black: Bitboard::new(size),
            white: Bitboard::new(size),
        }
    }

    #[inline]
    pub fn is_valid_size(size: usize) -> bool {
        (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells on the board (also the longest possible game)
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Remove every stone
    pub fn reset(&mut self) {
        self.black.clear_all();
        self.white.clear_all();
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get stone at position (`Empty` when out of range)
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && !self.black.get(pos) && !self.white.get(pos)
    }

    /// Overwrite a cell. `Stone::Empty` clears it.
    #[inline]
    pub fn set(&mut self, pos: Pos, stone: Stone) {
        if !self.in_bounds(pos) {
            return;
        }
        self.remove_stone(pos);
        self.place_stone(pos, stone);
    }

    /// Place a stone
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Iterate over every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size * size).map(move |idx| Pos::from_index(idx, size))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}
