//! Ordered move history backing undo, replay and save files

use super::{Pos, Stone};

/// Append-only, truncatable list of moves.
///
/// The player of each entry is never stored: it follows from the index
/// (see [`Stone::for_move_index`]). Uniqueness of positions is the caller's
/// job; the ledger only records what was played.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveLedger {
    moves: Vec<Pos>,
}

impl MoveLedger {
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            moves: Vec::with_capacity(capacity),
        }
    }

    /// Record a move that was just legally played
    #[inline]
    pub fn push(&mut self, pos: Pos) {
        self.moves.push(pos);
    }

    /// Drop the last `n` moves. Returns false, removing nothing, if fewer exist.
    pub fn truncate_last(&mut self, n: usize) -> bool {
        if self.moves.len() < n {
            return false;
        }
        self.moves.truncate(self.moves.len() - n);
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Pos> {
        self.moves.get(index).copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Pos> {
        self.moves.last().copied()
    }

    /// Color that played (or will play) ledger index `index`
    #[inline]
    pub fn stone_at(&self, index: usize) -> Stone {
        Stone::for_move_index(index)
    }

    /// Color to move after the recorded history
    #[inline]
    pub fn next_stone(&self) -> Stone {
        Stone::for_move_index(self.moves.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.moves.iter().copied()
    }

    pub fn as_slice(&self) -> &[Pos] {
        &self.moves
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}

impl From<Vec<Pos>> for MoveLedger {
    fn from(moves: Vec<Pos>) -> Self {
        Self { moves }
    }
}
