//! Step-by-step review of a finished or running game
//!
//! A review works on a snapshot of the move history and never changes the
//! game it was started from. Step `k` shows the board after the first `k`
//! moves; step 0 is the empty board.

use crate::board::{Board, Pos, Stone};
use crate::game::{board_from_moves, GameState};

/// Review session over a snapshot of the ledger
#[derive(Debug, Clone)]
pub struct Review {
    size: usize,
    moves: Vec<Pos>,
    step: usize,
    board: Board,
}

impl Review {
    /// Start reviewing `game` from the empty board.
    ///
    /// Returns `None` when no moves have been played.
    pub fn start(game: &GameState) -> Option<Self> {
        if game.move_count() == 0 {
            return None;
        }
        let size = game.size();
        Some(Self {
            size,
            moves: game.ledger().as_slice().to_vec(),
            step: 0,
            board: Board::new(size),
        })
    }

    /// Number of moves shown
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of moves in the reviewed game
    #[inline]
    pub fn total(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Most recent move shown and who played it
    pub fn last_move(&self) -> Option<(Pos, Stone)> {
        let index = self.step.checked_sub(1)?;
        Some((self.moves[index], Stone::for_move_index(index)))
    }

    #[inline]
    pub fn at_start(&self) -> bool {
        self.step == 0
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.step == self.moves.len()
    }

    /// Show one more move. Returns false at the end.
    pub fn step_forward(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.seek(self.step + 1)
    }

    /// Show one move fewer. Returns false at the start.
    pub fn step_back(&mut self) -> bool {
        if self.at_start() {
            return false;
        }
        self.seek(self.step - 1)
    }

    /// Back to the empty board
    pub fn restart(&mut self) {
        self.seek(0);
    }

    /// Jump to `step`, rebuilding the board from the move list.
    /// Returns false, changing nothing, past the end.
    pub fn seek(&mut self, step: usize) -> bool {
        if step > self.moves.len() {
            return false;
        }
        self.step = step;
        self.board = board_from_moves(self.size, &self.moves[..step]);
        true
    }
}
