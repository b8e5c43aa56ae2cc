//! Run scanning along one line through a pivot cell
//!
//! Shared by win detection (pivot = the move just played) and threat
//! detection (pivot = an empty cell with a hypothetical stone on it).

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down
    (1, -1), // Diagonal up
];

/// Steps scanned on each side of the pivot. A five through the pivot never
/// reaches further than this.
pub const MAX_REACH: i32 = 4;

/// Result of scanning one line through a pivot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunScan {
    /// Matching stones after the pivot along `(dr, dc)`
    pub len_pos: i32,
    /// Matching stones before the pivot, along `(-dr, -dc)`
    pub len_neg: i32,
    /// Cell just past the positive end is on the board and empty
    pub open_pos: bool,
    /// Cell just past the negative end is on the board and empty
    pub open_neg: bool,
}

impl RunScan {
    /// Run length including the pivot itself
    #[inline]
    pub fn total(&self) -> i32 {
        1 + self.len_pos + self.len_neg
    }

    /// Both ends open
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open_pos && self.open_neg
    }
}

/// Scan the line through `pivot` along `dir` for stones of `color`.
///
/// The pivot cell itself is not inspected; callers count it as one stone of
/// `color`. Each side is capped at [`MAX_REACH`].
pub fn scan_run(board: &Board, pivot: Pos, color: Stone, dir: (i32, i32)) -> RunScan {
    let (dr, dc) = dir;
    let len_pos = count_side(board, pivot, color, dr, dc);
    let len_neg = count_side(board, pivot, color, -dr, -dc);

    RunScan {
        len_pos,
        len_neg,
        open_pos: is_open_end(board, pivot, dr, dc, len_pos + 1),
        open_neg: is_open_end(board, pivot, -dr, -dc, len_neg + 1),
    }
}

#[inline]
fn count_side(board: &Board, pivot: Pos, color: Stone, dr: i32, dc: i32) -> i32 {
    let mut len = 0;
    for k in 1..=MAX_REACH {
        match pivot.offset(dr, dc, k) {
            Some(p) if board.in_bounds(p) && board.get(p) == color => len += 1,
            _ => break,
        }
    }
    len
}

#[inline]
fn is_open_end(board: &Board, pivot: Pos, dr: i32, dc: i32, k: i32) -> bool {
    pivot
        .offset(dr, dc, k)
        .is_some_and(|p| board.is_empty(p))
}
