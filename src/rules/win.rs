//! Win condition checking
//!
//! Five or more stones in a row wins. Overlines (six or more) are allowed
//! and are highlighted in full.

use crate::board::{Bitboard, Board, Pos, Stone};

use super::scan::{scan_run, DIRECTIONS};

/// Winning run length
pub const WIN_LENGTH: i32 = 5;

/// Fast five-in-a-row check at a specific position.
///
/// Uses the color of the stone on `pos`. Only checks the 4 lines through
/// `pos`, no allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos) -> bool {
    let color = board.get(pos);
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&dir| scan_run(board, pos, color, dir).total() >= WIN_LENGTH)
}

/// Marks of every winning run through `pos`.
///
/// The color is whatever stone sits on `pos` (the move just played). For each
/// direction whose run reaches [`WIN_LENGTH`], the pivot and every contiguous
/// stone of that color on both sides are marked. Returns an empty bitboard when
/// `pos` is empty, off the board, or part of no five.
pub fn find_win_marks(board: &Board, pos: Pos) -> Bitboard {
    let mut marks = Bitboard::new(board.size());
    let color = board.get(pos);
    if color == Stone::Empty {
        return marks;
    }

    for &(dr, dc) in &DIRECTIONS {
        if scan_run(board, pos, color, (dr, dc)).total() < WIN_LENGTH {
            continue;
        }
        marks.set(pos);
        mark_side(board, &mut marks, pos, color, dr, dc);
        mark_side(board, &mut marks, pos, color, -dr, -dc);
    }

    marks
}

/// Mark contiguous `color` stones from `pos` outward, stopping at the first
/// other cell or the edge. Unlike [`scan_run`] there is no 4-cell reach, so
/// an overline is marked in full even from one of its ends.
fn mark_side(board: &Board, marks: &mut Bitboard, pos: Pos, color: Stone, dr: i32, dc: i32) {
    let mut k = 1;
    while let Some(p) = pos.offset(dr, dc, k) {
        if !board.in_bounds(p) || board.get(p) != color {
            break;
        }
        marks.set(p);
        k += 1;
    }
}
