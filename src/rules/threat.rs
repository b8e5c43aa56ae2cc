//! Threat detection for the side to move
//!
//! A threat is an empty cell where the attacker, by playing there, would
//! either complete five or build an open four (four in a row with both ends
//! empty, which cannot be stopped next turn). Composite shapes such as
//! double threes are not detected.

use tracing::trace;

use crate::board::{Bitboard, Board, Pos, Stone};

use super::scan::{scan_run, DIRECTIONS};
use super::win::WIN_LENGTH;

/// Kind of threat a single placement creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatKind {
    /// Placement completes five or more
    Five,
    /// Placement makes four with both ends open
    OpenFour,
}

/// Mark every empty cell where `attacker` would win or make an open four.
///
/// Works on a private copy: each empty cell gets a hypothetical attacker
/// stone which is removed again before the next cell is examined, so the
/// caller's board is never touched.
pub fn find_threats(board: &Board, attacker: Stone) -> Bitboard {
    let mut marks = Bitboard::new(board.size());
    if attacker == Stone::Empty {
        return marks;
    }

    let mut work_board = board.clone();
    for pos in board.positions() {
        if !work_board.is_empty(pos) {
            continue;
        }

        // Make / unmake
        work_board.place_stone(pos, attacker);
        let kind = threat_at(&work_board, pos, attacker);
        work_board.remove_stone(pos);

        if let Some(kind) = kind {
            trace!(%pos, ?kind, "threat");
            marks.set(pos);
        }
    }

    marks
}

/// Classify the stone of `color` already sitting on `pos`.
///
/// Directions are tried in order and the first hit wins.
pub fn threat_at(board: &Board, pos: Pos, color: Stone) -> Option<ThreatKind> {
    for &dir in &DIRECTIONS {
        let scan = scan_run(board, pos, color, dir);
        let total = scan.total();
        if total >= WIN_LENGTH {
            return Some(ThreatKind::Five);
        }
        if total == WIN_LENGTH - 1 && scan.is_open() {
            return Some(ThreatKind::OpenFour);
        }
    }
    None
}
