//! Game state: the command and query surface used by every front-end
//!
//! `GameState` owns the board, the move ledger, the player to move and the
//! two mark grids. Front-ends never touch the board directly; they issue
//! commands (`make_move`, `undo_last_two`, `load`, ...) and read back through
//! the accessors.
//!
//! Turn order is left to the caller: `make_move` does not switch
//! the player, so a front-end can check for a win first and only then call
//! `switch_player`.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::board::{Bitboard, Board, MoveLedger, Pos, Stone, BOARD_SIZE};
use crate::error::{GameError, Result};
use crate::persist;
use crate::rules::{find_threats, find_win_marks, has_five_at_pos};

/// Coarse game phase derived from the ledger and the win marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No stone played yet
    Empty,
    /// Stones on the board, no five
    InProgress,
    /// The last move completed five or more
    Won,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    ledger: MoveLedger,
    current: Stone,
    win_marks: Bitboard,
    threat_marks: Bitboard,
    /// Player who has been nudged and not yet told about it
    touched: Option<Stone>,
}

impl GameState {
    /// New game on the standard 15x15 board
    pub fn new() -> Self {
        Self::empty(BOARD_SIZE)
    }

    /// New game on a `size` x `size` board
    pub fn with_size(size: usize) -> Result<Self> {
        if !Board::is_valid_size(size) {
            return Err(GameError::InvalidBoardSize(size));
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Self {
            board: Board::new(size),
            ledger: MoveLedger::with_capacity(size * size),
            current: Stone::Black,
            win_marks: Bitboard::new(size),
            threat_marks: Bitboard::new(size),
            touched: None,
        }
    }

    /// Clear the board, history and marks; Black to move
    pub fn init(&mut self) {
        self.board.reset();
        self.ledger.clear();
        self.current = Stone::Black;
        self.win_marks.clear_all();
        self.threat_marks.clear_all();
        self.touched = None;
        debug!(size = self.size(), "game initialised");
    }

    /// Place the current player's stone on `pos`.
    ///
    /// Fails without touching anything if `pos` is off the board or occupied.
    /// Recomputes the win marks for the new stone but does not switch players.
    pub fn make_move(&mut self, pos: Pos) -> Result<()> {
        if !self.board.in_bounds(pos) {
            return Err(GameError::OutOfBounds { pos });
        }
        if !self.board.is_empty(pos) {
            return Err(GameError::Occupied { pos });
        }

        self.board.set(pos, self.current);
        self.ledger.push(pos);
        self.win_marks = find_win_marks(&self.board, pos);

        debug!(%pos, stone = %self.current, moves = self.ledger.len(), "move played");
        Ok(())
    }

    /// Hand the move to the other player
    pub fn switch_player(&mut self) {
        self.current = self.current.opponent();
    }

    /// Take back the last two moves, one per player.
    ///
    /// The player to move is left alone. Win and threat marks are cleared.
    pub fn undo_last_two(&mut self) -> Result<()> {
        let available = self.ledger.len();
        if available < 2 {
            return Err(GameError::InsufficientHistory {
                needed: 2,
                available,
            });
        }

        for pos in &self.ledger.as_slice()[available - 2..] {
            self.board.remove_stone(*pos);
        }
        self.ledger.truncate_last(2);
        self.win_marks.clear_all();
        self.threat_marks.clear_all();

        debug!(moves = self.ledger.len(), "undid two moves");
        Ok(())
    }

    /// Recompute the win marks for the stone on `pos` and return them
    pub fn mark_win(&mut self, pos: Pos) -> &Bitboard {
        self.win_marks = find_win_marks(&self.board, pos);
        &self.win_marks
    }

    /// Whether the stone on `pos` is part of a five. Refreshes the win marks.
    pub fn check_win(&mut self, pos: Pos) -> bool {
        if !has_five_at_pos(&self.board, pos) {
            self.win_marks.clear_all();
            return false;
        }
        !self.mark_win(pos).is_empty()
    }

    /// Recompute and return the threat marks.
    ///
    /// Flags every empty cell where the opponent of the player to move would
    /// complete five or build an open four.
    pub fn detect_threats(&mut self) -> &Bitboard {
        self.threat_marks = find_threats(&self.board, self.current.opponent());
        debug!(threats = self.threat_marks.count(), to_move = %self.current, "threats detected");
        &self.threat_marks
    }

    /// Write the move history to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        persist::write_file(path, &self.ledger)
    }

    /// Replace the game with the one saved at `path`.
    ///
    /// The file is read and validated in full first; on any error the current
    /// game is left exactly as it was.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let ledger = match persist::read_file(path, self.size()) {
            Ok(ledger) => ledger,
            Err(err) => {
                warn!(path = %path.display(), %err, "load rejected");
                return Err(err);
            }
        };

        self.board = board_from_moves(self.size(), ledger.as_slice());
        self.current = ledger.next_stone();
        self.win_marks = match ledger.last() {
            Some(last) => find_win_marks(&self.board, last),
            None => Bitboard::new(self.size()),
        };
        self.threat_marks.clear_all();
        self.touched = None;
        self.ledger = ledger;

        info!(
            path = %path.display(),
            moves = self.ledger.len(),
            to_move = %self.current,
            "game loaded"
        );
        Ok(())
    }

    /// Board as it stood right after the first `step` moves
    pub fn replay(&self, step: usize) -> Result<Board> {
        let len = self.ledger.len();
        if step > len {
            return Err(GameError::ReplayOutOfRange { step, len });
        }
        Ok(board_from_moves(self.size(), &self.ledger.as_slice()[..step]))
    }

    /// Record that the player not on move has been nudged
    pub fn touch_opponent(&mut self) {
        let target = self.current.opponent();
        self.touched = Some(target);
        debug!(%target, "opponent nudged");
    }

    /// True once the nudged player is the one to move
    pub fn was_touched(&self) -> bool {
        self.touched == Some(self.current)
    }

    pub fn clear_touch(&mut self) {
        self.touched = None;
    }

    // Queries

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current
    }

    /// Stone on `pos`, `None` if off the board
    #[inline]
    pub fn cell(&self, pos: Pos) -> Option<Stone> {
        self.board.in_bounds(pos).then(|| self.board.get(pos))
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.ledger.len()
    }

    #[inline]
    pub fn move_at(&self, index: usize) -> Option<Pos> {
        self.ledger.get(index)
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.ledger.last()
    }

    /// Win marks as of the last `make_move`, `mark_win`, `check_win` or `load`
    #[inline]
    pub fn win_marks(&self) -> &Bitboard {
        &self.win_marks
    }

    /// Threat marks as of the last `detect_threats`
    #[inline]
    pub fn threat_marks(&self) -> &Bitboard {
        &self.threat_marks
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn ledger(&self) -> &MoveLedger {
        &self.ledger
    }

    pub fn phase(&self) -> GamePhase {
        if !self.win_marks.is_empty() {
            GamePhase::Won
        } else if self.ledger.is_empty() {
            GamePhase::Empty
        } else {
            GamePhase::InProgress
        }
    }

    /// Color of the winning run, if the win marks hold one
    pub fn winner(&self) -> Option<Stone> {
        self.win_marks
            .iter_ones()
            .next()
            .map(|pos| self.board.get(pos))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuild a board from a move list, assigning colors by index parity.
///
/// Moves are assumed to be in range and distinct, as a validated ledger is.
pub fn board_from_moves(size: usize, moves: &[Pos]) -> Board {
    let mut board = Board::new(size);
    for (i, &pos) in moves.iter().enumerate() {
        board.set(pos, Stone::for_move_index(i));
    }
    board
}
