//! Error types for game commands and save files

use std::path::PathBuf;

use thiserror::Error;

use crate::board::Pos;

/// Everything a game command can refuse.
///
/// None of these are fatal; the game state is unchanged whenever one is returned.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("position {pos} is off the board")]
    OutOfBounds { pos: Pos },

    #[error("position {pos} is already occupied")]
    Occupied { pos: Pos },

    #[error("need at least {needed} moves to undo, only {available} played")]
    InsufficientHistory { needed: usize, available: usize },

    #[error("unsupported board size {0}")]
    InvalidBoardSize(usize),

    #[error("cannot replay {step} moves, history has {len}")]
    ReplayOutOfRange { step: usize, len: usize },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed save data at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

impl GameError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        GameError::Malformed {
            line,
            reason: reason.into(),
        }
    }

    /// True for the errors a player causes by clicking a bad cell
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, GameError::OutOfBounds { .. } | GameError::Occupied { .. })
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
