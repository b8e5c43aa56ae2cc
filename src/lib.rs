//! Two-player Gomoku on a square grid
//!
//! Free-style rules on a 15x15 board by default:
//! - Black (X) moves first, colors alternate by move index
//! - Five or more in a row wins (overlines count)
//! - No captures, no forbidden moves
//!
//! # Architecture
//!
//! - [`board`]: Grid representation with bitboards and the move ledger
//! - [`rules`]: Run scanning, win detection and threat detection
//! - [`game`]: Game state orchestration (moves, undo, marks, nudge)
//! - [`persist`]: Plain-text save/load of the move ledger
//! - [`review`]: Step-through replay of a finished or ongoing game
//! - [`console`] and [`ui`]: Terminal and egui front-ends
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameState, Pos, Stone};
//!
//! let mut game = GameState::new();
//! for col in 0..5 {
//!     game.make_move(Pos::new(7, col)).unwrap();
//!     if game.check_win(Pos::new(7, col)) {
//!         break;
//!     }
//!     game.switch_player();
//!     game.make_move(Pos::new(8, col)).unwrap();
//!     game.switch_player();
//! }
//! assert_eq!(game.winner(), Some(Stone::Black));
//! assert_eq!(game.win_marks().count(), 5);
//! ```

pub mod board;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod persist;
pub mod review;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Bitboard, Board, MoveLedger, Pos, Stone, BOARD_SIZE};
pub use error::{GameError, Result};
pub use game::{GamePhase, GameState};
pub use review::Review;
