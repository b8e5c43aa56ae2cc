//! Game rules for Gomoku
//!
//! This module implements the rule set:
//! - Run scanning along the four line directions
//! - Win conditions (five or more in a row)
//! - Threat detection (immediate five, open four)

pub mod scan;
pub mod threat;
pub mod win;

// Re-exports for convenient access
pub use scan::{scan_run, RunScan, DIRECTIONS};
pub use threat::{find_threats, threat_at, ThreatKind};
pub use win::{find_win_marks, has_five_at_pos, WIN_LENGTH};
