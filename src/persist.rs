//! Save file format
//!
//! Plain text, one record per line:
//!
//! ```text
//! <move count>
//! <row> <col>
//! <row> <col>
//! ...
//! ```
//!
//! Player colors are not stored; entry `i` belongs to Black when `i` is even
//! and White when it is odd. Parsing is all-or-nothing: the whole file is
//! validated before a ledger is returned.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::board::{Bitboard, MoveLedger, Pos};
use crate::error::{GameError, Result};

/// Render a ledger in save-file form
pub fn encode(ledger: &MoveLedger) -> String {
    let records: String = ledger
        .iter()
        .map(|pos| format!("{} {}\n", pos.row, pos.col))
        .collect();
    format!("{}\n{records}", ledger.len())
}

/// Parse save-file text for a board of side `size`.
///
/// Rejects a missing or out-of-range count, records without exactly two
/// integers, coordinates off the board, a cell played twice, fewer records
/// than declared and any non-blank text after the last record.
pub fn parse(text: &str, size: usize) -> Result<MoveLedger> {
    let max_moves = size * size;
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

    let (count_line, count_text) = lines
        .next()
        .ok_or_else(|| GameError::malformed(1, "missing move count"))?;
    let count: i64 = count_text
        .parse()
        .map_err(|_| {
            GameError::malformed(count_line, format!("invalid move count {count_text:?}"))
        })?;
    if count < 0 || count as usize > max_moves {
        return Err(GameError::malformed(
            count_line,
            format!("move count {count} outside 0..={max_moves}"),
        ));
    }
    let count = count as usize;

    let mut ledger = MoveLedger::with_capacity(count);
    let mut seen = Bitboard::new(size);
    for index in 0..count {
        let (line, record) = lines.next().ok_or_else(|| {
            GameError::malformed(
                count_line + index + 1,
                format!("expected {count} moves, found {index}"),
            )
        })?;
        let pos = parse_record(line, record, size)?;
        if seen.get(pos) {
            return Err(GameError::malformed(line, format!("cell {pos} played twice")));
        }
        seen.set(pos);
        ledger.push(pos);
    }

    if let Some((line, _)) = lines.find(|(_, l)| !l.is_empty()) {
        return Err(GameError::malformed(line, "unexpected data after last move"));
    }

    Ok(ledger)
}

fn parse_record(line: usize, record: &str, size: usize) -> Result<Pos> {
    let tokens: Vec<&str> = record.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(GameError::malformed(
            line,
            format!("expected \"<row> <col>\", got {record:?}"),
        ));
    };
    let coord = |token: &str| -> Result<u8> {
        let value: i64 = token
            .parse()
            .map_err(|_| GameError::malformed(line, format!("invalid coordinate {token:?}")))?;
        if value < 0 || value as usize >= size {
            return Err(GameError::malformed(
                line,
                format!("coordinate {value} outside 0..{size}"),
            ));
        }
        Ok(value as u8)
    };
    Ok(Pos::new(coord(*row)?, coord(*col)?))
}

/// Write a ledger to `path`.
///
/// The data goes to `<path>.tmp` first and is renamed over the target, so an
/// interrupted save leaves the previous file in place.
pub fn write_file(path: &Path, ledger: &MoveLedger) -> Result<()> {
    let io_err = |source| GameError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let tmp_path = tmp_path_for(path)?;
    fs::write(&tmp_path, encode(ledger)).map_err(io_err)?;
    if let Err(source) = fs::rename(&tmp_path, path) {
        if let Err(e) = fs::remove_file(&tmp_path) {
            warn!(path = %tmp_path.display(), "failed to remove temp save: {}", e);
        }
        return Err(io_err(source));
    }

    info!(path = %path.display(), moves = ledger.len(), "game saved");
    Ok(())
}

/// Read and validate a save file for a board of side `size`
pub fn read_file(path: &Path, size: usize) -> Result<MoveLedger> {
    let text = fs::read_to_string(path).map_err(|source| GameError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let ledger = parse(&text, size)?;
    debug!(path = %path.display(), moves = ledger.len(), "save file parsed");
    Ok(ledger)
}

fn tmp_path_for(path: &Path) -> Result<PathBuf> {
    match path.file_name() {
        Some(name) => {
            let mut tmp_name = OsString::from(name);
            tmp_name.push(".tmp");
            Ok(path.with_file_name(tmp_name))
        }
        None => Err(GameError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "save path has no file name",
            ),
        }),
    }
}
