//! Line-oriented text front-end
//!
//! Reads commands from any `BufRead` and writes the board and messages to any
//! `Write`, so the same loop runs on stdin/stdout and in tests.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::board::{Bitboard, Board, Pos, Stone};
use crate::game::{GamePhase, GameState};
use crate::review::Review;

const HELP: &str = "\
Commands:
  <row> <col>   place a stone (e.g. 7 7)
  undo          take back the last two moves
  save [file]   save the game
  load [file]   load a saved game and continue
  touch         nudge your opponent
  threats       toggle threat markers
  review        step through the moves played so far
  new           start a new game
  help          show this help
  exit          quit
";

const REVIEW_HELP: &str = "Review: n = next, p = previous, r = restart, q = quit review";

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw coordinates as typed; range is checked when the move is played
    Move { row: i64, col: i64 },
    Undo,
    Save(Option<PathBuf>),
    Load(Option<PathBuf>),
    Touch,
    Threats,
    Review,
    New,
    Help,
    Exit,
}

impl Command {
    /// Parse one input line. `None` for anything unrecognised.
    pub fn parse(line: &str) -> Option<Command> {
        let mut words = line.split_whitespace();
        let head = words.next()?;
        let arg = words.next().map(PathBuf::from);

        let command = match head {
            "undo" => Command::Undo,
            "save" => Command::Save(arg),
            "load" => Command::Load(arg),
            "touch" => Command::Touch,
            "threats" => Command::Threats,
            "review" => Command::Review,
            "new" => Command::New,
            "help" | "?" => Command::Help,
            "exit" | "quit" => Command::Exit,
            _ => {
                let row: i64 = head.parse().ok()?;
                let col: i64 = arg.as_ref()?.to_str()?.parse().ok()?;
                if words.next().is_some() {
                    return None;
                }
                Command::Move { row, col }
            }
        };
        Some(command)
    }
}

/// Console session driving one game
pub struct Console<R, W> {
    game: GameState,
    input: R,
    output: W,
    save_path: PathBuf,
    show_threats: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(game: GameState, input: R, output: W, save_path: PathBuf) -> Self {
        Self {
            game,
            input,
            output,
            save_path,
            show_threats: true,
        }
    }

    pub fn with_threats(mut self, show: bool) -> Self {
        self.show_threats = show;
        self
    }

    pub fn into_game(self) -> GameState {
        self.game
    }

    /// Run until `exit` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Gomoku {0}x{0}. Type 'help' for commands.", self.game.size())?;
        loop {
            self.print_board()?;
            if self.game.phase() == GamePhase::Won {
                write!(self.output, "Game over. review / new / save / exit: ")?;
            } else {
                write!(self.output, "Player {} > ", self.game.current_player())?;
            }
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Some(Command::Exit) => return Ok(()),
                Some(command) => self.execute(command)?,
                None => writeln!(self.output, "Unknown command {:?}. Type 'help'.", line.trim())?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        debug!(?command, "console command");
        match command {
            Command::Move { row, col } => self.play(row, col)?,
            Command::Undo => match self.game.undo_last_two() {
                Ok(()) => writeln!(self.output, "Took back the last two moves.")?,
                Err(e) => writeln!(self.output, "Cannot undo: {e}")?,
            },
            Command::Save(path) => {
                let path = path.unwrap_or_else(|| self.save_path.clone());
                match self.game.save(&path) {
                    Ok(()) => writeln!(self.output, "Saved to {}", path.display())?,
                    Err(e) => writeln!(self.output, "Save failed: {e}")?,
                }
            }
            Command::Load(path) => {
                let path = path.unwrap_or_else(|| self.save_path.clone());
                match self.game.load(&path) {
                    Ok(()) => writeln!(
                        self.output,
                        "Loaded {} moves from {}.",
                        self.game.move_count(),
                        path.display()
                    )?,
                    Err(e) => writeln!(self.output, "Load failed: {e}")?,
                }
            }
            Command::Touch => {
                self.game.touch_opponent();
                let target = self.game.current_player().opponent();
                writeln!(self.output, "You pat player {target} on the head.")?;
            }
            Command::Threats => {
                self.show_threats = !self.show_threats;
                let state = if self.show_threats { "on" } else { "off" };
                writeln!(self.output, "Threat markers {state}.")?;
            }
            Command::Review => self.review()?,
            Command::New => {
                self.game.init();
                writeln!(self.output, "New game.")?;
            }
            Command::Help => write!(self.output, "{HELP}")?,
            Command::Exit => {}
        }
        Ok(())
    }

    fn play(&mut self, row: i64, col: i64) -> io::Result<()> {
        if self.game.phase() == GamePhase::Won {
            return writeln!(self.output, "The game is over.");
        }
        let (Ok(r), Ok(c)) = (u8::try_from(row), u8::try_from(col)) else {
            return writeln!(self.output, "Invalid move: position ({row}, {col}) is off the board");
        };
        let pos = Pos::new(r, c);
        if let Err(e) = self.game.make_move(pos) {
            return writeln!(self.output, "Invalid move: {e}");
        }
        if self.game.check_win(pos) {
            self.print_board()?;
            return writeln!(self.output, "Player {} wins!", self.game.current_player());
        }

        self.game.switch_player();
        if self.game.was_touched() {
            writeln!(self.output, "Your opponent pats you on the head~")?;
            self.game.clear_touch();
        }
        Ok(())
    }

    fn review(&mut self) -> io::Result<()> {
        let Some(mut review) = Review::start(&self.game) else {
            return writeln!(self.output, "No moves to review.");
        };
        writeln!(self.output, "Reviewing {} moves. {REVIEW_HELP}", review.total())?;

        loop {
            let empty = Bitboard::new(self.game.size());
            let last = review.last_move().map(|(p, _)| p);
            render_board(&mut self.output, review.board(), last, &empty, &empty)?;
            match review.last_move() {
                Some((pos, stone)) => writeln!(
                    self.output,
                    "Move {}/{}: {stone} at {pos}",
                    review.step(),
                    review.total()
                )?,
                None => writeln!(self.output, "Move 0/{}", review.total())?,
            }
            write!(self.output, "review > ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            match line.trim() {
                "" | "n" | "next" => {
                    if !review.step_forward() {
                        writeln!(self.output, "End of game.")?;
                    }
                }
                "p" | "prev" => {
                    if !review.step_back() {
                        writeln!(self.output, "Already at the start.")?;
                    }
                }
                "r" | "restart" => review.restart(),
                "q" | "quit" | "exit" => break,
                _ => writeln!(self.output, "{REVIEW_HELP}")?,
            }
        }

        writeln!(self.output, "Review finished, back to the game.")
    }

    fn print_board(&mut self) -> io::Result<()> {
        if self.show_threats && self.game.phase() != GamePhase::Won {
            self.game.detect_threats();
        }
        let no_threats = Bitboard::new(self.game.size());
        let threats = if self.show_threats && self.game.phase() != GamePhase::Won {
            self.game.threat_marks()
        } else {
            &no_threats
        };
        render_board(
            &mut self.output,
            self.game.board(),
            self.game.last_move(),
            self.game.win_marks(),
            threats,
        )
    }
}

/// Draw the board as text.
///
/// Win marks are shown as `(X)`, the last move as `[X]`, threat cells as `!`
/// and empty cells as `.`.
pub fn render_board<W: Write>(
    out: &mut W,
    board: &Board,
    last_move: Option<Pos>,
    win_marks: &Bitboard,
    threats: &Bitboard,
) -> io::Result<()> {
    write!(out, "   ")?;
    for col in 0..board.size() {
        write!(out, "{col:>3}")?;
    }
    writeln!(out)?;

    for row in 0..board.size() {
        write!(out, "{row:>3}")?;
        for col in 0..board.size() {
            let pos = Pos::new(row as u8, col as u8);
            let stone = board.get(pos);
            let cell = match stone {
                Stone::Empty if threats.get(pos) => "  !".to_string(),
                Stone::Empty => "  .".to_string(),
                _ if win_marks.get(pos) => format!("({})", stone.symbol()),
                _ if last_move == Some(pos) => format!("[{}]", stone.symbol()),
                _ => format!("  {}", stone.symbol()),
            };
            write!(out, "{cell}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (GameState, String) {
        let mut output = Vec::new();
        let mut console = Console::new(
            GameState::new(),
            Cursor::new(script.as_bytes().to_vec()),
            &mut output,
            PathBuf::from("unused.txt"),
        );
        console.run().unwrap();
        let game = console.into_game();
        (game, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("7 8"), Some(Command::Move { row: 7, col: 8 }));
        assert_eq!(Command::parse("  undo "), Some(Command::Undo));
        assert_eq!(Command::parse("save"), Some(Command::Save(None)));
        assert_eq!(
            Command::parse("load games/a.txt"),
            Some(Command::Load(Some(PathBuf::from("games/a.txt"))))
        );
        assert_eq!(Command::parse("quit"), Some(Command::Exit));
        assert_eq!(Command::parse("7"), None);
        assert_eq!(Command::parse("7 8 9"), None);
        assert_eq!(Command::parse("-1 3"), Some(Command::Move { row: -1, col: 3 }));
        assert_eq!(Command::parse("7 x"), None);
        assert_eq!(Command::parse("dance"), None);
    }

    #[test]
    fn test_moves_alternate_players() {
        let (game, _) = run_script("7 7\n7 8\nexit\n");
        assert_eq!(game.cell(Pos::new(7, 7)), Some(Stone::Black));
        assert_eq!(game.cell(Pos::new(7, 8)), Some(Stone::White));
        assert_eq!(game.current_player(), Stone::Black);
    }

    #[test]
    fn test_invalid_move_keeps_turn() {
        let (game, out) = run_script("7 7\n7 7\n20 1\n");
        assert!(out.contains("already occupied"));
        assert!(out.contains("off the board"));
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.current_player(), Stone::White);
    }

    #[test]
    fn test_huge_coordinates_reported_off_board() {
        let (game, out) = run_script("300 1
-1 3
7 7
");
        assert!(!out.contains("Unknown command"));
        assert!(out.contains("position (300, 1) is off the board"));
        assert!(out.contains("position (-1, 3) is off the board"));
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.cell(Pos::new(7, 7)), Some(Stone::Black));
    }

    #[test]
    fn test_win_ends_game() {
        let script = "0 0\n1 0\n0 1\n1 1\n0 2\n1 2\n0 3\n1 3\n0 4\n5 5\n";
        let (game, out) = run_script(script);
        assert!(out.contains("Player X wins!"));
        assert!(out.contains("The game is over."));
        assert_eq!(game.phase(), GamePhase::Won);
        assert_eq!(game.move_count(), 9);
    }

    #[test]
    fn test_undo_command() {
        let (game, out) = run_script("undo\n7 7\n7 8\n8 8\nundo\n");
        assert!(out.contains("Cannot undo"));
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.current_player(), Stone::White);
    }

    #[test]
    fn test_touch_notice_shown_once() {
        let (_, out) = run_script("touch\n7 7\n7 8\n8 8\n");
        assert_eq!(out.matches("pats you on the head").count(), 1);
    }

    #[test]
    fn test_review_session() {
        let (game, out) = run_script("7 7\n7 8\nreview\nn\nn\nn\np\nq\n");
        assert!(out.contains("Reviewing 2 moves"));
        assert!(out.contains("Move 2/2: O at (7, 8)"));
        assert!(out.contains("End of game."));
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_save_and_load_commands() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.txt");
        let script = format!(
            "7 7\n7 8\nsave {0}\nnew\nload {0}\n",
            path.display()
        );
        let (game, out) = run_script(&script);
        assert!(out.contains("Saved to"));
        assert!(out.contains("Loaded 2 moves"));
        assert_eq!(game.move_count(), 2);
        assert_eq!(game.current_player(), Stone::Black);
    }

    #[test]
    fn test_render_board_markers() {
        let mut board = Board::new(5);
        board.set(Pos::new(0, 0), Stone::Black);
        board.set(Pos::new(0, 1), Stone::White);
        let mut threats = Bitboard::new(5);
        threats.set(Pos::new(4, 4));
        let mut out = Vec::new();
        render_board(&mut out, &board, Some(Pos::new(0, 1)), &Bitboard::new(5), &threats).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "  0  X[O]  .  .  .");
        assert_eq!(lines[5], "  4  .  .  .  .  !");
    }
}
