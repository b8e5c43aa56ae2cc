//! End-to-end checks through the public `GameState` surface

use gomoku::game::board_from_moves;
use gomoku::{GameError, GamePhase, GameState, Pos, Review, Stone};

/// Play `moves` alternately, switching after each move that does not win
fn play(game: &mut GameState, moves: &[(u8, u8)]) {
    for &(r, c) in moves {
        let pos = Pos::new(r, c);
        game.make_move(pos).unwrap();
        if !game.check_win(pos) {
            game.switch_player();
        }
    }
}

/// Deterministic scatter of distinct cells that never lines up five
fn scattered_moves(n: usize) -> Vec<(u8, u8)> {
    (0..n)
        .map(|i| {
            let row = (i * 2 % 15) as u8;
            let col = ((i / 8) * 3 + i % 2) as u8;
            (row, col)
        })
        .collect()
}

#[test]
fn save_then_load_restores_board_and_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.txt");

    let mut game = GameState::new();
    play(&mut game, &[(7, 7), (7, 8), (8, 7), (0, 14), (14, 0)]);
    game.save(&path).unwrap();

    let mut restored = GameState::new();
    restored.load(&path).unwrap();

    assert_eq!(restored.board(), game.board());
    assert_eq!(restored.ledger(), game.ledger());
    assert_eq!(restored.current_player(), Stone::White);
    assert_eq!(restored.move_count(), 5);
}

#[test]
fn save_file_is_count_then_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.txt");

    let mut game = GameState::new();
    play(&mut game, &[(7, 7), (7, 8)]);
    game.save(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "2\n7 7\n7 8\n");
}

#[test]
fn colors_follow_move_parity() {
    let moves = scattered_moves(20);
    let mut game = GameState::new();
    play(&mut game, &moves);

    assert_eq!(game.phase(), GamePhase::InProgress);
    for i in 0..game.move_count() {
        let pos = game.move_at(i).unwrap();
        let expected = if i % 2 == 0 { Stone::Black } else { Stone::White };
        assert_eq!(game.cell(pos), Some(expected), "move {i} at {pos}");
    }
}

#[test]
fn rejected_moves_change_nothing() {
    let mut game = GameState::new();
    play(&mut game, &[(7, 7)]);
    let board = game.board().clone();

    let err = game.make_move(Pos::new(7, 7)).unwrap_err();
    assert!(matches!(err, GameError::Occupied { .. }));
    let err = game.make_move(Pos::new(15, 0)).unwrap_err();
    assert!(matches!(err, GameError::OutOfBounds { .. }));
    assert!(err.is_invalid_move());

    assert_eq!(game.board(), &board);
    assert_eq!(game.move_count(), 1);
    assert_eq!(game.current_player(), Stone::White);
}

#[test]
fn five_in_each_orientation_wins() {
    let lines: [[(u8, u8); 5]; 4] = [
        [(2, 2), (2, 3), (2, 4), (2, 5), (2, 6)],
        [(2, 2), (3, 2), (4, 2), (5, 2), (6, 2)],
        [(2, 2), (3, 3), (4, 4), (5, 5), (6, 6)],
        [(2, 6), (3, 5), (4, 4), (5, 3), (6, 2)],
    ];
    let fillers = [(14, 0), (14, 2), (14, 4), (14, 6)];

    for line in lines {
        let mut game = GameState::new();
        for (i, &(r, c)) in line.iter().enumerate() {
            game.make_move(Pos::new(r, c)).unwrap();
            let won = game.check_win(Pos::new(r, c));
            if i < 4 {
                assert!(!won);
                game.switch_player();
                game.make_move(Pos::new(fillers[i].0, fillers[i].1)).unwrap();
                game.switch_player();
            } else {
                assert!(won, "line {line:?}");
                assert_eq!(game.win_marks().count(), 5);
                assert_eq!(game.winner(), Some(Stone::Black));
            }
        }
    }
}

#[test]
fn overline_marks_all_six() {
    let mut game = GameState::new();
    // Black: (7,2..=4) and (7,6..=7), White elsewhere; (7,5) then joins six
    play(
        &mut game,
        &[(7, 2), (0, 0), (7, 3), (0, 2), (7, 4), (0, 4), (7, 6), (0, 6), (7, 7), (0, 8)],
    );
    assert_eq!(game.phase(), GamePhase::InProgress);

    play(&mut game, &[(7, 5)]);
    assert_eq!(game.phase(), GamePhase::Won);
    assert_eq!(game.win_marks().count(), 6);
    for col in 2..=7 {
        assert!(game.win_marks().get(Pos::new(7, col)));
    }

    // Marking from an end of the run covers the same six cells
    assert_eq!(game.mark_win(Pos::new(7, 2)).count(), 6);
}

#[test]
fn undo_removes_pairs_until_history_runs_out() {
    let mut game = GameState::new();
    play(&mut game, &[(7, 7), (7, 8), (8, 7), (8, 8), (9, 9)]);

    game.undo_last_two().unwrap();
    assert_eq!(game.move_count(), 3);
    assert_eq!(game.cell(Pos::new(9, 9)), Some(Stone::Empty));
    assert_eq!(game.cell(Pos::new(8, 8)), Some(Stone::Empty));

    game.undo_last_two().unwrap();
    assert_eq!(game.move_count(), 1);

    let err = game.undo_last_two().unwrap_err();
    assert!(matches!(
        err,
        GameError::InsufficientHistory { needed: 2, available: 1 }
    ));
    assert_eq!(game.move_count(), 1);
    assert_eq!(game.cell(Pos::new(7, 7)), Some(Stone::Black));
}

#[test]
fn undo_keeps_the_player_to_move() {
    let mut game = GameState::new();
    play(&mut game, &[(7, 7), (7, 8), (8, 7)]);
    assert_eq!(game.current_player(), Stone::White);

    game.undo_last_two().unwrap();
    assert_eq!(game.current_player(), Stone::White);
    // Next stone is White at index 1, matching parity
    assert_eq!(game.ledger().next_stone(), Stone::White);
}

#[test]
fn open_four_ends_are_threats() {
    let mut game = GameState::new();
    // White builds (7,4)..(7,7), Black scatters along the top row
    play(
        &mut game,
        &[(0, 0), (7, 4), (0, 3), (7, 5), (0, 6), (7, 6), (0, 9), (7, 7)],
    );
    assert_eq!(game.current_player(), Stone::Black);

    let threats = game.detect_threats();
    assert!(threats.get(Pos::new(7, 3)));
    assert!(threats.get(Pos::new(7, 8)));
}

#[test]
fn replay_matches_history_at_every_step() {
    let moves = scattered_moves(12);
    let mut game = GameState::new();
    let mut snapshots = vec![game.board().clone()];
    for &(r, c) in &moves {
        game.make_move(Pos::new(r, c)).unwrap();
        snapshots.push(game.board().clone());
        game.switch_player();
    }

    for (k, snapshot) in snapshots.iter().enumerate() {
        assert_eq!(&game.replay(k).unwrap(), snapshot, "step {k}");
    }
    assert!(game.replay(moves.len() + 1).is_err());

    let positions: Vec<Pos> = moves.iter().map(|&(r, c)| Pos::new(r, c)).collect();
    assert_eq!(&board_from_moves(15, &positions), game.board());
}

#[test]
fn review_walks_the_whole_game() {
    let mut game = GameState::new();
    play(&mut game, &[(7, 7), (7, 8), (8, 7)]);

    let mut review = Review::start(&game).unwrap();
    assert!(review.at_start());
    while review.step_forward() {}
    assert!(review.at_end());
    assert_eq!(review.board(), game.board());
    assert_eq!(review.last_move(), Some((Pos::new(8, 7), Stone::Black)));
}

#[test]
fn column_five_example_game() {
    let mut game = GameState::new();
    let moves = [(7, 7), (7, 8), (8, 7), (8, 8), (9, 7)];
    play(&mut game, &moves);

    // Black plays the next two in a row; hand the turn back after White's slot
    assert_eq!(game.current_player(), Stone::White);
    game.switch_player();
    game.make_move(Pos::new(6, 7)).unwrap();
    assert!(!game.check_win(Pos::new(6, 7)));
    game.make_move(Pos::new(5, 7)).unwrap();

    assert!(game.check_win(Pos::new(5, 7)));
    let marks = game.win_marks();
    assert_eq!(marks.count(), 5);
    for row in 5..=9 {
        assert!(marks.get(Pos::new(row, 7)));
    }
}

#[test]
fn failed_load_keeps_the_current_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.txt");
    std::fs::write(&path, "3\n7 7\n7 8\n").unwrap();

    let mut game = GameState::new();
    play(&mut game, &[(1, 1), (2, 2)]);
    let board = game.board().clone();

    let err = game.load(&path).unwrap_err();
    assert!(matches!(err, GameError::Malformed { .. }));
    assert_eq!(game.board(), &board);
    assert_eq!(game.move_count(), 2);
    assert_eq!(game.current_player(), Stone::Black);

    let missing = dir.path().join("missing.txt");
    assert!(matches!(game.load(&missing), Err(GameError::Io { .. })));
    assert_eq!(game.move_count(), 2);
}

#[test]
fn loading_a_won_game_restores_win_marks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("won.txt");

    let mut game = GameState::new();
    play(
        &mut game,
        &[(3, 0), (4, 0), (3, 1), (4, 1), (3, 2), (4, 2), (3, 3), (4, 3), (3, 4)],
    );
    assert_eq!(game.winner(), Some(Stone::Black));
    game.save(&path).unwrap();

    let mut restored = GameState::new();
    restored.load(&path).unwrap();
    assert_eq!(restored.phase(), GamePhase::Won);
    assert_eq!(restored.winner(), Some(Stone::Black));
    assert_eq!(restored.win_marks().count(), 5);
}

#[test]
fn nudge_is_reported_to_the_opponent_once() {
    let mut game = GameState::new();
    game.touch_opponent();
    assert!(!game.was_touched());

    play(&mut game, &[(7, 7)]);
    assert!(game.was_touched());
    game.clear_touch();
    assert!(!game.was_touched());
}
