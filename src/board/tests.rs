use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_symbols() {
    assert_eq!(Stone::Black.symbol(), 'X');
    assert_eq!(Stone::White.symbol(), 'O');
    assert_eq!(Stone::Empty.symbol(), ' ');
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(BOARD_SIZE), 7 * 15 + 7);
    assert_eq!(pos.to_index(BOARD_SIZE), 112);

    let pos2 = Pos::from_index(112, BOARD_SIZE);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 3);
    assert_eq!(pos.offset(1, 1, 2), Some(Pos::new(2, 5)));
    assert_eq!(pos.offset(-1, 0, 1), None);
    assert_eq!(pos.offset(1, -1, 3), Some(Pos::new(3, 0)));
    assert_eq!(pos.offset(1, -1, 4), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert!(Board::is_valid_size(BOARD_SIZE));
    assert!(!Board::is_valid_size(4));
    assert!(!Board::is_valid_size(MAX_BOARD_SIZE + 1));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_board_bounds() {
    let board = Board::default();
    assert!(board.in_bounds(Pos::new(0, 0)));
    assert!(board.in_bounds(Pos::new(14, 14)));
    assert!(!board.in_bounds(Pos::new(15, 0)));
    assert!(!board.in_bounds(Pos::new(0, 15)));
}

#[test]
fn test_board_out_of_range_access() {
    let mut board = Board::default();
    let outside = Pos::new(15, 3);
    board.set(outside, Stone::Black);
    assert_eq!(board.get(outside), Stone::Empty);
    assert!(!board.is_empty(outside));
    assert_eq!(board.stone_count(), 0);
}

#[test]
fn test_board_set_and_reset() {
    let mut board = Board::default();
    let pos = Pos::new(3, 4);
    board.set(pos, Stone::Black);
    assert_eq!(board.get(pos), Stone::Black);
    board.set(pos, Stone::White);
    assert_eq!(board.get(pos), Stone::White);
    assert_eq!(board.stone_count(), 1);
    board.set(pos, Stone::Empty);
    assert!(board.is_empty(pos));

    board.set(Pos::new(0, 0), Stone::Black);
    board.set(Pos::new(14, 14), Stone::White);
    board.reset();
    assert!(board.is_board_empty());
}

#[test]
fn test_board_custom_size() {
    let board = Board::new(9);
    assert_eq!(board.size(), 9);
    assert_eq!(board.cell_count(), 81);
    assert_eq!(board.positions().count(), 81);
    assert!(!board.in_bounds(Pos::new(9, 0)));
}
