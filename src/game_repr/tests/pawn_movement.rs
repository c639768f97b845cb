use super::*;

// ==================== PAWN MOVEMENT TESTS ====================

#[test]
fn test_pawn_single_and_double_push_from_home() {
    let mut board = empty_board();
    place(&mut board, "e2", Type::Pawn, Color::White);
    place(&mut board, "e1", Type::King, Color::White);
    place(&mut board, "e8", Type::King, Color::Black);

    let moves = board.legal_moves_from(sq("e2"));
    assert!(has_move(&moves, "e2", "e3"));
    assert!(has_move(&moves, "e2", "e4"));
    assert_eq!(moves.len(), 2);
}

#[test]
fn test_pawn_no_double_push_after_moving() {
    let mut board = empty_board();
    place_moved(&mut board, "e3", Type::Pawn, Color::White);
    place(&mut board, "e1", Type::King, Color::White);
    place(&mut board, "e8", Type::King, Color::Black);

    let moves = board.legal_moves_from(sq("e3"));
    assert!(has_move(&moves, "e3", "e4"));
    assert!(!has_move(&moves, "e3", "e5"));
}

#[test]
fn test_pawn_blocked_cannot_push() {
    let mut board = empty_board();
    place(&mut board, "e2", Type::Pawn, Color::White);
    place(&mut board, "e3", Type::Knight, Color::Black);
    place(&mut board, "a1", Type::King, Color::White);
    place(&mut board, "h8", Type::King, Color::Black);

    let moves = board.legal_moves_from(sq("e2"));
    assert!(moves.is_empty(), "blocked pawn has no forward moves");
}

#[test]
fn test_pawn_double_push_blocked_by_far_square() {
    let mut board = empty_board();
    place(&mut board, "e2", Type::Pawn, Color::White);
    place(&mut board, "e4", Type::Knight, Color::Black);
    place(&mut board, "a1", Type::King, Color::White);
    place(&mut board, "h8", Type::King, Color::Black);

    let moves = board.legal_moves_from(sq("e2"));
    assert!(has_move(&moves, "e2", "e3"));
    assert!(!has_move(&moves, "e2", "e4"));
}

#[test]
fn test_pawn_captures_diagonally_only() {
    let mut board = empty_board();
    place(&mut board, "e4", Type::Pawn, Color::White);
    place(&mut board, "d5", Type::Pawn, Color::Black);
    place(&mut board, "e5", Type::Pawn, Color::Black);
    place(&mut board, "a1", Type::King, Color::White);
    place(&mut board, "h8", Type::King, Color::Black);

    let moves = board.legal_moves_from(sq("e4"));
    assert!(has_move(&moves, "e4", "d5"), "diagonal capture");
    assert!(!has_move(&moves, "e4", "e5"), "cannot capture straight ahead");
    assert!(!has_move(&moves, "e4", "f5"), "no capture on empty diagonal");
}

#[test]
fn test_pawn_does_not_capture_own_piece() {
    let mut board = empty_board();
    place(&mut board, "e4", Type::Pawn, Color::White);
    place(&mut board, "d5", Type::Knight, Color::White);
    place(&mut board, "a1", Type::King, Color::White);
    place(&mut board, "h8", Type::King, Color::Black);

    let moves = board.legal_moves_from(sq("e4"));
    assert!(!has_move(&moves, "e4", "d5"));
}

#[test]
fn test_black_pawn_moves_down() {
    let mut board = empty_board();
    place(&mut board, "d7", Type::Pawn, Color::Black);
    place(&mut board, "a1", Type::King, Color::White);
    place(&mut board, "h8", Type::King, Color::Black);

    let moves = board.legal_moves_from(sq("d7"));
    assert!(has_move(&moves, "d7", "d6"));
    assert!(has_move(&moves, "d7", "d5"));
    assert!(!has_move(&moves, "d7", "d8"));
}

#[test]
fn test_pawn_no_file_wrap_on_a_file() {
    let mut board = empty_board();
    place(&mut board, "a4", Type::Pawn, Color::White);
    place(&mut board, "h5", Type::Pawn, Color::Black);
    place(&mut board, "a1", Type::King, Color::White);
    place(&mut board, "h8", Type::King, Color::Black);

    let moves = board.legal_moves_from(sq("a4"));
    assert!(
        !has_move(&moves, "a4", "h5"),
        "a-file pawn must not wrap to the h-file"
    );
}
