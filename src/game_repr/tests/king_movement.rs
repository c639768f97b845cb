use super::*;

// ==================== KING MOVEMENT TESTS ====================

#[test]
fn test_king_moves_one_square_any_direction() {
    let mut board = empty_board();
    place_moved(&mut board, "d4", Type::King, Color::White);
    place(&mut board, "h8", Type::King, Color::Black);

    let moves = board.legal_moves_from(sq("d4"));
    for to in ["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"] {
        assert!(has_move(&moves, "d4", to), "king should reach {}", to);
    }
    assert_eq!(moves.len(), 8);
}

#[test]
fn test_king_cannot_step_into_attack() {
    let mut board = empty_board();
    place_moved(&mut board, "e1", Type::King, Color::White);
    place(&mut board, "a2", Type::Rook, Color::Black);
    place(&mut board, "h8", Type::King, Color::Black);

    let moves = board.legal_moves_from(sq("e1"));
    assert!(!has_move(&moves, "e1", "d2"), "rank 2 is covered by the rook");
    assert!(!has_move(&moves, "e1", "e2"));
    assert!(!has_move(&moves, "e1", "f2"));
    assert!(has_move(&moves, "e1", "d1"));
    assert!(has_move(&moves, "e1", "f1"));
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    let mut board = empty_board();
    place_moved(&mut board, "e1", Type::King, Color::White);
    place(&mut board, "e2", Type::Knight, Color::Black);
    place(&mut board, "f4", Type::Bishop, Color::Black);
    place(&mut board, "h8", Type::King, Color::Black);

    let moves = board.legal_moves_from(sq("e1"));
    assert!(
        !has_move(&moves, "e1", "e2"),
        "knight on e2 is defended by the f4 bishop"
    );
}

#[test]
fn test_kings_cannot_touch() {
    let mut board = empty_board();
    place_moved(&mut board, "d4", Type::King, Color::White);
    place_moved(&mut board, "d6", Type::King, Color::Black);

    let moves = board.legal_moves_from(sq("d4"));
    assert!(!has_move(&moves, "d4", "c5"));
    assert!(!has_move(&moves, "d4", "d5"));
    assert!(!has_move(&moves, "d4", "e5"));
    assert!(has_move(&moves, "d4", "d3"));
}
