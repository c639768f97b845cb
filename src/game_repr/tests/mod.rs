use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Empty board for hand-built positions.
pub fn empty_board() -> Board {
    Board::empty()
}

/// Parse an algebraic square; panics on typos in test setup.
pub fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap_or_else(|| panic!("bad test square {:?}", s))
}

/// Place a fresh (unmoved) piece.
pub fn place(board: &mut Board, at: &str, piece_type: Type, color: Color) {
    board.set_piece(sq(at), Some(Piece::new(piece_type, color)));
}

/// Place a piece that has already moved.
pub fn place_moved(board: &mut Board, at: &str, piece_type: Type, color: Color) {
    let mut piece = Piece::new(piece_type, color);
    piece.has_moved = true;
    board.set_piece(sq(at), Some(piece));
}

/// Check if a from/to move exists in the move list.
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    let (from, to) = (sq(from), sq(to));
    moves.iter().any(|m| m.from == from && m.to == to)
}

/// Apply a from/to move, resolving it against the legal move list so
/// sequences read like a game score.
pub fn play(board: &mut Board, from: &str, to: &str) {
    let mv = Move::new(sq(from), sq(to));
    let legal = board.legal_moves(board.side_to_move);
    assert!(
        legal.contains(&mv),
        "move {}{} is not legal in {}",
        from,
        to,
        board.to_fen()
    );
    board.apply_move(mv);
}

// ==================== TEST MODULES ====================

mod king_movement;
mod pawn_movement;
