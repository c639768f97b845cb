// Static position evaluation
// Returns score in centipawns, positive = good for the given perspective.

use super::piece_square_tables::pst_value;
use crate::game_repr::{Board, Color, Square};

/// Divisor scaling the attacked-material "activity" reward.
const ACTIVITY_DIVISOR: i32 = 10;

/// Pure function of the board: material + tension + activity + piece
/// placement, all additive and independent of search depth or history.
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    let attacked_by_white = attack_map(board, Color::White);
    let attacked_by_black = attack_map(board, Color::Black);

    let mut score = 0;
    for rank in 0..8 {
        for file in 0..8 {
            let square = Square::new(rank, file);
            let piece = match board.piece_at(square) {
                Some(p) => p,
                None => continue,
            };
            let sign = if piece.color == perspective { 1 } else { -1 };
            let value = piece.piece_type.value();

            // Material and placement.
            score += sign * value;
            score += sign * pst_value(piece.piece_type, square, piece.color);

            // Tension: hanging pieces hurt their owner, contested but
            // defended pieces nag a little.
            let (own_map, enemy_map) = match piece.color {
                Color::White => (&attacked_by_white, &attacked_by_black),
                Color::Black => (&attacked_by_black, &attacked_by_white),
            };
            let idx = (rank * 8 + file) as usize;
            if enemy_map[idx] {
                if own_map[idx] {
                    score -= sign * value / 100;
                } else {
                    score -= sign * value / 10;
                }
            }

            // Activity: pressure on enemy material, capture or not.
            let mut attacked_value = 0;
            for mv in board.attack_moves(square) {
                if let Some(target) = board.piece_at(mv.to) {
                    if target.color != piece.color {
                        attacked_value += target.piece_type.value();
                    }
                }
            }
            score += sign * attacked_value / ACTIVITY_DIVISOR;
        }
    }
    score
}

/// One bit per square: does `by` bear on it with any piece.
fn attack_map(board: &Board, by: Color) -> [bool; 64] {
    let mut map = [false; 64];
    for (from, _) in board.squares_with_pieces(by) {
        for mv in board.attack_moves(from) {
            map[(mv.to.rank * 8 + mv.to.file) as usize] = true;
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{Move, Piece, Type};

    fn place(board: &mut Board, at: &str, piece_type: Type, color: Color) {
        board.set_piece(
            Square::from_algebraic(at).unwrap(),
            Some(Piece::new(piece_type, color)),
        );
    }

    #[test]
    fn test_starting_position_is_symmetric() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Color::White), -evaluate(&board, Color::Black));
        assert_eq!(evaluate(&board, Color::White), 0);
    }

    #[test]
    fn test_material_advantage_dominates() {
        let mut board = Board::empty();
        place(&mut board, "e1", Type::King, Color::White);
        place(&mut board, "e8", Type::King, Color::Black);
        place(&mut board, "d4", Type::Queen, Color::White);

        assert!(evaluate(&board, Color::White) > 700);
        assert!(evaluate(&board, Color::Black) < -700);
    }

    #[test]
    fn test_hanging_piece_is_penalized() {
        // Same material either way; in one position the white knight
        // hangs to the black rook, in the other it is out of reach.
        let mut hanging = Board::empty();
        place(&mut hanging, "a1", Type::King, Color::White);
        place(&mut hanging, "h8", Type::King, Color::Black);
        place(&mut hanging, "d4", Type::Knight, Color::White);
        place(&mut hanging, "d8", Type::Rook, Color::Black);

        let mut safe = Board::empty();
        place(&mut safe, "a1", Type::King, Color::White);
        place(&mut safe, "h8", Type::King, Color::Black);
        place(&mut safe, "c4", Type::Knight, Color::White);
        place(&mut safe, "d8", Type::Rook, Color::Black);

        let hanging_score = evaluate(&hanging, Color::White);
        let safe_score = evaluate(&safe, Color::White);
        assert!(
            hanging_score < safe_score,
            "hanging {} vs safe {}",
            hanging_score,
            safe_score
        );
    }

    #[test]
    fn test_defended_piece_hurts_less_than_hanging() {
        // Identical material; only the pawn's placement decides whether
        // the attacked knight counts as defended.
        let mut base = Board::empty();
        place(&mut base, "a1", Type::King, Color::White);
        place(&mut base, "h8", Type::King, Color::Black);
        place(&mut base, "d4", Type::Knight, Color::White);
        place(&mut base, "d8", Type::Rook, Color::Black);

        let mut defended = base.clone();
        place(&mut defended, "e3", Type::Pawn, Color::White);
        let mut undefended = base.clone();
        place(&mut undefended, "h2", Type::Pawn, Color::White);

        assert!(evaluate(&defended, Color::White) > evaluate(&undefended, Color::White));
    }

    #[test]
    fn test_capture_improves_score() {
        let mut board = Board::empty();
        place(&mut board, "a1", Type::King, Color::White);
        place(&mut board, "h8", Type::King, Color::Black);
        place(&mut board, "d1", Type::Rook, Color::White);
        place(&mut board, "d5", Type::Queen, Color::Black);

        let before = evaluate(&board, Color::White);
        let mut after = board.clone();
        after.apply_move(Move::new(
            Square::from_algebraic("d1").unwrap(),
            Square::from_algebraic("d5").unwrap(),
        ));
        assert!(evaluate(&after, Color::White) > before + 700);
    }
}
