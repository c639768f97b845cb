// Piece-square tables for positional evaluation
// All values in centipawns (100 = 1 pawn)
// Tables are from White's perspective (rank 1 first); Black pieces read
// the table mirrored by rank.

use crate::game_repr::{Color, Square, Type};

// Pawn position values - encourage advancement and central control
pub const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 1 (pawns shouldn't be here)
     5, 10, 10,-20,-20, 10, 10,  5,  // Rank 2
     5, -5,-10,  0,  0,-10, -5,  5,  // Rank 3
     0,  0,  0, 20, 20,  0,  0,  0,  // Rank 4
     5,  5, 10, 25, 25, 10,  5,  5,  // Rank 5
    10, 10, 20, 30, 30, 20, 10, 10,  // Rank 6
    50, 50, 50, 50, 50, 50, 50, 50,  // Rank 7 (near promotion)
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 8
];

// Knight position values - prefer center squares
pub const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

// Bishop position values - prefer center and long diagonals
pub const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

// Rook position values - prefer 7th rank and center files
pub const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,  // Rank 7 bonus
     0,  0,  0,  0,  0,  0,  0,  0,
];

// Queen position values - slight central preference
pub const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -10,  5,  5,  5,  5,  5,  0,-10,
      0,  0,  5,  5,  5,  5,  0, -5,
     -5,  0,  5,  5,  5,  5,  0, -5,
    -10,  0,  5,  5,  5,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

// King position values - prefer safety on the back rank
pub const KING_TABLE: [i32; 64] = [
     20, 30, 10,  0,  0, 10, 30, 20,  // Rank 1 (castled position)
     20, 20,  0,  0,  0,  0, 20, 20,
    -10,-20,-20,-20,-20,-20,-20,-10,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
];

/// Positional bonus for a piece on a square. Tables are written from
/// White's viewpoint; Black reads them mirrored by rank.
pub fn pst_value(piece_type: Type, square: Square, color: Color) -> i32 {
    if !square.is_valid() {
        return 0;
    }
    let rank = match color {
        Color::White => square.rank,
        Color::Black => 7 - square.rank,
    };
    let idx = (rank * 8 + square.file) as usize;
    match piece_type {
        Type::Pawn => PAWN_TABLE[idx],
        Type::Knight => KNIGHT_TABLE[idx],
        Type::Bishop => BISHOP_TABLE[idx],
        Type::Rook => ROOK_TABLE[idx],
        Type::Queen => QUEEN_TABLE[idx],
        Type::King => KING_TABLE[idx],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_prefers_advancement() {
        let rank2 = pst_value(Type::Pawn, Square::new(1, 3), Color::White);
        let rank7 = pst_value(Type::Pawn, Square::new(6, 3), Color::White);
        assert!(rank7 > rank2);
    }

    #[test]
    fn test_knight_prefers_center() {
        let center = pst_value(Type::Knight, Square::new(3, 3), Color::White);
        let corner = pst_value(Type::Knight, Square::new(0, 0), Color::White);
        assert!(center > corner);
    }

    #[test]
    fn test_king_prefers_back_rank() {
        let castled = pst_value(Type::King, Square::new(0, 6), Color::White);
        let center = pst_value(Type::King, Square::new(3, 3), Color::White);
        assert!(castled > center);
    }

    #[test]
    fn test_black_reads_tables_mirrored() {
        let white_d2 = pst_value(Type::Pawn, Square::new(1, 3), Color::White);
        let black_d7 = pst_value(Type::Pawn, Square::new(6, 3), Color::Black);
        assert_eq!(white_d2, black_d7);

        let white_g1 = pst_value(Type::King, Square::new(0, 6), Color::White);
        let black_g8 = pst_value(Type::King, Square::new(7, 6), Color::Black);
        assert_eq!(white_g1, black_g8);
    }
}
