use super::super::{Board, MoveList, Piece, Square};
use super::{DIAGONAL, ORTHOGONAL};

impl Board {
    pub(crate) fn queen_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        self.slide_moves_into(from, piece, &ORTHOGONAL, moves);
        self.slide_moves_into(from, piece, &DIAGONAL, moves);
    }

    pub(crate) fn queen_attacks_into(&self, from: Square, moves: &mut MoveList) {
        self.slide_attacks_into(from, &ORTHOGONAL, moves);
        self.slide_attacks_into(from, &DIAGONAL, moves);
    }
}
