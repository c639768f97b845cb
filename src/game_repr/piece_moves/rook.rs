use super::super::{Board, MoveList, Piece, Square};
use super::ORTHOGONAL;

impl Board {
    pub(crate) fn rook_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        self.slide_moves_into(from, piece, &ORTHOGONAL, moves);
    }

    pub(crate) fn rook_attacks_into(&self, from: Square, moves: &mut MoveList) {
        self.slide_attacks_into(from, &ORTHOGONAL, moves);
    }
}
