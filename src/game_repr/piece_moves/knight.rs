use super::super::{Board, Move, MoveList, Piece, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl Board {
    pub(crate) fn knight_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        for &(dr, df) in &KNIGHT_OFFSETS {
            let to = from.offset(dr, df);
            if !to.is_valid() {
                continue;
            }
            match self.piece_at(to) {
                Some(blocker) if blocker.color == piece.color => {}
                _ => moves.push(Move::new(from, to)),
            }
        }
    }

    pub(crate) fn knight_attacks_into(&self, from: Square, moves: &mut MoveList) {
        for &(dr, df) in &KNIGHT_OFFSETS {
            let to = from.offset(dr, df);
            if to.is_valid() {
                moves.push(Move::new(from, to));
            }
        }
    }
}
