use super::super::{Board, Move, MoveList, Piece, Square, Type};

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    pub(crate) fn king_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        for &(dr, df) in &KING_OFFSETS {
            let to = from.offset(dr, df);
            if !to.is_valid() {
                continue;
            }
            match self.piece_at(to) {
                Some(blocker) if blocker.color == piece.color => {}
                _ => moves.push(Move::new(from, to)),
            }
        }
        self.castling_moves_into(from, piece, moves);
    }

    /// Adjacent squares only. Castling is deliberately absent so that
    /// attack computation never asks "is this square attacked" about
    /// itself.
    pub(crate) fn king_attacks_into(&self, from: Square, moves: &mut MoveList) {
        for &(dr, df) in &KING_OFFSETS {
            let to = from.offset(dr, df);
            if to.is_valid() {
                moves.push(Move::new(from, to));
            }
        }
    }

    /// Castling: king and rook unmoved, the squares between them empty,
    /// the king not in check, and none of the squares the king stands on,
    /// crosses or lands on attacked by the opponent.
    fn castling_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        if piece.has_moved {
            return;
        }
        let enemy = piece.color.opposite();
        if self.is_square_attacked(from, enemy) {
            return;
        }

        // (rook file, king target file, files that must be empty)
        let sides: [(i8, i8, &[i8]); 2] = [(7, 6, &[5, 6]), (0, 2, &[1, 2, 3])];
        for (rook_file, king_file, between) in sides {
            let rook_sq = Square::new(from.rank, rook_file);
            let rook_ok = self
                .piece_at(rook_sq)
                .map_or(false, |r| {
                    r.piece_type == Type::Rook && r.color == piece.color && !r.has_moved
                });
            if !rook_ok {
                continue;
            }
            if between
                .iter()
                .any(|&f| self.piece_at(Square::new(from.rank, f)).is_some())
            {
                continue;
            }
            let crossing = Square::new(from.rank, (from.file + king_file) / 2);
            let landing = Square::new(from.rank, king_file);
            if self.is_square_attacked(crossing, enemy) || self.is_square_attacked(landing, enemy)
            {
                continue;
            }
            moves.push(Move::new(from, landing));
        }
    }
}
