use super::super::{Board, Move, MoveList, Piece, Square, Type};

const PROMOTION_TYPES: [Type; 4] = [Type::Queen, Type::Rook, Type::Bishop, Type::Knight];

impl Board {
    pub(crate) fn pawn_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        let dir = piece.color.forward();

        // Single push, and the double push while still on the home rank.
        let one = from.offset(dir, 0);
        if one.is_valid() && self.piece_at(one).is_none() {
            push_maybe_promoting(from, one, moves);
            let two = from.offset(2 * dir, 0);
            if !piece.has_moved && two.is_valid() && self.piece_at(two).is_none() {
                moves.push(Move::new(from, two));
            }
        }

        // Diagonal captures, including onto the en-passant target.
        for df in [-1, 1] {
            let to = from.offset(dir, df);
            if !to.is_valid() {
                continue;
            }
            let takes_enemy = self
                .piece_at(to)
                .map_or(false, |p| p.color != piece.color);
            let takes_en_passant = Some(to) == self.en_passant_target;
            if takes_enemy || takes_en_passant {
                push_maybe_promoting(from, to, moves);
            }
        }
    }

    /// The two capture diagonals, occupied or not. No pushes: a pawn
    /// never attacks the square in front of it.
    pub(crate) fn pawn_attacks_into(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        let dir = piece.color.forward();
        for df in [-1, 1] {
            let to = from.offset(dir, df);
            if to.is_valid() {
                moves.push(Move::new(from, to));
            }
        }
    }
}

fn push_maybe_promoting(from: Square, to: Square, moves: &mut MoveList) {
    if to.rank == 0 || to.rank == 7 {
        for promo in PROMOTION_TYPES {
            moves.push(Move::promoting(from, to, promo));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}
