//! Per-piece pseudo-legal and attack geometry, one file per piece.
//!
//! Each generator appends into a caller-provided buffer. The attack
//! variants describe the squares a piece bears on: sliders stop at the
//! first occupied square but include it regardless of its color, and
//! pawn attacks are the two capture diagonals whether or not anything
//! stands there. Only the pseudo-legal variants care about what a move
//! could actually land on.

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;

use super::{Board, Move, MoveList, Piece, Square};

pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Ray-slide pseudo-legal moves: empty squares, then at most one
    /// enemy-occupied square per direction.
    pub(crate) fn slide_moves_into(
        &self,
        from: Square,
        piece: Piece,
        directions: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in directions {
            let mut to = from.offset(dr, df);
            while to.is_valid() {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(blocker) => {
                        if blocker.color != piece.color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                to = to.offset(dr, df);
            }
        }
    }

    /// Ray-slide attacks: like `slide_moves_into` but the blocking square
    /// is included whoever owns it.
    pub(crate) fn slide_attacks_into(
        &self,
        from: Square,
        directions: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in directions {
            let mut to = from.offset(dr, df);
            while to.is_valid() {
                moves.push(Move::new(from, to));
                if self.piece_at(to).is_some() {
                    break;
                }
                to = to.offset(dr, df);
            }
        }
    }
}
