//! Canonical position encoding.
//!
//! The encoding is standard FEN, produced as a pure function of the
//! board's visible state: placement from rank 8 down to rank 1 with
//! run-length digits, side to move, castling rights computed live from
//! the king/rook `has_moved` flags, the en-passant target only when a
//! pawn of the side to move could actually take this ply, a halfmove
//! clock fixed at 0 (not tracked) and a fullmove number derived from the
//! history length. This string is the opening-book lookup key, so it must
//! match exactly what the book data was keyed with.

use super::{Board, Color, Piece, Square, Type};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    MissingField(&'static str),
    BadPlacement(String),
    BadSideToMove(String),
    BadEnPassant(String),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::MissingField(name) => write!(f, "missing FEN field: {}", name),
            FenError::BadPlacement(s) => write!(f, "bad piece placement: {}", s),
            FenError::BadSideToMove(s) => write!(f, "bad side to move: {}", s),
            FenError::BadEnPassant(s) => write!(f, "bad en passant square: {}", s),
        }
    }
}

impl std::error::Error for FenError {}

impl Board {
    /// Encode the position as a single-line canonical key.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(80);

        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                match self.piece_at(Square::new(rank, file)) {
                    None => empty_run += 1,
                    Some(piece) => {
                        if empty_run > 0 {
                            fen.push((b'0' + empty_run) as char);
                            empty_run = 0;
                        }
                        fen.push(piece.to_char());
                    }
                }
            }
            if empty_run > 0 {
                fen.push((b'0' + empty_run) as char);
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let rights = self.castling_rights();
        if rights.is_empty() {
            fen.push('-');
        } else {
            fen.push_str(&rights);
        }

        fen.push(' ');
        match self.en_passant_target.filter(|&t| self.en_passant_capturable(t)) {
            Some(target) => fen.push_str(&target.to_string()),
            None => fen.push('-'),
        }

        // Halfmove clock is not tracked; fullmove number falls out of the
        // history length.
        fen.push_str(&format!(" 0 {}", self.history.len() / 2 + 1));
        fen
    }

    /// Castling availability read live off the `has_moved` flags; no
    /// separate rights state exists to go stale.
    fn castling_rights(&self) -> String {
        let mut rights = String::new();
        for (color, king_c, queen_c) in [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')] {
            let home = match color {
                Color::White => 0,
                Color::Black => 7,
            };
            let king_ok = self
                .piece_at(Square::new(home, 4))
                .map_or(false, |p| {
                    p.piece_type == Type::King && p.color == color && !p.has_moved
                });
            if !king_ok {
                continue;
            }
            for (file, c) in [(7, king_c), (0, queen_c)] {
                let rook_ok = self
                    .piece_at(Square::new(home, file))
                    .map_or(false, |p| {
                        p.piece_type == Type::Rook && p.color == color && !p.has_moved
                    });
                if rook_ok {
                    rights.push(c);
                }
            }
        }
        rights
    }

    /// The en-passant field is emitted only when an opposing pawn stands
    /// diagonally behind the target, i.e. the capture really is available
    /// this ply.
    fn en_passant_capturable(&self, target: Square) -> bool {
        let side = self.side_to_move;
        let capturer_rank = target.rank - side.forward();
        [-1, 1].iter().any(|&df| {
            self.piece_at(Square::new(capturer_rank, target.file + df))
                .map_or(false, |p| p.piece_type == Type::Pawn && p.color == side)
        })
    }

    /// Parse a FEN string. Castling-rights letters map back onto the
    /// `has_moved` flags of the affected king and rooks; pawns off their
    /// home rank are marked moved so the double push stays unavailable.
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::MissingField("placement"))?;

        let mut board = Board::empty();
        let mut rank: i8 = 7;
        let mut file: i8 = 0;
        for c in placement.chars() {
            match c {
                '/' => {
                    if file != 8 {
                        return Err(FenError::BadPlacement(placement.to_string()));
                    }
                    rank -= 1;
                    file = 0;
                    if rank < 0 {
                        return Err(FenError::BadPlacement(placement.to_string()));
                    }
                }
                '1'..='8' => file += c as i8 - '0' as i8,
                _ => {
                    let mut piece = Piece::from_char(c)
                        .ok_or_else(|| FenError::BadPlacement(placement.to_string()))?;
                    if piece.piece_type == Type::Pawn {
                        let home = match piece.color {
                            Color::White => 1,
                            Color::Black => 6,
                        };
                        piece.has_moved = rank != home;
                    }
                    board.set_piece(Square::new(rank, file), Some(piece));
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::BadPlacement(placement.to_string()));
            }
        }

        board.side_to_move = match parts.next() {
            Some("w") | None => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::BadSideToMove(other.to_string())),
        };

        let rights = parts.next().unwrap_or("-");
        board.apply_castling_rights(rights);

        match parts.next() {
            Some("-") | None => {}
            Some(ep) => {
                let target =
                    Square::from_algebraic(ep).ok_or_else(|| FenError::BadEnPassant(ep.to_string()))?;
                board.en_passant_target = Some(target);
            }
        }

        // Halfmove clock and fullmove number are ignored; neither is part
        // of the tracked state.
        Ok(board)
    }

    fn apply_castling_rights(&mut self, rights: &str) {
        for (color, king_c, queen_c) in [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')] {
            let home = match color {
                Color::White => 0,
                Color::Black => 7,
            };
            let kingside = rights.contains(king_c);
            let queenside = rights.contains(queen_c);
            if !kingside {
                self.mark_moved(Square::new(home, 7), color, Type::Rook);
            }
            if !queenside {
                self.mark_moved(Square::new(home, 0), color, Type::Rook);
            }
            if !kingside && !queenside {
                self.mark_moved(Square::new(home, 4), color, Type::King);
            }
        }
    }

    fn mark_moved(&mut self, square: Square, color: Color, piece_type: Type) {
        if let Some(mut piece) = self.piece_at(square) {
            if piece.color == color && piece.piece_type == piece_type {
                piece.has_moved = true;
                self.set_piece(square, Some(piece));
            }
        }
    }
}
