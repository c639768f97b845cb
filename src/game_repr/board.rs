use super::{Color, Move, Piece, Square, Type};
use smallvec::SmallVec;

/// Move list buffer sized for the busiest single piece (a centered queen
/// has 27 pseudo-legal moves).
pub type MoveList = SmallVec<[Move; 27]>;

/// Game state derived fresh from a board, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The named side is in check but has moves.
    Check(Color),
    /// The named side is mated.
    Checkmate(Color),
    Stalemate,
    DrawByMaterial,
}

/// Full game state: 8x8 grid, side to move, en-passant window, move
/// history and captured pieces.
///
/// Boards are value-copied for every trial move (legality filtering,
/// search branches, rollouts); nothing in the engine mutates a caller's
/// board behind its back.
#[derive(Debug, Clone)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
    /// The square a capturing pawn would land on, set only for the single
    /// ply after a two-square pawn advance.
    pub en_passant_target: Option<Square>,
    pub history: Vec<Move>,
    captured_by_white: Vec<Piece>,
    captured_by_black: Vec<Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        let back_rank = [
            Type::Rook,
            Type::Knight,
            Type::Bishop,
            Type::Queen,
            Type::King,
            Type::Bishop,
            Type::Knight,
            Type::Rook,
        ];
        for (file, &piece_type) in back_rank.iter().enumerate() {
            let file = file as i8;
            board.set_piece(Square::new(0, file), Some(Piece::new(piece_type, Color::White)));
            board.set_piece(Square::new(1, file), Some(Piece::new(Type::Pawn, Color::White)));
            board.set_piece(Square::new(7, file), Some(Piece::new(piece_type, Color::Black)));
            board.set_piece(Square::new(6, file), Some(Piece::new(Type::Pawn, Color::Black)));
        }
        board
    }

    /// Board with no pieces at all. Test scaffolding and FEN parsing both
    /// build on this.
    pub fn empty() -> Self {
        Self {
            grid: [[None; 8]; 8],
            side_to_move: Color::White,
            en_passant_target: None,
            history: Vec::new(),
            captured_by_white: Vec::new(),
            captured_by_black: Vec::new(),
        }
    }

    /// Piece on a square, or None for empty and off-board squares alike.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.is_valid() {
            return None;
        }
        self.grid[square.rank as usize][square.file as usize]
    }

    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        if square.is_valid() {
            self.grid[square.rank as usize][square.file as usize] = piece;
        }
    }

    pub fn captured_pieces(&self, by: Color) -> &[Piece] {
        match by {
            Color::White => &self.captured_by_white,
            Color::Black => &self.captured_by_black,
        }
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.squares_with_pieces(color)
            .find(|&(_, p)| p.piece_type == Type::King)
            .map(|(sq, _)| sq)
    }

    /// All squares occupied by the given side.
    pub fn squares_with_pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8).flat_map(move |rank| {
            (0..8).filter_map(move |file| {
                let sq = Square::new(rank, file);
                self.piece_at(sq)
                    .filter(|p| p.color == color)
                    .map(|p| (sq, p))
            })
        })
    }

    /// Pseudo-legal moves for the piece on `from`: movement geometry only,
    /// the mover's own king may be left in check.
    pub fn pseudo_legal_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        let piece = match self.piece_at(from) {
            Some(p) => p,
            None => return moves,
        };
        match piece.piece_type {
            Type::Pawn => self.pawn_moves_into(from, piece, &mut moves),
            Type::Knight => self.knight_moves_into(from, piece, &mut moves),
            Type::Bishop => self.bishop_moves_into(from, piece, &mut moves),
            Type::Rook => self.rook_moves_into(from, piece, &mut moves),
            Type::Queen => self.queen_moves_into(from, piece, &mut moves),
            Type::King => self.king_moves_into(from, piece, &mut moves),
        }
        moves
    }

    /// Squares the piece on `from` bears on. Differs from pseudo-legal
    /// moves in that castling is excluded (so attack computation never
    /// recurses into itself) and occupancy of the target does not matter:
    /// a covered friendly piece counts as defended.
    pub fn attack_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        let piece = match self.piece_at(from) {
            Some(p) => p,
            None => return moves,
        };
        match piece.piece_type {
            Type::Pawn => self.pawn_attacks_into(from, piece, &mut moves),
            Type::Knight => self.knight_attacks_into(from, &mut moves),
            Type::Bishop => self.bishop_attacks_into(from, &mut moves),
            Type::Rook => self.rook_attacks_into(from, &mut moves),
            Type::Queen => self.queen_attacks_into(from, &mut moves),
            Type::King => self.king_attacks_into(from, &mut moves),
        }
        moves
    }

    /// True iff any piece of `by` has an attack move landing on `square`.
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        if !square.is_valid() {
            return false;
        }
        self.squares_with_pieces(by)
            .any(|(from, _)| self.attack_moves(from).iter().any(|m| m.to == square))
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, color.opposite()),
            None => false,
        }
    }

    /// All legal moves for a side: pseudo-legal moves filtered by the
    /// copy-try-reject test. Simple and the correctness backbone of
    /// everything above it; no incremental legality tracking is attempted.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut legal = Vec::with_capacity(40);
        for (from, _) in self.squares_with_pieces(color) {
            for mv in self.pseudo_legal_moves(from) {
                if self.is_move_legal(mv, color) {
                    legal.push(mv);
                }
            }
        }
        legal
    }

    /// Legal moves for the piece on one square. Used by interactive
    /// selection in a front end.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        let piece = match self.piece_at(from) {
            Some(p) => p,
            None => return Vec::new(),
        };
        self.pseudo_legal_moves(from)
            .into_iter()
            .filter(|&mv| self.is_move_legal(mv, piece.color))
            .collect()
    }

    fn is_move_legal(&self, mv: Move, mover: Color) -> bool {
        let mut trial = self.clone();
        trial.apply_move(mv);
        !trial.is_in_check(mover)
    }

    /// Apply a move unconditionally; callers must have validated legality.
    ///
    /// Resolves en passant (the passed pawn is removed, not the landing
    /// square's occupant), moves the rook on a two-file king shift,
    /// maintains the en-passant window, applies promotion, appends to
    /// history, flips the side to move and records any capture under the
    /// mover's list. Returns the captured piece, if any.
    pub fn apply_move(&mut self, mv: Move) -> Option<Piece> {
        let mut piece = match self.piece_at(mv.from) {
            Some(p) => p,
            None => return None,
        };

        let is_en_passant = piece.piece_type == Type::Pawn
            && Some(mv.to) == self.en_passant_target
            && mv.from.file != mv.to.file
            && self.piece_at(mv.to).is_none();

        let captured = if is_en_passant {
            let passed = Square::new(mv.from.rank, mv.to.file);
            let victim = self.piece_at(passed);
            self.set_piece(passed, None);
            victim
        } else {
            self.piece_at(mv.to)
        };

        // Castling is recognized by the king shifting two files.
        if piece.piece_type == Type::King && (mv.to.file - mv.from.file).abs() == 2 {
            let (rook_from, rook_to) = if mv.to.file > mv.from.file {
                (Square::new(mv.from.rank, 7), Square::new(mv.from.rank, 5))
            } else {
                (Square::new(mv.from.rank, 0), Square::new(mv.from.rank, 3))
            };
            if let Some(mut rook) = self.piece_at(rook_from) {
                rook.has_moved = true;
                self.set_piece(rook_from, None);
                self.set_piece(rook_to, Some(rook));
            }
        }

        // The en-passant window opens only after a two-square pawn advance
        // and closes after every other move.
        self.en_passant_target = if piece.piece_type == Type::Pawn
            && (mv.to.rank - mv.from.rank).abs() == 2
        {
            Some(Square::new((mv.from.rank + mv.to.rank) / 2, mv.from.file))
        } else {
            None
        };

        if let Some(promo) = mv.promotion {
            piece.piece_type = promo;
        }
        piece.has_moved = true;

        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(piece));
        self.history.push(mv);

        if let Some(victim) = captured {
            match piece.color {
                Color::White => self.captured_by_white.push(victim),
                Color::Black => self.captured_by_black.push(victim),
            }
        }

        self.side_to_move = self.side_to_move.opposite();
        captured
    }

    /// Classify the position for the side to move. Exactly one status
    /// holds at any time.
    pub fn game_status(&self) -> GameStatus {
        let side = self.side_to_move;
        if self.legal_moves(side).is_empty() {
            return if self.is_in_check(side) {
                GameStatus::Checkmate(side)
            } else {
                GameStatus::Stalemate
            };
        }
        if self.is_insufficient_material() {
            return GameStatus::DrawByMaterial;
        }
        if self.is_in_check(side) {
            GameStatus::Check(side)
        } else {
            GameStatus::InProgress
        }
    }

    /// Two bare kings, or kings plus a single minor piece.
    fn is_insufficient_material(&self) -> bool {
        let mut count = 0;
        let mut has_minor = false;
        for rank in 0..8 {
            for file in 0..8 {
                if let Some(p) = self.piece_at(Square::new(rank, file)) {
                    count += 1;
                    if p.piece_type.is_minor() {
                        has_minor = true;
                    }
                }
            }
        }
        count == 2 || (count == 3 && has_minor)
    }
}
