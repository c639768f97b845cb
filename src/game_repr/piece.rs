#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Type {
    /// Material value in centipawns. The king's value only matters as a
    /// magnitude inside the evaluator's tension term.
    pub fn value(&self) -> i32 {
        match self {
            Type::Pawn => 100,
            Type::Knight => 320,
            Type::Bishop => 330,
            Type::Rook => 500,
            Type::Queen => 900,
            Type::King => 20000,
        }
    }

    pub fn is_minor(&self) -> bool {
        matches!(self, Type::Knight | Type::Bishop)
    }

    /// Uppercase SAN letter, as used in opening-book move text.
    pub fn from_san_letter(c: char) -> Option<Type> {
        match c {
            'K' => Some(Type::King),
            'Q' => Some(Type::Queen),
            'R' => Some(Type::Rook),
            'B' => Some(Type::Bishop),
            'N' => Some(Type::Knight),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Forward direction for this side's pawns, as a rank delta.
    pub fn forward(&self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: Type,
    pub color: Color,
    /// Set once the piece has moved. Sole source of castling eligibility.
    pub has_moved: bool,
}

impl Piece {
    pub fn new(piece_type: Type, color: Color) -> Self {
        Self {
            piece_type,
            color,
            has_moved: false,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece_type = match c.to_ascii_lowercase() {
            'p' => Type::Pawn,
            'n' => Type::Knight,
            'b' => Type::Bishop,
            'r' => Type::Rook,
            'q' => Type::Queen,
            'k' => Type::King,
            _ => return None,
        };
        Some(Self::new(piece_type, color))
    }

    pub fn to_char(&self) -> char {
        let c = match self.piece_type {
            Type::Pawn => 'p',
            Type::Knight => 'n',
            Type::Bishop => 'b',
            Type::Rook => 'r',
            Type::Queen => 'q',
            Type::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}
