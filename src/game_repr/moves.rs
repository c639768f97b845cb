use super::{Square, Type};
use std::fmt;

/// A move from one square to another, with an optional promotion piece.
///
/// Identity is structural: two moves are equal iff from, to and promotion
/// match. A move carries no captured-piece or check information; whatever
/// happens on the board is derived at apply time from context (a king
/// shifting two files castles, a pawn stepping diagonally onto the
/// en-passant target captures the passed pawn).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Type>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn promoting(from: Square, to: Square, promotion: Type) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            let c = match promo {
                Type::Queen => 'q',
                Type::Rook => 'r',
                Type::Bishop => 'b',
                Type::Knight => 'n',
                Type::King => 'k',
                Type::Pawn => 'p',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = Move::new(Square::new(1, 4), Square::new(3, 4));
        let b = Move::new(Square::new(1, 4), Square::new(3, 4));
        assert_eq!(a, b);

        let c = Move::promoting(Square::new(6, 0), Square::new(7, 0), Type::Queen);
        let d = Move::promoting(Square::new(6, 0), Square::new(7, 0), Type::Knight);
        assert_ne!(c, d);
    }

    #[test]
    fn test_display() {
        let mv = Move::new(Square::new(1, 4), Square::new(3, 4));
        assert_eq!(mv.to_string(), "e2e4");
        let promo = Move::promoting(Square::new(6, 0), Square::new(7, 0), Type::Queen);
        assert_eq!(promo.to_string(), "a7a8q");
    }
}
