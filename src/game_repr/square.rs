use std::fmt;

/// A board coordinate as a (rank, file) pair.
///
/// Rank 0 is White's back rank, file 0 is the a-file. Construction does not
/// enforce bounds; `is_valid` is the predicate, and every geometry helper
/// treats an out-of-range square as simply "not there".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub rank: i8,
    pub file: i8,
}

impl Square {
    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }

    pub fn is_valid(&self) -> bool {
        (0..8).contains(&self.rank) && (0..8).contains(&self.file)
    }

    /// The square shifted by the given rank/file deltas. May be invalid.
    pub fn offset(&self, d_rank: i8, d_file: i8) -> Square {
        Square::new(self.rank + d_rank, self.file + d_file)
    }

    /// Parse algebraic coordinates like "e4".
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file_c = chars.next()?;
        let rank_c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if !('a'..='h').contains(&file_c) || !('1'..='8').contains(&rank_c) {
            return None;
        }
        Some(Square::new(rank_c as i8 - '1' as i8, file_c as i8 - 'a' as i8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "??");
        }
        write!(
            f,
            "{}{}",
            (b'a' + self.file as u8) as char,
            (b'1' + self.rank as u8) as char
        )
    }
}
