// Opening book lookup
//
// Book sources are JSON maps from a canonical position key to a named
// line of moves in compact algebraic notation. Several sources are
// merged into one map; when two sources know the same position, the
// longer recorded line wins. Every lookup failure, from an unknown
// position to a token that cannot be pinned to a unique legal move, is
// a quiet book miss and never an error.

use crate::game_repr::{Board, Move, Square, Type};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

/// One known line: moves as written in the source ("1. e4 c6 2. d4"),
/// a display name, and its classification code.
#[derive(Debug, Clone, Deserialize)]
pub struct BookEntry {
    pub moves: String,
    pub name: String,
    pub eco: String,
}

#[derive(Debug, Default)]
pub struct OpeningBook {
    entries: HashMap<String, BookEntry>,
}

static BUILTIN: Lazy<OpeningBook> = Lazy::new(|| {
    let mut book = OpeningBook::default();
    book.load_source("main lines", include_str!("../../data/openings.json"));
    book.load_source("italian lines", include_str!("../../data/openings_italian.json"));
    book
});

impl OpeningBook {
    /// The book compiled into the binary.
    pub fn builtin() -> &'static OpeningBook {
        &BUILTIN
    }

    /// Merge one JSON source into the book. Unreadable sources are
    /// logged and skipped; the book stays usable with whatever loaded.
    pub fn load_source(&mut self, label: &str, json: &str) {
        let parsed: HashMap<String, BookEntry> = match serde_json::from_str(json) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::warn!("skipping opening book source {}: {}", label, err);
                return;
            }
        };
        for (key, entry) in parsed {
            match self.entries.get(&key) {
                Some(existing)
                    if move_tokens(&existing.moves).len() >= move_tokens(&entry.moves).len() => {}
                _ => {
                    self.entries.insert(key, entry);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name and classification of the line matching `board`, if any.
    pub fn line_info(&self, board: &Board) -> Option<(&str, &str)> {
        let entry = self.entries.get(&board.to_fen())?;
        Some((entry.name.as_str(), entry.eco.as_str()))
    }

    /// Book move for the side to move, or `None` on any kind of miss.
    pub fn probe(&self, board: &Board) -> Option<Move> {
        let entry = self.entries.get(&board.to_fen())?;
        let tokens = move_tokens(&entry.moves);
        let token = tokens.get(board.history.len())?;
        let mv = resolve_san(board, token);
        if let Some(mv) = mv {
            log::debug!("book: {} ({}) suggests {}", entry.name, entry.eco, mv);
        }
        mv
    }
}

/// Split a line like "1. e4 c6 2. d4" into bare move tokens, dropping
/// the move-number markers whether or not they are glued to the move.
fn move_tokens(line: &str) -> Vec<&str> {
    line.split_whitespace()
        .filter_map(|raw| {
            let token = match raw.find('.') {
                Some(dot) if raw[..dot].chars().all(|c| c.is_ascii_digit()) => {
                    raw[dot..].trim_start_matches('.')
                }
                _ => raw,
            };
            if token.is_empty() {
                None
            } else {
                Some(token)
            }
        })
        .collect()
}

/// Resolve one algebraic token against the legal moves of the side to
/// move. Returns `None` when the token is malformed, illegal here, or
/// ambiguous.
fn resolve_san(board: &Board, token: &str) -> Option<Move> {
    if !token.is_ascii() {
        return None;
    }
    let legal = board.legal_moves(board.side_to_move);
    let token = token.trim_end_matches(['+', '#']);

    // Castling is recognized by the king's target file.
    let castle_file = match token {
        "O-O" | "0-0" => Some(6),
        "O-O-O" | "0-0-0" => Some(2),
        _ => None,
    };
    if let Some(file) = castle_file {
        return legal.into_iter().find(|mv| {
            board.piece_at(mv.from).map(|p| p.piece_type) == Some(Type::King)
                && mv.to.file == file
                && (mv.to.file - mv.from.file).abs() == 2
        });
    }

    let (body, promotion) = match token.split_once('=') {
        Some((body, suffix)) => {
            let piece = Type::from_san_letter(suffix.chars().next()?)?;
            (body, Some(piece))
        }
        None => (token, None),
    };

    let (piece_type, rest) = match body.chars().next() {
        Some(c) if Type::from_san_letter(c).is_some() => {
            (Type::from_san_letter(c)?, &body[1..])
        }
        Some(_) => (Type::Pawn, body),
        None => return None,
    };

    if rest.len() < 2 {
        return None;
    }
    let (middle, dest) = rest.split_at(rest.len() - 2);
    let dest = Square::from_algebraic(dest)?;
    let disambig: Vec<char> = middle.chars().filter(|&c| c != 'x').collect();

    let mut candidates: Vec<Move> = legal
        .into_iter()
        .filter(|mv| {
            mv.to == dest
                && mv.promotion == promotion
                && board.piece_at(mv.from).map(|p| p.piece_type) == Some(piece_type)
        })
        .collect();

    if candidates.len() > 1 {
        candidates.retain(|mv| {
            disambig.iter().all(|&c| match c {
                'a'..='h' => mv.from.file == (c as i8 - 'a' as i8),
                '1'..='8' => mv.from.rank == (c as i8 - '1' as i8),
                _ => false,
            })
        });
    }

    match candidates.as_slice() {
        [only] => Some(*only),
        _ => None,
    }
}
