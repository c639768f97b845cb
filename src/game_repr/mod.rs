mod board;
mod fen;
mod moves;
mod piece;
mod piece_moves;
mod square;

#[cfg(test)]
mod tests;

pub use board::{Board, GameStatus, MoveList};
pub use fen::FenError;
pub use moves::Move;
pub use piece::{Color, Piece, Type};
pub use square::Square;
