//! Chess engine: rules, position encoding, and two AI opponents.
//!
//! [`game_repr`] owns the board, move generation, legality, and the
//! FEN encoding used as the opening-book key. [`ai`] layers the move
//! pickers on top: an opening book, minimax with alpha-beta pruning,
//! and Monte Carlo Tree Search. Everything is synchronous and works
//! on value copies of the board, so callers decide their own
//! threading.

pub mod ai;
pub mod game_repr;
