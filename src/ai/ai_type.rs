//! AI registry and move façade
//!
//! Enumerates the available search algorithms and provides the single
//! entry point callers use to get a move: opening book first, then the
//! configured search on a miss.

use super::mcts::{self, MctsConfig};
use super::minimax;
use super::opening_book::OpeningBook;
use crate::game_repr::{Board, Color, Move};

/// Available search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AiType {
    /// Depth-bounded minimax with alpha-beta pruning
    #[default]
    Minimax,
    /// Monte Carlo Tree Search with an iteration budget
    Mcts,
}

impl AiType {
    /// All algorithms, for enumeration by a caller's UI.
    pub fn all() -> &'static [AiType] {
        &[AiType::Minimax, AiType::Mcts]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AiType::Minimax => "Minimax",
            AiType::Mcts => "MCTS",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AiType::Minimax => "Fixed-depth minimax with alpha-beta pruning",
            AiType::Mcts => "Monte Carlo Tree Search with random rollouts",
        }
    }
}

/// Everything needed to invoke one AI player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiConfig {
    pub ai_type: AiType,
    /// Search depth in plies; used by minimax.
    pub depth: u32,
    /// Iteration budget; used by MCTS.
    pub iterations: u32,
}

impl AiConfig {
    pub fn minimax(depth: u32) -> Self {
        Self {
            ai_type: AiType::Minimax,
            depth,
            iterations: 0,
        }
    }

    pub fn mcts(iterations: u32) -> Self {
        Self {
            ai_type: AiType::Mcts,
            depth: 0,
            iterations,
        }
    }

    pub fn display_string(&self) -> String {
        match self.ai_type {
            AiType::Minimax => format!("Minimax (depth {})", self.depth),
            AiType::Mcts => format!("MCTS ({} iterations)", self.iterations),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::minimax(3)
    }
}

/// Pick a move for `color` on `board`, consulting `book` before any
/// search. Returns `None` only when `color` has no legal move; callers
/// should have checked `game_status` and not ask on terminal positions.
pub fn best_move(
    board: &Board,
    color: Color,
    config: AiConfig,
    book: Option<&OpeningBook>,
) -> Option<Move> {
    debug_assert_eq!(board.side_to_move, color);

    if let Some(book) = book {
        if let Some(mv) = book.probe(board) {
            if board.legal_moves(color).contains(&mv) {
                log::info!("playing book move {}", mv);
                return Some(mv);
            }
        }
    }

    match config.ai_type {
        AiType::Minimax => minimax::best_move(board, color, config.depth),
        AiType::Mcts => mcts::search(
            board,
            MctsConfig {
                iterations: config.iterations,
                ..MctsConfig::default()
            },
        ),
    }
}
