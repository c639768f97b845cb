// AI players - move selection for the automated side
//
// Two interchangeable strategies over the same board abstraction:
// - Minimax with alpha-beta pruning and a hand-crafted evaluator
// - Monte Carlo Tree Search with UCB1 selection and shallow rollouts
// An opening book is consulted before either search runs.

mod ai_type;
mod evaluation;
mod mcts;
mod minimax;
mod opening_book;
mod piece_square_tables;

pub use ai_type::{best_move, AiConfig, AiType};
pub use evaluation::evaluate;
pub use mcts::{MctsConfig, MctsStats, MctsTree};
pub use minimax::{minimax, MATE_SCORE};
pub use opening_book::{BookEntry, OpeningBook};
