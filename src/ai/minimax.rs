// Minimax search with alpha-beta pruning
//
// Classic two-sided minimax: one recursive function with a `maximizing`
// flag, scoring every node from the searching side's perspective.
// Alpha-beta pruning discards branches that cannot change the result,
// and a one-ply evaluation sort on the move list makes the cutoffs
// fire early.
//
// Game outcomes override the depth budget: a checkmate or draw found
// anywhere in the tree scores as such, even at depth 0.

use super::evaluation::evaluate;
use crate::game_repr::{Board, Color, GameStatus, Move};

/// Checkmate score. A depth bonus is added on top so nearer mates
/// outscore distant ones; ordinary evaluations never get close.
pub const MATE_SCORE: i32 = 1_000_000;

/// Minimax with alpha-beta pruning.
///
/// `ai_side` is the side the score is for and stays fixed through the
/// recursion; `maximizing` tells whose turn the current node is.
/// Returns the exact score of the subtree within the `(alpha, beta)`
/// window, positive meaning good for `ai_side`.
pub fn minimax(
    board: &Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ai_side: Color,
) -> i32 {
    // Decided positions score as outcomes regardless of remaining depth.
    match board.game_status() {
        GameStatus::Checkmate(mated) => {
            return if mated == ai_side {
                -(MATE_SCORE + depth as i32)
            } else {
                MATE_SCORE + depth as i32
            };
        }
        GameStatus::Stalemate | GameStatus::DrawByMaterial => return 0,
        GameStatus::InProgress | GameStatus::Check(_) => {}
    }

    if depth == 0 {
        return evaluate(board, ai_side);
    }

    let moves = ordered_moves(board, ai_side, maximizing);

    if maximizing {
        let mut best = i32::MIN;
        for mv in moves {
            let mut child = board.clone();
            child.apply_move(mv);
            let score = minimax(&child, depth - 1, alpha, beta, false, ai_side);
            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in moves {
            let mut child = board.clone();
            child.apply_move(mv);
            let score = minimax(&child, depth - 1, alpha, beta, true, ai_side);
            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Pick the best move for `ai_side` on a board where it is to move.
///
/// Searches every legal root move to `depth` plies (at least one) and
/// keeps the first strictly-better score, so move-list order breaks
/// ties. Returns `None` only when the side has no legal moves.
pub fn best_move(board: &Board, ai_side: Color, depth: u32) -> Option<Move> {
    let depth = depth.max(1);
    let moves = ordered_moves(board, ai_side, true);

    let mut alpha = i32::MIN;
    let beta = i32::MAX;
    let mut best: Option<(Move, i32)> = None;

    for mv in moves {
        let mut child = board.clone();
        child.apply_move(mv);
        let score = minimax(&child, depth - 1, alpha, beta, false, ai_side);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
        alpha = alpha.max(score);
    }

    if let Some((mv, score)) = best {
        log::debug!("minimax depth {} picked {} (score {})", depth, mv, score);
    }
    best.map(|(mv, _)| mv)
}

/// Legal moves for the side to move, sorted by one-ply evaluation.
/// The maximizing side sees the most promising replies first, the
/// minimizing side the most damaging ones.
fn ordered_moves(board: &Board, ai_side: Color, maximizing: bool) -> Vec<Move> {
    let mut scored: Vec<(Move, i32)> = board
        .legal_moves(board.side_to_move)
        .into_iter()
        .map(|mv| {
            let mut child = board.clone();
            child.apply_move(mv);
            (mv, evaluate(&child, ai_side))
        })
        .collect();
    if maximizing {
        scored.sort_by(|a, b| b.1.cmp(&a.1));
    } else {
        scored.sort_by(|a, b| a.1.cmp(&b.1));
    }
    scored.into_iter().map(|(mv, _)| mv).collect()
}
