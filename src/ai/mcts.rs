// Monte Carlo Tree Search with UCB1 selection and shallow rollouts
//
// Nodes live in a flat arena and refer to each other by index, so the
// child->parent back-reference needs no shared ownership. The tree is
// built fresh for every move decision and dropped afterwards.
//
// A rollout is deliberately shallow: a few random replies and then the
// static evaluator, mapped onto [0, 1]. The result is scored for the
// side that just moved at the simulated node and flipped at every
// level on the way back up, since each ancestor belongs to the other
// side.

use super::evaluation::evaluate;
use crate::game_repr::{Board, GameStatus, Move};
use rand::seq::SliceRandom;
use rand::Rng;

/// Evaluations beyond this magnitude saturate the [0, 1] rollout score.
const EVAL_CLAMP: i32 = 2000;

/// Search budget and tuning knobs.
#[derive(Debug, Clone, Copy)]
pub struct MctsConfig {
    /// Number of select/expand/simulate/backpropagate iterations.
    pub iterations: u32,
    /// UCB1 exploration constant.
    pub exploration: f64,
    /// Random replies played before the evaluator scores a rollout.
    pub rollout_depth: u32,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            exploration: std::f64::consts::SQRT_2,
            rollout_depth: 1,
        }
    }
}

struct Node {
    board: Board,
    /// Move that produced this node; `None` for the root.
    mov: Option<Move>,
    parent: Option<usize>,
    children: Vec<usize>,
    untried: Vec<Move>,
    visits: u32,
    /// Accumulated result; draws contribute 0.5.
    wins: f64,
}

impl Node {
    fn new(board: Board, mov: Option<Move>, parent: Option<usize>) -> Self {
        let untried = board.legal_moves(board.side_to_move);
        Self {
            board,
            mov,
            parent,
            children: Vec::new(),
            untried,
            visits: 0,
            wins: 0.0,
        }
    }

    fn win_ratio(&self) -> f64 {
        if self.visits == 0 {
            return 0.0;
        }
        self.wins / self.visits as f64
    }
}

/// One search tree, valid for a single move decision.
pub struct MctsTree {
    nodes: Vec<Node>,
    config: MctsConfig,
}

impl MctsTree {
    pub fn new(board: &Board, config: MctsConfig) -> Self {
        Self {
            nodes: vec![Node::new(board.clone(), None, None)],
            config,
        }
    }

    /// Run the configured number of iterations and pick the root child
    /// with the best win ratio. Falls back to a uniformly random legal
    /// move when the budget never expanded a child, and to `None` when
    /// the side to move has no legal move at all.
    pub fn search(&mut self) -> Option<Move> {
        let mut rng = rand::thread_rng();

        for _ in 0..self.config.iterations {
            let leaf = self.select_and_expand(&mut rng);
            let result = self.simulate(leaf, &mut rng);
            self.backpropagate(leaf, result);
        }

        let root = &self.nodes[0];
        let best = root
            .children
            .iter()
            .copied()
            .max_by(|&a, &b| {
                let ra = self.nodes[a].win_ratio();
                let rb = self.nodes[b].win_ratio();
                ra.partial_cmp(&rb).unwrap_or(std::cmp::Ordering::Equal)
            })
            .and_then(|idx| self.nodes[idx].mov);

        if let Some(mv) = best {
            log::debug!(
                "mcts picked {} after {} iterations ({} root children)",
                mv,
                self.config.iterations,
                self.nodes[0].children.len()
            );
            return Some(mv);
        }

        // Budget too small to grow the tree; any legal move will do.
        let root = &self.nodes[0];
        root.board
            .legal_moves(root.board.side_to_move)
            .choose(&mut rng)
            .copied()
    }

    pub fn stats(&self) -> MctsStats {
        let root = &self.nodes[0];
        MctsStats {
            root_visits: root.visits,
            tree_size: self.nodes.len(),
            root_children: root.children.len(),
        }
    }

    /// Walk down by UCB1 until a node still has untried moves, then
    /// expand one of them at random. Terminal nodes are returned as is.
    fn select_and_expand(&mut self, rng: &mut impl Rng) -> usize {
        let mut current = 0;
        loop {
            if !self.nodes[current].untried.is_empty() {
                return self.expand(current, rng);
            }
            if self.nodes[current].children.is_empty() {
                // No untried moves and no children: the game is over here.
                return current;
            }
            current = self.best_ucb_child(current);
        }
    }

    fn expand(&mut self, parent: usize, rng: &mut impl Rng) -> usize {
        let pick = rng.gen_range(0..self.nodes[parent].untried.len());
        let mv = self.nodes[parent].untried.swap_remove(pick);

        let mut board = self.nodes[parent].board.clone();
        board.apply_move(mv);

        let child = self.nodes.len();
        self.nodes.push(Node::new(board, Some(mv), Some(parent)));
        self.nodes[parent].children.push(child);
        child
    }

    /// Child maximizing `winRate + C * sqrt(ln(parentVisits) / visits)`.
    /// Unvisited children score infinity, so each gets tried once
    /// before any sibling is revisited.
    fn best_ucb_child(&self, parent: usize) -> usize {
        let parent_visits = self.nodes[parent].visits.max(1) as f64;
        let mut best = self.nodes[parent].children[0];
        let mut best_score = f64::NEG_INFINITY;

        for &child in &self.nodes[parent].children {
            let node = &self.nodes[child];
            let score = if node.visits == 0 {
                f64::INFINITY
            } else {
                node.win_ratio()
                    + self.config.exploration * (parent_visits.ln() / node.visits as f64).sqrt()
            };
            if score > best_score {
                best_score = score;
                best = child;
            }
        }
        best
    }

    /// Shallow rollout from `node`, scored in [0, 1] for the side that
    /// just moved there.
    fn simulate(&self, node: usize, rng: &mut impl Rng) -> f64 {
        let perspective = self.nodes[node].board.side_to_move.opposite();
        let mut board = self.nodes[node].board.clone();

        for _ in 0..self.config.rollout_depth {
            if !matches!(
                board.game_status(),
                GameStatus::InProgress | GameStatus::Check(_)
            ) {
                break;
            }
            let moves = board.legal_moves(board.side_to_move);
            match moves.choose(rng) {
                Some(&mv) => {
                    board.apply_move(mv);
                }
                None => break,
            }
        }

        match board.game_status() {
            GameStatus::Checkmate(mated) => {
                if mated == perspective {
                    0.0
                } else {
                    1.0
                }
            }
            GameStatus::Stalemate | GameStatus::DrawByMaterial => 0.5,
            GameStatus::InProgress | GameStatus::Check(_) => {
                let eval = evaluate(&board, perspective).clamp(-EVAL_CLAMP, EVAL_CLAMP);
                (eval as f64 / EVAL_CLAMP as f64 + 1.0) / 2.0
            }
        }
    }

    /// Walk to the root, crediting each level with the result from its
    /// own side's perspective.
    fn backpropagate(&mut self, node: usize, mut result: f64) {
        let mut current = Some(node);
        while let Some(idx) = current {
            self.nodes[idx].visits += 1;
            self.nodes[idx].wins += result;
            result = 1.0 - result;
            current = self.nodes[idx].parent;
        }
    }
}

/// Search summary, mostly for logging and tests.
#[derive(Debug)]
pub struct MctsStats {
    pub root_visits: u32,
    pub tree_size: usize,
    pub root_children: usize,
}

/// Run one MCTS move decision for the side to move on `board`.
pub fn search(board: &Board, config: MctsConfig) -> Option<Move> {
    MctsTree::new(board, config).search()
}
