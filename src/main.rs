// Self-play driver: minimax (White) against MCTS (Black), both seeded
// from the built-in opening book. Prints the game move by move and the
// final status. Useful for eyeballing engine behavior end to end.

use tactician::ai::{self, AiConfig, OpeningBook};
use tactician::game_repr::{Board, GameStatus};

const MAX_PLIES: usize = 200;

fn main() {
    env_logger::init();

    let white = AiConfig::minimax(3);
    let black = AiConfig::mcts(2000);
    let book = OpeningBook::builtin();

    println!("{} vs {}", white.display_string(), black.display_string());

    let mut board = Board::new();
    while board.history.len() < MAX_PLIES {
        match board.game_status() {
            GameStatus::InProgress | GameStatus::Check(_) => {}
            status => {
                println!("game over: {:?}", status);
                return;
            }
        }

        let side = board.side_to_move;
        let config = match side {
            tactician::game_repr::Color::White => white,
            tactician::game_repr::Color::Black => black,
        };

        let Some(mv) = ai::best_move(&board, side, config, Some(book)) else {
            println!("no move for {:?}, status {:?}", side, board.game_status());
            return;
        };

        board.apply_move(mv);
        println!("{:>3}. {:?} {}", board.history.len(), side, mv);
    }

    println!("reached {} plies, stopping: {:?}", MAX_PLIES, board.game_status());
}
