use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::types::{AI_MARK, Mark, Position};
use super::win_detector::evaluate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotType {
    #[default]
    Minimax,
    Random,
}

pub struct BotInput {
    pub board: Board,
    pub mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            mark: AI_MARK,
        }
    }
}

pub fn calculate_move(bot_type: BotType, input: BotInput, rng: &mut SessionRng) -> Option<Position> {
    match bot_type {
        BotType::Minimax => find_best_move_for(&input.board, input.mark),
        BotType::Random => calculate_random_move(&input, rng),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    if evaluate(&input.board).is_terminal() {
        return None;
    }
    rng.pick(&input.board.available_moves())
}

/// Best move for the AI (O). `None` when the board is full or already decided.
pub fn find_best_move(board: &Board) -> Option<Position> {
    find_best_move_for(board, AI_MARK)
}

/// O maximizes the score and X minimizes it. Among equal scores the first
/// empty cell in row-major order wins.
pub fn find_best_move_for(board: &Board, mark: Mark) -> Option<Position> {
    let maximizing = match mark {
        Mark::O => true,
        Mark::X => false,
        Mark::Empty => return None,
    };

    if evaluate(board).is_terminal() {
        return None;
    }

    let mut search = Search::default();
    let mut best_move = None;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for pos in board.empty_cells() {
        let score = search.minimax(&board.with_mark(pos, mark), 1, !maximizing);

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(pos);
        }
    }

    if let Some(pos) = best_move {
        crate::log_debug!(
            "Minimax {} on {}: picked {} with score {} ({} nodes)",
            mark, board, pos, best_score, search.nodes
        );
    }

    best_move
}

#[derive(Default)]
struct Search {
    nodes: u64,
}

impl Search {
    fn minimax(&mut self, board: &Board, depth: usize, is_maximizing: bool) -> i32 {
        self.nodes += 1;

        if let Some(score) = evaluate(board).score(depth) {
            return score;
        }

        if is_maximizing {
            let mut max_eval = i32::MIN;
            for pos in board.empty_cells() {
                let eval = self.minimax(&board.with_mark(pos, Mark::O), depth + 1, false);
                max_eval = max_eval.max(eval);
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for pos in board.empty_cells() {
                let eval = self.minimax(&board.with_mark(pos, Mark::X), depth + 1, true);
                min_eval = min_eval.min(eval);
            }
            min_eval
        }
    }
}
