mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, BotType, calculate_move, find_best_move, find_best_move_for};
pub use game_state::TicTacToeGameState;
pub use types::{AI_MARK, BOARD_SIZE, GameStatus, Mark, Outcome, PLAYER_MARK, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate};
