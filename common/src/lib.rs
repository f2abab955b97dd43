pub mod config;
pub mod games;
pub mod logger;

pub use games::tictactoe::{Board, Mark, Outcome, Position, evaluate, find_best_move};
