use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{BotInput, BotType, calculate_move};
use super::types::{AI_MARK, GameStatus, Mark, Outcome, PLAYER_MARK, Position, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

/// Turn order for one human (X, always first) against the AI (O).
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    status: GameStatus,
    last_move: Option<Position>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::PlayerTurn,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn place_player_mark(&mut self, pos: Position) -> Result<(), String> {
        self.validate_move(GameStatus::PlayerTurn, pos)?;
        self.apply(pos, PLAYER_MARK);
        Ok(())
    }

    pub fn play_ai_turn(&mut self, bot_type: BotType, rng: &mut SessionRng) -> Result<Position, String> {
        if self.status == GameStatus::Terminal {
            return Err("Game is already over".to_string());
        }
        if self.status != GameStatus::AiTurn {
            return Err("Not AI turn".to_string());
        }

        let pos = calculate_move(bot_type, BotInput::from_game_state(self), rng)
            .ok_or_else(|| "AI found no move".to_string())?;
        self.validate_move(GameStatus::AiTurn, pos)?;
        self.apply(pos, AI_MARK);
        Ok(pos)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn validate_move(&self, expected: GameStatus, pos: Position) -> Result<(), String> {
        if self.status == GameStatus::Terminal {
            return Err("Game is already over".to_string());
        }
        if self.status != expected {
            return Err("Not your turn".to_string());
        }
        if !pos.is_on_board() {
            return Err("Position out of bounds".to_string());
        }
        if !self.board.is_empty_at(pos) {
            return Err("Cell is already marked".to_string());
        }
        Ok(())
    }

    fn apply(&mut self, pos: Position, mark: Mark) {
        self.board.set(pos, mark);
        self.last_move = Some(pos);

        self.status = if self.outcome().is_terminal() {
            GameStatus::Terminal
        } else if mark == PLAYER_MARK {
            GameStatus::AiTurn
        } else {
            GameStatus::PlayerTurn
        };
    }
}
