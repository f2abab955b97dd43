use common::config::Validate;
use common::games::tictactoe::BotType;
use serde::{Deserialize, Serialize};

pub const MAX_THINKING_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct AiConfig {
    #[serde(default)]
    pub bot_type: BotType,
    pub thinking_delay_ms: u64,
}

impl Validate for AiConfig {
    fn validate(&self) -> Result<(), String> {
        if self.thinking_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(format!(
                "thinking_delay_ms must not exceed {}",
                MAX_THINKING_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            bot_type: BotType::Minimax,
            thinking_delay_ms: 300,
        }
    }
}
