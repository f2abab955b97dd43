mod ai_config;
mod main_config;

pub use ai_config::AiConfig;
pub use main_config::{ClientConfigManager, Config, get_config_manager};
