use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::logger::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::AiConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_default_config_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe_path| exe_path.parent().map(|dir| dir.join(CONFIG_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager(override_path: Option<PathBuf>) -> ClientConfigManager {
    ConfigManager::from_yaml_file(override_path.unwrap_or_else(get_default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub ai: AiConfig,
    #[serde(default = "default_show_intro")]
    pub show_intro: bool,
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_show_intro() -> bool {
    true
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.ai.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai: AiConfig::default(),
            show_intro: default_show_intro(),
            log_level: LogLevel::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::tictactoe::BotType;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());

        let serialized_string = serializer.serialize(&default_config).unwrap();
        content_provider.set_config_content(&serialized_string).unwrap();

        let read_string = content_provider.get_config_content().unwrap().unwrap();
        let deserialized_config: Config = serializer.deserialize(&read_string).unwrap();
        assert_eq!(default_config, deserialized_config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_manager_falls_back_to_default_for_missing_file() {
        let manager = get_config_manager(Some(get_temp_file_path()));
        assert_eq!(manager.get_config(), Ok(Config::default()));
    }

    #[test]
    fn test_partial_yaml_uses_field_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer
            .deserialize("ai:\n  bot_type: random\n  thinking_delay_ms: 0\n")
            .unwrap();
        assert_eq!(config.ai.bot_type, BotType::Random);
        assert_eq!(config.ai.thinking_delay_ms, 0);
        assert!(config.show_intro);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_thinking_delay_is_bounded() {
        let mut config = Config::default();
        config.ai.thinking_delay_ms = 10_000;
        assert!(config.validate().is_err());
    }
}
