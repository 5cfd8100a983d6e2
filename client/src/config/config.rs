use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::{GameConfig, LoggingConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Config manager for `path`, or for the file next to the executable when no path is given.
pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::tictactoe::{Mark, SearchAlgorithm};

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path
    }

    fn preset_config() -> Config {
        Config {
            game: GameConfig {
                human_mark: Some(Mark::O),
                algorithm: Some(SearchAlgorithm::AlphaBeta),
            },
            logging: LoggingConfig {
                enabled: true,
                prefix: Some("TicTacToe".to_string()),
            },
        }
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
    fn test_preset_config_can_be_serialized_and_deserialized_file() {
        let config = preset_config();
        let serializer = YamlConfigSerializer::new();
        let content_provider = FileContentConfigProvider::new(get_temp_file_path());

        let serialized_string = serializer.serialize(&config).unwrap();
        content_provider.set_config_content(&serialized_string).unwrap();

        let read_string = content_provider.get_config_content().unwrap().unwrap();
        let deserialized_config: Config = serializer.deserialize(&read_string).unwrap();
        assert_eq!(config, deserialized_config);

        let _ = std::fs::remove_file(content_provider.file_path());
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = preset_config();
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh_manager = get_config_manager(Some(file_path.clone()));
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_fills_in_defaults() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content("game:\n  algorithm: Minimax\n")
            .unwrap();

        let config = get_config_manager(Some(file_path.clone())).get_config().unwrap();
        assert_eq!(config.game.algorithm, Some(SearchAlgorithm::Minimax));
        assert_eq!(config.game.human_mark, None);
        assert_eq!(config.logging, LoggingConfig::default());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            game:
              human_mark: Empty
            logging:
              enabled: true
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let get_result = get_config_manager(Some(file_path.clone())).get_config();
        assert!(get_result.is_err());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_blank_logging_prefix_is_rejected() {
        let config = Config {
            logging: LoggingConfig {
                enabled: true,
                prefix: Some("  ".to_string()),
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
