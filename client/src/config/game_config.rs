use common::config::Validate;
use common::games::tictactoe::{Mark, SearchAlgorithm};
use serde::{Deserialize, Serialize};

/// Preset answers for the setup prompts. `None` means ask at startup.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct GameConfig {
    #[serde(default)]
    pub human_mark: Option<Mark>,
    #[serde(default)]
    pub algorithm: Option<SearchAlgorithm>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Some(Mark::Empty) {
            return Err("human_mark must be X or O".to_string());
        }
        Ok(())
    }
}
