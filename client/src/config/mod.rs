mod config;
mod game_config;
mod logging_config;

pub use config::{get_config_manager, Config};
pub use game_config::GameConfig;
pub use logging_config::LoggingConfig;
