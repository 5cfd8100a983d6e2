mod board;
mod bot_controller;
mod game_state;
mod search;
mod types;

pub use board::{Board, CELL_COUNT, WIN_LINES};
pub use bot_controller::SearchResult;
pub use game_state::TicTacToeGameState;
pub use search::{DRAW_SCORE, LOSS_SCORE, NodeCounters, SearchEngine, WIN_SCORE};
pub use types::{GameStatus, Mark, SearchAlgorithm};
