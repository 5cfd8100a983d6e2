use std::io::{self, BufRead, Write};

use common::games::tictactoe::{
    GameStatus, Mark, NodeCounters, SearchAlgorithm, SearchEngine, TicTacToeGameState,
};
use common::log;

use crate::console::Console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub human_mark: Mark,
    pub algorithm: SearchAlgorithm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    HumanWon,
    ComputerWon,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameReport {
    pub outcome: GameOutcome,
    pub counters: NodeCounters,
}

/// Plays one game to the end, human against the search engine.
pub fn run_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: GameSettings,
) -> io::Result<GameReport> {
    let computer_mark = settings
        .human_mark
        .opponent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "human mark must be X or O"))?;
    let mut engine = SearchEngine::new(computer_mark)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut state = TicTacToeGameState::new();

    log!(
        "New game: human {}, computer {}, {}",
        settings.human_mark,
        computer_mark,
        settings.algorithm
    );

    console.show(&state.board)?;

    while !state.is_over() {
        let mover = state.current_mark;
        if mover == settings.human_mark {
            let board = state.board;
            let cell = console.read_move(|cell| board.is_valid_move(cell))?;
            state
                .place_mark(mover, cell)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            log!("Human played {}", cell);
        } else {
            console.say("AI is thinking...")?;
            let result = engine.find_best_move(settings.algorithm, &mut state.board);
            let cell = result
                .cell
                .ok_or_else(|| io::Error::other("computer has no legal move"))?;
            state
                .place_mark(mover, cell)
                .map_err(io::Error::other)?;
        }
        console.show(&state.board)?;
    }

    let outcome = match state.status {
        GameStatus::Draw => GameOutcome::Draw,
        status if status.winner() == Some(settings.human_mark) => GameOutcome::HumanWon,
        _ => GameOutcome::ComputerWon,
    };

    console.say(match outcome {
        GameOutcome::HumanWon => "You win!",
        GameOutcome::ComputerWon => "AI wins!",
        GameOutcome::Draw => "It's a draw!",
    })?;

    // Both counters are reported; the algorithm that did not run shows 0.
    let counters = engine.counters();
    console.say("\n--- Game Over ---")?;
    console.say(format_args!("Nodes visited with Minimax: {}", counters.minimax))?;
    console.say(format_args!(
        "Nodes visited with Alpha-Beta Pruning: {}",
        counters.alpha_beta
    ))?;

    Ok(GameReport { outcome, counters })
}
