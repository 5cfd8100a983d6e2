mod config;
mod console;
mod game_runner;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use common::games::tictactoe::{Mark, SearchAlgorithm};
use common::{log, logger};

use config::{Config, get_config_manager};
use console::Console;
use game_runner::{GameSettings, run_game};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// Path to the YAML config file (defaults to tictactoe_config.yaml next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Your mark; X always moves first
    #[arg(long)]
    mark: Option<Mark>,

    /// Search used by the computer: minimax or alpha-beta
    #[arg(long)]
    algorithm: Option<SearchAlgorithm>,

    /// Write diagnostic logs to stderr
    #[arg(long)]
    log: bool,
}

fn resolve_settings<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    args: &Args,
    config: &Config,
) -> io::Result<GameSettings> {
    let human_mark = match args.mark.or(config.game.human_mark) {
        Some(mark) => mark,
        None => console.read_mark()?,
    };
    let algorithm = match args.algorithm.or(config.game.algorithm) {
        Some(algorithm) => algorithm,
        None => console.read_algorithm()?,
    };
    Ok(GameSettings {
        human_mark,
        algorithm,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config.clone()).get_config()?;

    if args.log || config.logging.enabled {
        logger::init_logger(config.logging.prefix.clone());
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    console.say("Welcome to Tic-Tac-Toe!")?;
    let settings = resolve_settings(&mut console, &args, &config)?;
    log!("Settings: {:?}", settings);

    let report = run_game(&mut console, settings)?;
    log!("Outcome: {:?}, nodes: {:?}", report.outcome, report.counters);

    Ok(())
}
