use std::io::{self, BufRead, Write};

use common::games::tictactoe::{CELL_COUNT, Mark, SearchAlgorithm};

pub const INVALID_MOVE_MESSAGE: &str = "Invalid move. Try again.";

/// Line-oriented prompts over any reader/writer pair, so sessions can be scripted in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    pub fn show(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Prints `prompt` without a newline and reads one line. End of input is an error.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        self.show(prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game finished",
            ));
        }
        Ok(line.trim().to_string())
    }

    pub fn read_mark(&mut self) -> io::Result<Mark> {
        let answer = self.prompt("Choose your marker (X goes first, O goes second): ")?;
        Ok(parse_mark(&answer))
    }

    pub fn read_algorithm(&mut self) -> io::Result<SearchAlgorithm> {
        let answer = self.prompt("Use Alpha-Beta Pruning? (yes/no): ")?;
        Ok(parse_algorithm(&answer))
    }

    /// Keeps asking until `is_free` accepts a parsed cell.
    pub fn read_move(&mut self, is_free: impl Fn(usize) -> bool) -> io::Result<usize> {
        loop {
            let answer = self.prompt("Enter your move (0-8): ")?;
            match parse_move(&answer) {
                Ok(cell) if is_free(cell) => return Ok(cell),
                _ => self.say(INVALID_MOVE_MESSAGE)?,
            }
        }
    }
}

/// `X` (either case) picks X; any other answer leaves the human with O.
pub fn parse_mark(answer: &str) -> Mark {
    match answer.trim().chars().next() {
        Some('X' | 'x') => Mark::X,
        _ => Mark::O,
    }
}

pub fn parse_algorithm(answer: &str) -> SearchAlgorithm {
    if answer.trim() == "yes" {
        SearchAlgorithm::AlphaBeta
    } else {
        SearchAlgorithm::Minimax
    }
}

pub fn parse_move(answer: &str) -> Result<usize, String> {
    let cell: usize = answer
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a cell number", answer.trim()))?;
    if cell >= CELL_COUNT {
        return Err(format!("cell {} is out of range", cell));
    }
    Ok(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_parse_mark() {
        assert_eq!(parse_mark("X"), Mark::X);
        assert_eq!(parse_mark(" x\n"), Mark::X);
        assert_eq!(parse_mark("O"), Mark::O);
        assert_eq!(parse_mark("anything"), Mark::O);
        assert_eq!(parse_mark(""), Mark::O);
    }

    #[test]
    fn test_parse_algorithm_only_accepts_exact_yes() {
        assert_eq!(parse_algorithm("yes"), SearchAlgorithm::AlphaBeta);
        assert_eq!(parse_algorithm(" yes \n"), SearchAlgorithm::AlphaBeta);
        assert_eq!(parse_algorithm("Yes"), SearchAlgorithm::Minimax);
        assert_eq!(parse_algorithm("no"), SearchAlgorithm::Minimax);
        assert_eq!(parse_algorithm("y"), SearchAlgorithm::Minimax);
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("0"), Ok(0));
        assert_eq!(parse_move(" 8 "), Ok(8));
        assert!(parse_move("9").is_err());
        assert!(parse_move("-1").is_err());
        assert!(parse_move("four").is_err());
    }

    #[test]
    fn test_read_move_reprompts_until_valid() {
        let mut console = console("abc\n12\n4\n5\n");
        let cell = console.read_move(|cell| cell != 4).unwrap();
        assert_eq!(cell, 5);
        let text = output(console);
        assert_eq!(text.matches(INVALID_MOVE_MESSAGE).count(), 3);
        assert_eq!(text.matches("Enter your move (0-8): ").count(), 4);
    }

    #[test]
    fn test_prompt_fails_on_end_of_input() {
        let mut console = console("");
        let err = console.read_mark().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_setup_prompts() {
        let mut console = console("O\nyes\n");
        assert_eq!(console.read_mark().unwrap(), Mark::O);
        assert_eq!(console.read_algorithm().unwrap(), SearchAlgorithm::AlphaBeta);
        let text = output(console);
        assert!(text.starts_with("Choose your marker (X goes first, O goes second): "));
        assert!(text.ends_with("Use Alpha-Beta Pruning? (yes/no): "));
    }
}
