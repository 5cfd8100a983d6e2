use super::board::{Board, CELL_COUNT};
use super::types::Mark;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

/// Number of search invocations per algorithm, terminal nodes included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeCounters {
    pub minimax: u64,
    pub alpha_beta: u64,
}

/// Exhaustive game-tree search from the computer's point of view.
///
/// The computer is always the maximizing side. Counters accumulate across
/// every search run through this instance and are never reset.
#[derive(Debug)]
pub struct SearchEngine {
    computer_mark: Mark,
    human_mark: Mark,
    counters: NodeCounters,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self {
            computer_mark: Mark::O,
            human_mark: Mark::X,
            counters: NodeCounters::default(),
        }
    }
}

impl SearchEngine {
    pub fn new(computer_mark: Mark) -> Result<Self, String> {
        let human_mark = computer_mark
            .opponent()
            .ok_or_else(|| "Computer mark must be X or O".to_string())?;
        Ok(Self {
            computer_mark,
            human_mark,
            counters: NodeCounters::default(),
        })
    }

    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn counters(&self) -> NodeCounters {
        self.counters
    }

    fn evaluate_terminal(&self, board: &Board) -> Option<i32> {
        if board.is_winner(self.computer_mark) {
            return Some(WIN_SCORE);
        }
        if board.is_winner(self.human_mark) {
            return Some(LOSS_SCORE);
        }
        if board.is_draw() {
            return Some(DRAW_SCORE);
        }
        None
    }

    fn mark_for(&self, is_maximizing: bool) -> Mark {
        if is_maximizing {
            self.computer_mark
        } else {
            self.human_mark
        }
    }

    pub fn minimax(&mut self, board: &mut Board, is_maximizing: bool) -> i32 {
        self.counters.minimax += 1;

        if let Some(score) = self.evaluate_terminal(board) {
            return score;
        }

        let mark = self.mark_for(is_maximizing);
        let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };

        for cell in 0..CELL_COUNT {
            if board.get(cell) != Mark::Empty {
                continue;
            }

            let score = board.with_mark(cell, mark, |board| self.minimax(board, !is_maximizing));

            best_score = if is_maximizing {
                best_score.max(score)
            } else {
                best_score.min(score)
            };
        }

        best_score
    }

    pub fn minimax_alpha_beta(
        &mut self,
        board: &mut Board,
        is_maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.counters.alpha_beta += 1;

        if let Some(score) = self.evaluate_terminal(board) {
            return score;
        }

        let mark = self.mark_for(is_maximizing);
        let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };

        for cell in 0..CELL_COUNT {
            if board.get(cell) != Mark::Empty {
                continue;
            }

            let score = board.with_mark(cell, mark, |board| {
                self.minimax_alpha_beta(board, !is_maximizing, alpha, beta)
            });

            if is_maximizing {
                best_score = best_score.max(score);
                alpha = alpha.max(best_score);
            } else {
                best_score = best_score.min(score);
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                break;
            }
        }

        best_score
    }
}
