use crate::log;
use super::board::{Board, CELL_COUNT};
use super::search::SearchEngine;
use super::types::{Mark, SearchAlgorithm};

/// Best root move found by a search, with its score. `cell` is `None` only when
/// the board had no empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub cell: Option<usize>,
}

impl SearchEngine {
    pub fn find_best_move(&mut self, algorithm: SearchAlgorithm, board: &mut Board) -> SearchResult {
        let before = self.counters();
        let result = match algorithm {
            SearchAlgorithm::Minimax => self.find_best_move_minimax(board),
            SearchAlgorithm::AlphaBeta => self.find_best_move_alpha_beta(board),
        };
        let after = self.counters();

        log!(
            "{} picked {:?} (score {}), visited {} nodes",
            algorithm,
            result.cell,
            result.score,
            (after.minimax - before.minimax) + (after.alpha_beta - before.alpha_beta)
        );

        result
    }

    pub fn find_best_move_minimax(&mut self, board: &mut Board) -> SearchResult {
        self.select_move(board, |engine, board| engine.minimax(board, false))
    }

    pub fn find_best_move_alpha_beta(&mut self, board: &mut Board) -> SearchResult {
        self.select_move(board, |engine, board| {
            engine.minimax_alpha_beta(board, false, i32::MIN, i32::MAX)
        })
    }

    // Strict `>` keeps the lowest index among equally scored moves.
    fn select_move(
        &mut self,
        board: &mut Board,
        mut score_reply: impl FnMut(&mut SearchEngine, &mut Board) -> i32,
    ) -> SearchResult {
        let mark = self.computer_mark();
        let mut best = SearchResult {
            score: i32::MIN,
            cell: None,
        };

        for cell in 0..CELL_COUNT {
            if board.get(cell) != Mark::Empty {
                continue;
            }

            let score = board.with_mark(cell, mark, |board| score_reply(self, board));

            if score > best.score {
                best = SearchResult {
                    score,
                    cell: Some(cell),
                };
            }
        }

        best
    }
}
