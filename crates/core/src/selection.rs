//! Selection & match engine
//!
//! Tracks up to two selected cells on the board. The second accepted
//! selection resolves the pair immediately:
//!
//! - same kind: both cells are emptied and the match award is added
//! - different kinds: the board is left untouched
//!
//! Either way the selection is cleared, so a stale pick never carries over
//! into the next round. Matching compares kinds only; the two cells can be
//! anywhere on the board.

use arrayvec::ArrayVec;
use log::debug;

use crate::board::Board;
use crate::types::{Coord, TileKind};

/// Why a selection was refused. Refusals never change any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    OutOfBounds,
    EmptyCell,
    AlreadySelected,
    NotPlaying,
}

/// Result of a single selection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Rejected(RejectReason),
    /// First cell of a pair recorded.
    Selected(Coord),
    Matched {
        first: Coord,
        second: Coord,
        kind: TileKind,
    },
    Mismatched {
        first: Coord,
        second: Coord,
    },
}

/// Board, selection and score for one play-through.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    board: Board,
    selection: ArrayVec<Coord, 2>,
    score: u32,
    award: u32,
}

impl MatchEngine {
    pub fn new(board: Board, award: u32) -> Self {
        Self {
            board,
            selection: ArrayVec::new(),
            score: 0,
            award,
        }
    }

    /// Swap in a fresh board; score and selection start over.
    pub fn reset(&mut self, board: Board) {
        self.board = board;
        self.selection.clear();
        self.score = 0;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &[Coord] {
        &self.selection
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// True once every cell has been emptied.
    pub fn is_cleared(&self) -> bool {
        self.board.is_cleared()
    }

    /// Select a cell, resolving the pair when it is the second pick.
    pub fn select_cell(&mut self, at: Coord) -> SelectOutcome {
        match self.board.get(at) {
            None => return SelectOutcome::Rejected(RejectReason::OutOfBounds),
            Some(None) => return SelectOutcome::Rejected(RejectReason::EmptyCell),
            Some(Some(_)) => {}
        }
        if self.selection.contains(&at) {
            return SelectOutcome::Rejected(RejectReason::AlreadySelected);
        }

        self.selection.push(at);
        if self.selection.is_full() {
            self.resolve()
        } else {
            debug!("selected ({}, {})", at.row, at.col);
            SelectOutcome::Selected(at)
        }
    }

    /// Compare the two selected cells and clear the selection.
    fn resolve(&mut self) -> SelectOutcome {
        let (first, second) = (self.selection[0], self.selection[1]);
        self.selection.clear();

        match (self.board.kind_at(first), self.board.kind_at(second)) {
            (Some(a), Some(b)) if a == b => {
                self.board.clear(first);
                self.board.clear(second);
                self.score = self.score.saturating_add(self.award);
                debug!(
                    "matched {} at ({}, {}) and ({}, {}), score {}",
                    a.as_str(),
                    first.row,
                    first.col,
                    second.row,
                    second.col,
                    self.score
                );
                SelectOutcome::Matched {
                    first,
                    second,
                    kind: a,
                }
            }
            _ => {
                debug!(
                    "mismatch at ({}, {}) and ({}, {})",
                    first.row, first.col, second.row, second.col
                );
                SelectOutcome::Mismatched { first, second }
            }
        }
    }
}
