//! Snapshot module - read-only view of a session for rendering
//!
//! Renderers never touch the session directly. The frame loop copies the
//! state they need into a [`GameSnapshot`] once per frame.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::layout::Layout;
use crate::types::{BoardLayout, Cell, Coord, Difficulty, Screen};

/// Read-only view of a session, taken once per frame for rendering.
///
/// Reuse one snapshot across frames with `Session::snapshot_into`; the board
/// vector keeps its allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub screen: Screen,
    pub rows: u16,
    pub cols: u16,
    /// Row-major cells, `rows * cols` long.
    pub board: Vec<Cell>,
    pub selection: ArrayVec<Coord, 2>,
    pub score: u32,
    pub remaining_ms: u64,
    pub budget_secs: u32,
    pub difficulty: Difficulty,
    pub board_layout: BoardLayout,
    pub layout: Layout,
    pub episode_id: u32,
    pub running: bool,
}

impl GameSnapshot {
    pub fn cell(&self, at: Coord) -> Option<Cell> {
        if at.row >= self.rows || at.col >= self.cols {
            return None;
        }
        self.board
            .get(usize::from(at.row) * usize::from(self.cols) + usize::from(at.col))
            .copied()
    }

    pub fn is_selected(&self, at: Coord) -> bool {
        self.selection.contains(&at)
    }

    pub fn playable(&self) -> bool {
        self.running && self.screen == Screen::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            screen: Screen::Menu,
            rows: 0,
            cols: 0,
            board: Vec::new(),
            selection: ArrayVec::new(),
            score: 0,
            remaining_ms: 0,
            budget_secs: 0,
            difficulty: Difficulty::Normal,
            board_layout: BoardLayout::Paired,
            layout: Layout::from_config(&GameConfig::default()),
            episode_id: 0,
            running: true,
        }
    }
}
