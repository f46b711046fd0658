//! Logical screen geometry and hit testing.
//!
//! Everything here is expressed in logical units over the configured window.
//! Option regions are open rectangles: a point exactly on an edge hits
//! nothing, and the band between two stacked options belongs to neither.

use crate::board::Board;
use crate::config::GameConfig;
use crate::types::{Coord, Difficulty, Point};

/// Half the width of a menu/difficulty option band.
const OPTION_HALF_WIDTH: i32 = 100;
/// Height of a single option band.
const OPTION_HEIGHT: i32 = 100;
/// Offset of the title line above the screen centre.
const TITLE_OFFSET: i32 = 100;

/// Axis-aligned rectangle in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict containment (edges excluded).
    pub fn contains(&self, p: Point) -> bool {
        p.x > self.x && p.x < self.x + self.w && p.y > self.y && p.y < self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }
}

/// Menu entries. Both lead to difficulty selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    Start,
    Difficulty,
}

impl MenuOption {
    pub const ALL: [MenuOption; 2] = [MenuOption::Start, MenuOption::Difficulty];
}

/// Screen geometry derived from a [`GameConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
    pub tile_size: u16,
}

impl Layout {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            tile_size: config.tile_size,
        }
    }

    fn center(&self) -> Point {
        Point::new(i32::from(self.width) / 2, i32::from(self.height) / 2)
    }

    /// Option band whose vertical centre sits `dy` below the screen centre.
    fn option_band(&self, dy: i32) -> Rect {
        let c = self.center();
        Rect::new(
            c.x - OPTION_HALF_WIDTH,
            c.y + dy - OPTION_HEIGHT / 2,
            2 * OPTION_HALF_WIDTH,
            OPTION_HEIGHT,
        )
    }

    pub fn title_anchor(&self) -> Point {
        let c = self.center();
        Point::new(c.x, c.y - TITLE_OFFSET)
    }

    pub fn menu_region(&self, option: MenuOption) -> Rect {
        match option {
            MenuOption::Start => self.option_band(0),
            MenuOption::Difficulty => self.option_band(OPTION_HEIGHT),
        }
    }

    pub fn difficulty_region(&self, difficulty: Difficulty) -> Rect {
        match difficulty {
            Difficulty::Easy => self.option_band(-OPTION_HEIGHT),
            Difficulty::Normal => self.option_band(0),
            Difficulty::Hard => self.option_band(OPTION_HEIGHT),
        }
    }

    pub fn menu_hit(&self, p: Point) -> Option<MenuOption> {
        MenuOption::ALL
            .into_iter()
            .find(|option| self.menu_region(*option).contains(p))
    }

    pub fn difficulty_hit(&self, p: Point) -> Option<Difficulty> {
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| self.difficulty_region(*difficulty).contains(p))
    }

    /// Top-left of a `rows x cols` board anchored to the bottom-right of the
    /// window.
    pub fn origin_for(&self, rows: u16, cols: u16) -> Point {
        let ts = i32::from(self.tile_size);
        Point::new(
            i32::from(self.width) - i32::from(cols) * ts,
            i32::from(self.height) - i32::from(rows) * ts,
        )
    }

    pub fn board_origin(&self, board: &Board) -> Point {
        self.origin_for(board.rows(), board.cols())
    }

    /// Cell under a point, `None` outside the board.
    pub fn cell_at(&self, board: &Board, p: Point) -> Option<Coord> {
        let ts = i32::from(self.tile_size);
        if ts == 0 {
            return None;
        }
        let origin = self.board_origin(board);
        let col = (p.x - origin.x).div_euclid(ts);
        let row = (p.y - origin.y).div_euclid(ts);
        if row < 0 || col < 0 || row >= i32::from(board.rows()) || col >= i32::from(board.cols()) {
            return None;
        }
        Some(Coord::new(row as u16, col as u16))
    }

    /// Logical rectangle covered by cell `at` of a `rows x cols` board.
    pub fn cell_rect(&self, rows: u16, cols: u16, at: Coord) -> Rect {
        let ts = i32::from(self.tile_size);
        let origin = self.origin_for(rows, cols);
        Rect::new(
            origin.x + i32::from(at.col) * ts,
            origin.y + i32::from(at.row) * ts,
            ts,
            ts,
        )
    }

    pub fn tile_rect(&self, board: &Board, at: Coord) -> Rect {
        self.cell_rect(board.rows(), board.cols(), at)
    }
}
