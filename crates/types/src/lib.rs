//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input routing).
//!
//! # Reference Configuration
//!
//! The game rules are fixed constants, not runtime flags:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_ROWS` | 6 | Rows of the paired board |
//! | `BOARD_COLS` | 6 | Columns of the paired board |
//! | `TILE_SIZE` | 100 | Tile edge in logical units |
//! | `WINDOW_WIDTH` | 600 | Logical screen width |
//! | `WINDOW_HEIGHT` | 600 | Logical screen height |
//! | `CATALOG_SIZE` | 6 | Number of tile kinds in play |
//! | `FRAME_RATE` | 30 | Frame loop cadence (ticks per second) |
//! | `BASE_COUNTDOWN_SECS` | 30 | Countdown on normal difficulty |
//! | `DIFFICULTY_STEP_SECS` | 10 | Added on easy, removed on hard |
//! | `MATCH_AWARD` | 10 | Points per cleared pair |
//!
//! # Logical Coordinates
//!
//! Pointer positions are expressed in logical units over a
//! `WINDOW_WIDTH x WINDOW_HEIGHT` screen with the origin at the top-left.
//! Renderers scale this space to whatever output they drive and map clicks
//! back into it, so hit regions and board geometry stay renderer-agnostic.
//!
//! # Examples
//!
//! ```
//! use tui_match_types::{BoardLayout, Difficulty, Screen, TileKind, CATALOG_SIZE};
//!
//! // Kinds carry stable lowercase names for logs
//! assert_eq!(TileKind::Yarn.as_str(), "yarn");
//! assert_eq!(TileKind::ALL.len(), CATALOG_SIZE);
//!
//! // Terminal screens refuse board clicks
//! assert!(Screen::Victory.is_terminal());
//! assert!(!Screen::Playing.is_terminal());
//!
//! assert_eq!(Difficulty::Hard.board_layout(), BoardLayout::Flood);
//! ```

/// Paired board rows.
pub const BOARD_ROWS: u16 = 6;

/// Paired board columns.
pub const BOARD_COLS: u16 = 6;

/// Tile edge length in logical units.
pub const TILE_SIZE: u16 = 100;

/// Logical screen width.
pub const WINDOW_WIDTH: u16 = 600;

/// Logical screen height.
pub const WINDOW_HEIGHT: u16 = 600;

/// Number of tile kinds drawn from the catalog in the reference configuration.
pub const CATALOG_SIZE: usize = 6;

/// Frame loop cadence in ticks per second.
pub const FRAME_RATE: u32 = 30;

/// Countdown budget on normal difficulty, in seconds.
pub const BASE_COUNTDOWN_SECS: u32 = 30;

/// Seconds added on easy and removed on hard.
pub const DIFFICULTY_STEP_SECS: u32 = 10;

/// Points awarded per matched pair.
pub const MATCH_AWARD: u32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_configuration_defaults() {
        assert_eq!((BOARD_ROWS, BOARD_COLS), (6, 6));
        assert_eq!(TILE_SIZE, 100);
        assert_eq!((WINDOW_WIDTH, WINDOW_HEIGHT), (600, 600));
        assert_eq!(CATALOG_SIZE, 6);
        assert_eq!(FRAME_RATE, 30);
        assert_eq!(BASE_COUNTDOWN_SECS, 30);
        assert_eq!(DIFFICULTY_STEP_SECS, 10);
        assert_eq!(MATCH_AWARD, 10);
    }

    #[test]
    fn tile_kind_names_are_distinct() {
        for (i, a) in TileKind::ALL.iter().enumerate() {
            for b in &TileKind::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn only_end_screens_are_terminal() {
        assert!(Screen::GameOver.is_terminal());
        assert!(Screen::Victory.is_terminal());
        assert!(!Screen::Menu.is_terminal());
        assert!(!Screen::DifficultySelect.is_terminal());
        assert!(!Screen::Playing.is_terminal());
    }
}

/// The fixed tile catalog.
///
/// Two cells match iff they hold the same kind; position never matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileKind {
    Cat,
    Fish,
    Yarn,
    Paw,
    Mouse,
    Bell,
}

impl TileKind {
    /// Every kind in catalog order.
    pub const ALL: [TileKind; CATALOG_SIZE] = [
        TileKind::Cat,
        TileKind::Fish,
        TileKind::Yarn,
        TileKind::Paw,
        TileKind::Mouse,
        TileKind::Bell,
    ];

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Cat => "cat",
            TileKind::Fish => "fish",
            TileKind::Yarn => "yarn",
            TileKind::Paw => "paw",
            TileKind::Mouse => "mouse",
            TileKind::Bell => "bell",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell (never filled again once emptied)
/// - `Some(TileKind)`: Cell occupied by a tile of that kind
pub type Cell = Option<TileKind>;

/// Board coordinate (row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub row: u16,
    pub col: u16,
}

impl Coord {
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

/// Point in logical screen space.
///
/// Signed so that clicks left of or above a board origin stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Difficulty picked on the selection screen.
///
/// Drives the countdown budget and the board-generation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Board policy used when this difficulty starts a play-through.
    pub fn board_layout(&self) -> BoardLayout {
        match self {
            Difficulty::Easy | Difficulty::Normal => BoardLayout::Paired,
            Difficulty::Hard => BoardLayout::Flood,
        }
    }
}

/// Board-generation policy.
///
/// - **Paired**: every kind appears an even number of times, fully clearable
/// - **Flood**: every cell drawn independently at random, may be unsolvable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardLayout {
    Paired,
    Flood,
}

impl BoardLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardLayout::Paired => "paired",
            BoardLayout::Flood => "flood",
        }
    }
}

/// Logical screen currently active. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Menu,
    DifficultySelect,
    Playing,
    GameOver,
    Victory,
}

impl Screen {
    /// End screens: board input is refused until restart.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Screen::GameOver | Screen::Victory)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Menu => "menu",
            Screen::DifficultySelect => "difficulty",
            Screen::Playing => "playing",
            Screen::GameOver => "game_over",
            Screen::Victory => "victory",
        }
    }
}

/// Logical keys understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Start a fresh paired board from an end screen
    Restart,
    /// Stop accepting input and end the session
    Quit,
}

/// Device-independent input event, produced by the input router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer press at a logical point
    Click(Point),
    /// Logical key press
    Key(Key),
    /// Window-close signal
    Close,
}
