//! Game configuration - the fixed rule set a session is built from
//!
//! `GameConfig::default()` is the reference configuration from the types
//! crate. Any other configuration must pass [`GameConfig::validate`] before a
//! session can be constructed; a failure is fatal at startup.

use thiserror::Error;

use crate::types::{
    Difficulty, TileKind, BASE_COUNTDOWN_SECS, BOARD_COLS, BOARD_ROWS, CATALOG_SIZE,
    DIFFICULTY_STEP_SECS, FRAME_RATE, MATCH_AWARD, TILE_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH,
};

/// Configuration errors. A session cannot be constructed from a config that
/// produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tile catalog is empty")]
    EmptyCatalog,

    #[error("catalog of {requested} kinds exceeds the {available} built-in tile kinds")]
    CatalogTooLarge { requested: usize, available: usize },

    #[error("grid dimensions must be positive (got {rows}x{cols})")]
    InvalidGrid { rows: u16, cols: u16 },

    #[error("window {width}x{height} cannot hold a single {tile_size}-unit tile")]
    InvalidWindow {
        width: u16,
        height: u16,
        tile_size: u16,
    },

    #[error("{rows}x{cols} board of {tile_size}-unit tiles does not fit a {width}x{height} window")]
    BoardExceedsWindow {
        rows: u16,
        cols: u16,
        tile_size: u16,
        width: u16,
        height: u16,
    },

    #[error("base countdown of {base}s must exceed the {step}s difficulty step")]
    CountdownTooShort { base: u32, step: u32 },

    #[error("frame rate must be positive")]
    ZeroFrameRate,
}

/// Complete rule set for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Paired board rows.
    pub rows: u16,
    /// Paired board columns.
    pub cols: u16,
    /// Tile edge in logical units.
    pub tile_size: u16,
    /// Logical screen width; also sizes the flood board.
    pub width: u16,
    /// Logical screen height; also sizes the flood board.
    pub height: u16,
    /// How many kinds of [`TileKind::ALL`] are in play.
    pub catalog_size: usize,
    pub frame_rate: u32,
    pub base_countdown_secs: u32,
    pub difficulty_step_secs: u32,
    pub match_award: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            tile_size: TILE_SIZE,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            catalog_size: CATALOG_SIZE,
            frame_rate: FRAME_RATE,
            base_countdown_secs: BASE_COUNTDOWN_SECS,
            difficulty_step_secs: DIFFICULTY_STEP_SECS,
            match_award: MATCH_AWARD,
        }
    }
}

impl GameConfig {
    /// Check every constraint a session relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog_size == 0 {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.catalog_size > TileKind::ALL.len() {
            return Err(ConfigError::CatalogTooLarge {
                requested: self.catalog_size,
                available: TileKind::ALL.len(),
            });
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.tile_size == 0 || self.width < self.tile_size || self.height < self.tile_size {
            return Err(ConfigError::InvalidWindow {
                width: self.width,
                height: self.height,
                tile_size: self.tile_size,
            });
        }

        let board_w = u32::from(self.cols) * u32::from(self.tile_size);
        let board_h = u32::from(self.rows) * u32::from(self.tile_size);
        if board_w > u32::from(self.width) || board_h > u32::from(self.height) {
            return Err(ConfigError::BoardExceedsWindow {
                rows: self.rows,
                cols: self.cols,
                tile_size: self.tile_size,
                width: self.width,
                height: self.height,
            });
        }

        if self.base_countdown_secs <= self.difficulty_step_secs {
            return Err(ConfigError::CountdownTooShort {
                base: self.base_countdown_secs,
                step: self.difficulty_step_secs,
            });
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }

    /// Tile kinds in play.
    ///
    /// Clamped to the built-in set; `validate` rejects anything larger.
    pub fn catalog(&self) -> &'static [TileKind] {
        let all: &'static [TileKind] = &TileKind::ALL;
        &all[..self.catalog_size.min(all.len())]
    }

    /// Countdown budget for a difficulty, in seconds.
    pub fn budget_secs(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.base_countdown_secs + self.difficulty_step_secs,
            Difficulty::Normal => self.base_countdown_secs,
            Difficulty::Hard => self
                .base_countdown_secs
                .saturating_sub(self.difficulty_step_secs),
        }
    }

    /// Flood board dimensions: as many whole tiles as fit the window.
    pub fn flood_dims(&self) -> (u16, u16) {
        if self.tile_size == 0 {
            return (0, 0);
        }
        (self.height / self.tile_size, self.width / self.tile_size)
    }

    /// Frame interval in milliseconds (33ms at 30 ticks per second).
    pub fn tick_ms(&self) -> u64 {
        1000 / u64::from(self.frame_rate.max(1))
    }
}
