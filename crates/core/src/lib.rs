//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the tile-matching rules and the screen flow of a
//! session. It has **no dependencies** on terminals, input devices or I/O:
//!
//! - **Deterministic**: the same seed produces the same boards
//! - **Clock-agnostic**: time is passed in as monotonic milliseconds, so
//!   correctness never depends on the frame cadence
//! - **Total**: every operation is a synchronous function of session state;
//!   invalid input is a no-op, never an error
//!
//! # Module Structure
//!
//! - [`board`]: rectangular grid of empty / occupied cells
//! - [`generator`]: paired (even counts, clearable) and flood (random) boards
//! - [`selection`]: two-cell selection, match resolution and score
//! - [`clock`]: countdown as a pure function of wall time
//! - [`layout`]: logical screen geometry and hit testing
//! - [`screen`]: per-screen input contracts (dispatch table)
//! - [`session`]: the single mutable session driven by the frame loop
//! - [`snapshot`]: read-only per-frame view for renderers
//! - [`config`]: rule set and configuration errors
//! - [`rng`]: seeded LCG shared by both generators
//!
//! # Example
//!
//! ```
//! use tui_match_core::{GameConfig, Session};
//! use tui_match_types::{Difficulty, Screen};
//!
//! let mut session = Session::new(GameConfig::default(), 12345, 0).unwrap();
//! session.open_difficulty_select();
//! session.choose_difficulty(Difficulty::Normal, 0).unwrap();
//! assert_eq!(session.screen(), Screen::Playing);
//! assert_eq!(session.budget_secs(), 30);
//!
//! // Thirty-one seconds later the countdown has run out.
//! session.update(31_000);
//! assert_eq!(session.screen(), Screen::GameOver);
//! ```

pub mod board;
pub mod clock;
pub mod config;
pub mod generator;
pub mod layout;
pub mod rng;
pub mod screen;
pub mod selection;
pub mod session;
pub mod snapshot;

pub use tui_match_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::GameClock;
pub use config::{ConfigError, GameConfig};
pub use generator::{generate, generate_flood, generate_paired, per_kind_count};
pub use layout::{Layout, MenuOption, Rect};
pub use rng::SimpleRng;
pub use screen::{handler, ScreenInput};
pub use selection::{MatchEngine, RejectReason, SelectOutcome};
pub use session::Session;
pub use snapshot::GameSnapshot;
