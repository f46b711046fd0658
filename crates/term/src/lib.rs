//! Terminal renderer for the tile-matching game.
//!
//! Renders a [`core::GameSnapshot`] into a simple framebuffer and flushes it
//! to a crossterm backend. No widget toolkit is involved.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Map mouse cells back to logical coordinates without guesswork
//! - Allow precise control over aspect ratio (4x2 cells per tile by default)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_match_core as core;
pub use tui_match_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
