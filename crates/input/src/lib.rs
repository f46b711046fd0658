//! Terminal input module (engine-facing).
//!
//! This module is the input router: it maps `crossterm` key and mouse events
//! into device-independent [`crate::types::InputEvent`]s and queues them so the
//! frame loop can drain everything that arrived since the previous tick.
//!
//! Pointer positions arrive as terminal cells. The router does not know the
//! screen geometry; callers pass a mapping from terminal cell to logical point
//! (usually the renderer's `GameView::to_logical`).

pub mod map;
pub mod queue;

pub use tui_match_types as types;

pub use map::{map_event, map_key, map_mouse};
pub use queue::InputQueue;
