//! TUI Match (workspace facade crate).
//!
//! Exposes `tui_match::{core,input,term,types}` while the implementation lives
//! in dedicated crates under `crates/`, plus the binary's run-time settings.

pub mod run_config;

pub use tui_match_core as core;
pub use tui_match_input as input;
pub use tui_match_term as term;
pub use tui_match_types as types;
