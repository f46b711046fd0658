//! Screen state machine input routing.
//!
//! Each [`Screen`] variant has a fixed input contract implemented by one
//! [`ScreenInput`] handler; [`handler`] is the dispatch table. Inputs a screen
//! does not understand are no-ops. Quit and window-close are handled by the
//! session before dispatch, so they work from every screen.
//!
//! | Screen | Click | Restart |
//! |--------|-------|---------|
//! | Menu | either option -> DifficultySelect | - |
//! | DifficultySelect | easy/normal/hard -> Playing | - |
//! | Playing | select the tile under the pointer | - |
//! | GameOver / Victory | - | new paired board -> Playing |

use crate::config::ConfigError;
use crate::session::Session;
use crate::types::{Key, Point, Screen};

/// Input contract of a single screen.
pub trait ScreenInput: Sync {
    fn on_click(
        &self,
        _session: &mut Session,
        _at: Point,
        _now_ms: u64,
    ) -> Result<(), ConfigError> {
        Ok(())
    }

    fn on_key(&self, _session: &mut Session, _key: Key, _now_ms: u64) -> Result<(), ConfigError> {
        Ok(())
    }
}

struct MenuInput;
struct DifficultyInput;
struct PlayingInput;
struct EndInput;

impl ScreenInput for MenuInput {
    fn on_click(&self, session: &mut Session, at: Point, _now_ms: u64) -> Result<(), ConfigError> {
        // Both entries lead to the same screen.
        if session.layout().menu_hit(at).is_some() {
            session.open_difficulty_select();
        }
        Ok(())
    }
}

impl ScreenInput for DifficultyInput {
    fn on_click(&self, session: &mut Session, at: Point, now_ms: u64) -> Result<(), ConfigError> {
        if let Some(difficulty) = session.layout().difficulty_hit(at) {
            session.choose_difficulty(difficulty, now_ms)?;
        }
        Ok(())
    }
}

impl ScreenInput for PlayingInput {
    fn on_click(&self, session: &mut Session, at: Point, now_ms: u64) -> Result<(), ConfigError> {
        session.click_board(at, now_ms);
        Ok(())
    }
}

impl ScreenInput for EndInput {
    fn on_key(&self, session: &mut Session, key: Key, now_ms: u64) -> Result<(), ConfigError> {
        if key == Key::Restart {
            session.restart(now_ms)?;
        }
        Ok(())
    }
}

/// Handler for the active screen.
pub fn handler(screen: Screen) -> &'static dyn ScreenInput {
    match screen {
        Screen::Menu => &MenuInput,
        Screen::DifficultySelect => &DifficultyInput,
        Screen::Playing => &PlayingInput,
        Screen::GameOver | Screen::Victory => &EndInput,
    }
}
