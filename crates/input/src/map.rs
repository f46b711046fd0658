//! Event mapping from terminal events to engine input.

use crate::types::{InputEvent, Key, Point};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map keyboard input to engine input.
///
/// Only presses count; repeats and releases are ignored.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C stands in for the window-close signal.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Close);
    }

    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Key(Key::Restart)),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Key(Key::Quit)),
        _ => None,
    }
}

/// Map a left-button press to a click at the logical point under the cursor.
///
/// Presses outside the drawn screen (where `to_logical` yields `None`) and
/// every other mouse event are ignored.
pub fn map_mouse(
    mouse: MouseEvent,
    to_logical: impl Fn(u16, u16) -> Option<Point>,
) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            to_logical(mouse.column, mouse.row).map(InputEvent::Click)
        }
        _ => None,
    }
}

pub fn map_event(
    event: &Event,
    to_logical: impl Fn(u16, u16) -> Option<Point>,
) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Mouse(mouse) => map_mouse(*mouse, to_logical),
        _ => None,
    }
}
