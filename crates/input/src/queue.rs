//! Input queue drained once per frame.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::map::map_event;
use crate::types::{InputEvent, Point};

/// Pending input, filled from the terminal and drained by the frame loop.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<InputEvent>,
    resized: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait up to `timeout` for terminal events, then take everything that is
    /// immediately available.
    pub fn pump(
        &mut self,
        timeout: Duration,
        to_logical: impl Fn(u16, u16) -> Option<Point>,
    ) -> Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        loop {
            let ev = event::read()?;
            self.route(&ev, &to_logical);
            if !event::poll(Duration::ZERO)? {
                return Ok(());
            }
        }
    }

    /// Queue one terminal event. Resizes are recorded, not queued.
    pub fn route(&mut self, event: &Event, to_logical: impl Fn(u16, u16) -> Option<Point>) {
        if let Event::Resize(_, _) = event {
            self.resized = true;
            return;
        }
        if let Some(input) = map_event(event, to_logical) {
            self.pending.push_back(input);
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take queued input in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.pending.drain(..)
    }

    /// True once after the terminal was resized.
    pub fn take_resized(&mut self) -> bool {
        std::mem::take(&mut self.resized)
    }
}
