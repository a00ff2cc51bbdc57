//! Per-frame event sources.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event;

use crate::map::map_event;
use crate::types::InputEvent;

/// Yields at most one input event per frame.
pub trait EventSource {
    /// Wait up to `timeout` for the next event.
    ///
    /// Returns `Ok(None)` when nothing bound arrived in time.
    fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>>;
}

/// Reads events from the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl TerminalEvents {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for TerminalEvents {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(map_event(event::read()?))
    }
}

/// Replays a fixed list of events, one per call. Ignores the timeout.
#[derive(Debug, Default, Clone)]
pub struct ScriptedEvents {
    queue: VecDeque<Option<InputEvent>>,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event.
    pub fn push(&mut self, event: InputEvent) -> &mut Self {
        self.queue.push_back(Some(event));
        self
    }

    /// Queue `frames` frames without input.
    pub fn idle(&mut self, frames: usize) -> &mut Self {
        self.queue.extend(std::iter::repeat(None).take(frames));
        self
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl FromIterator<InputEvent> for ScriptedEvents {
    fn from_iter<T: IntoIterator<Item = InputEvent>>(iter: T) -> Self {
        Self {
            queue: iter.into_iter().map(Some).collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self, _timeout: Duration) -> Result<Option<InputEvent>> {
        Ok(self.queue.pop_front().flatten())
    }
}
