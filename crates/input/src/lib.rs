//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events into [`crate::types::InputEvent`]
//! and hands the frame loop at most one event per frame.

pub mod map;
pub mod source;

pub use tui_blocks_types as types;

pub use map::{is_confirm, key_action, map_event, should_quit};
pub use source::{EventSource, ScriptedEvents, TerminalEvents};
