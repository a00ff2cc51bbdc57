//! Screen flow and frame composition.
//!
//! This crate drives the game one frame at a time. It knows nothing about
//! terminals: drawing goes through the [`Canvas`] trait and music through
//! the [`Audio`] trait, so the whole flow can be stepped from tests with a
//! [`RecordingCanvas`] and a [`SilentAudio`].

pub mod audio;
pub mod canvas;
pub mod draw;
pub mod layout;
pub mod screens;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use audio::{Audio, SilentAudio};
pub use canvas::{Canvas, DrawCall, RecordingCanvas, Sheet, TextSize};
pub use layout::Viewport;
pub use screens::{App, Frame, Screen};
