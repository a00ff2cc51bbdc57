//! Terminal backend.
//!
//! A small, game-oriented rendering layer: canvas calls are rasterised into
//! a framebuffer of colored cells, which is then diffed and flushed to the
//! terminal with crossterm. No widget toolkit is involved.

pub mod canvas;
pub mod fb;
pub mod renderer;

pub use tui_blocks_engine as engine;
pub use tui_blocks_types as types;

pub use canvas::{piece_color, TermCanvas, PALETTE};
pub use fb::{FrameBuffer, Glyph};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
