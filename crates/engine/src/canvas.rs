//! Renderer collaborator.
//!
//! Screens describe a frame as a handful of primitive calls; a backend
//! rasterises them. Coordinates are in the backend's canvas unit.

use anyhow::Result;

use crate::types::{PieceKind, Rect, Rgba, SPRITE_SIZE};

/// Image a sprite is cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sheet {
    /// One square sprite per piece color, laid out left to right.
    Pieces,
    /// The play button image.
    PlayButton,
}

/// Text size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Title,
    Label,
}

pub trait Canvas {
    /// Fill the whole frame with `color`.
    fn clear(&mut self, color: Rgba);

    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Copy region `src` of `sheet` into `dst`, scaling as needed.
    fn draw_sprite(&mut self, sheet: Sheet, src: Rect, dst: Rect);

    /// Render `text` into `dst`.
    fn draw_text(&mut self, text: &str, size: TextSize, color: Rgba, dst: Rect);

    /// Show the frame.
    fn present(&mut self) -> Result<()>;
}

/// Source rectangle of a piece color in [`Sheet::Pieces`].
///
/// ```
/// use tui_blocks_engine::canvas::piece_sprite;
/// use tui_blocks_types::{PieceKind, Rect};
///
/// assert_eq!(piece_sprite(PieceKind::S), Rect::new(60, 0, 30, 30));
/// ```
pub fn piece_sprite(kind: PieceKind) -> Rect {
    Rect::new(
        kind.index() as i32 * SPRITE_SIZE as i32,
        0,
        SPRITE_SIZE,
        SPRITE_SIZE,
    )
}

/// Inverse of [`piece_sprite`], for backends decoding a source rectangle.
pub fn sprite_kind(src: Rect) -> Option<PieceKind> {
    if src.x < 0 {
        return None;
    }
    PieceKind::ALL
        .get(src.x as usize / SPRITE_SIZE as usize)
        .copied()
}

/// A recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Rgba),
    FillRect(Rect, Rgba),
    Sprite(Sheet, Rect, Rect),
    Text(String, TextSize, Rect),
}

/// Canvas that records calls instead of drawing. Used by tests.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
    pub presents: u32,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls of the current frame (everything since the last `clear`).
    pub fn frame(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text(s, _, _) => Some(s.as_str()),
            _ => None,
        })
    }

    pub fn fills_of(&self, color: Rgba) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect(_, col) if *col == color))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Rgba) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.calls.push(DrawCall::FillRect(rect, color));
    }

    fn draw_sprite(&mut self, sheet: Sheet, src: Rect, dst: Rect) {
        self.calls.push(DrawCall::Sprite(sheet, src, dst));
    }

    fn draw_text(&mut self, text: &str, size: TextSize, _color: Rgba, dst: Rect) {
        self.calls.push(DrawCall::Text(text.to_string(), size, dst));
    }

    fn present(&mut self) -> Result<()> {
        self.presents += 1;
        Ok(())
    }
}
