//! `Canvas` backend that rasterises into a [`FrameBuffer`].
//!
//! One canvas unit is one terminal cell. Sprites are painted as solid
//! blocks from a fixed palette and the play button is drawn as a framed
//! label, so no image assets are needed at runtime.

use anyhow::Result;

use crate::engine::canvas::{sprite_kind, Canvas, Sheet, TextSize};
use crate::fb::{FrameBuffer, Glyph};
use crate::renderer::TerminalRenderer;
use crate::types::{PieceKind, Rect, Rgba};

const BLOCK: char = '█';

/// Piece colors, in [`PieceKind`] order.
pub const PALETTE: [Rgba; 7] = [
    Rgba::rgb(80, 220, 220),  // I
    Rgba::rgb(240, 220, 80),  // O
    Rgba::rgb(100, 220, 120), // S
    Rgba::rgb(220, 80, 80),   // Z
    Rgba::rgb(255, 165, 0),   // L
    Rgba::rgb(80, 120, 220),  // J
    Rgba::rgb(200, 120, 220), // T
];

pub fn piece_color(kind: PieceKind) -> Rgba {
    PALETTE[kind.index()]
}

const PLAY_LABEL: &str = "PLAY";
const BUTTON_FACE: Rgba = Rgba::rgb(60, 140, 80);

pub struct TermCanvas {
    fb: FrameBuffer,
    /// `None` for a headless canvas.
    renderer: Option<TerminalRenderer>,
    presents: u64,
}

impl TermCanvas {
    /// Canvas flushing to `renderer`. The renderer must already be entered.
    pub fn new(renderer: TerminalRenderer, width: u16, height: u16) -> Self {
        Self {
            fb: FrameBuffer::new(width, height),
            renderer: Some(renderer),
            presents: 0,
        }
    }

    /// Canvas that only keeps the framebuffer.
    pub fn headless(width: u16, height: u16) -> Self {
        Self {
            fb: FrameBuffer::new(width, height),
            renderer: None,
            presents: 0,
        }
    }

    /// Follow a terminal resize. The next present redraws everything.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (width, height) == (self.fb.width(), self.fb.height()) {
            return;
        }
        self.fb.resize(width, height);
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.invalidate();
        }
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn presents(&self) -> u64 {
        self.presents
    }

    /// Give the renderer back, e.g. to restore the terminal.
    pub fn into_renderer(self) -> Option<TerminalRenderer> {
        self.renderer
    }

    fn frame(&mut self, rect: Rect, color: Rgba) {
        if rect.w < 2 || rect.h < 2 {
            return;
        }
        let right = rect.x + rect.w as i32 - 1;
        let bottom = rect.y + rect.h as i32 - 1;
        let edge = |x: i32, y: i32, ch: char, fb: &mut FrameBuffer| {
            if let Some(under) = fb.get(x, y) {
                fb.set(x, y, Glyph { ch, fg: color, bg: under.bg });
            }
        };
        for x in rect.x + 1..right {
            edge(x, rect.y, '─', &mut self.fb);
            edge(x, bottom, '─', &mut self.fb);
        }
        for y in rect.y + 1..bottom {
            edge(rect.x, y, '│', &mut self.fb);
            edge(right, y, '│', &mut self.fb);
        }
        edge(rect.x, rect.y, '┌', &mut self.fb);
        edge(right, rect.y, '┐', &mut self.fb);
        edge(rect.x, bottom, '└', &mut self.fb);
        edge(right, bottom, '┘', &mut self.fb);
    }

    /// Center `text` on the middle row of `dst`, truncating to fit.
    fn label(&mut self, text: &str, color: Rgba, dst: Rect) {
        let len = text.chars().count() as i32;
        let room = dst.w as i32;
        let x = dst.x + ((room - len) / 2).max(0);
        let y = dst.y + dst.h as i32 / 2;
        let shown: String = text.chars().take(room.max(0) as usize).collect();
        self.fb.put_str(x, y, &shown, color);
    }
}

/// Letter-spaced title text when it fits in `width`.
fn title_text(text: &str, width: u16) -> String {
    let spaced: String = text
        .chars()
        .flat_map(|c| [c, ' '])
        .collect::<String>()
        .trim_end()
        .to_uppercase();
    if spaced.chars().count() <= width as usize {
        spaced
    } else {
        text.to_uppercase()
    }
}

impl Canvas for TermCanvas {
    fn clear(&mut self, color: Rgba) {
        self.fb.clear(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.fb.fill(rect, Glyph::blank(color));
    }

    fn draw_sprite(&mut self, sheet: Sheet, src: Rect, dst: Rect) {
        match sheet {
            Sheet::Pieces => {
                let Some(kind) = sprite_kind(src) else {
                    return;
                };
                let color = piece_color(kind);
                self.fb.fill(
                    dst,
                    Glyph {
                        ch: BLOCK,
                        fg: color,
                        bg: color,
                    },
                );
            }
            Sheet::PlayButton => {
                self.fb.fill(dst, Glyph::blank(BUTTON_FACE));
                self.frame(dst, Rgba::WHITE);
                self.label(PLAY_LABEL, Rgba::WHITE, dst);
            }
        }
    }

    fn draw_text(&mut self, text: &str, size: TextSize, color: Rgba, dst: Rect) {
        match size {
            TextSize::Title => {
                let title = title_text(text, dst.w);
                self.label(&title, color, dst);
            }
            TextSize::Label => {
                // Label boxes tall enough for a border are buttons.
                if dst.h >= 3 {
                    self.frame(dst, color);
                }
                self.label(text, color, dst);
            }
        }
    }

    fn present(&mut self) -> Result<()> {
        self.presents += 1;
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.present_swap(&mut self.fb)?;
        }
        Ok(())
    }
}
