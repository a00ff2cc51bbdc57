//! Framebuffer of colored character cells.

use crate::types::{Rect, Rgba};

/// One terminal cell: a character and its colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Rgba,
    pub bg: Rgba,
}

impl Glyph {
    pub const fn blank(bg: Rgba) -> Self {
        Self {
            ch: ' ',
            fg: Rgba::WHITE,
            bg,
        }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::blank(Rgba::rgb(0, 0, 0))
    }
}

/// 2D grid of glyphs, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible. Contents are unspecified
    /// afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.glyphs
            .resize(width as usize * height as usize, Glyph::default());
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Glyph> {
        self.index(x, y).map(|i| self.glyphs[i])
    }

    /// Write one glyph. Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, glyph: Glyph) {
        if let Some(i) = self.index(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    pub fn clear(&mut self, bg: Rgba) {
        self.glyphs.fill(Glyph::blank(bg));
    }

    /// Fill `rect` (clipped) with `glyph`.
    pub fn fill(&mut self, rect: Rect, glyph: Glyph) {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = (rect.x + rect.w as i32).min(self.width as i32);
        let y1 = (rect.y + rect.h as i32).min(self.height as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                self.set(x, y, glyph);
            }
        }
    }

    /// Write `text` starting at `(x, y)` in `fg`, keeping each cell's background.
    pub fn put_str(&mut self, x: i32, y: i32, text: &str, fg: Rgba) {
        for (i, ch) in text.chars().enumerate() {
            let cx = x + i as i32;
            if let Some(under) = self.get(cx, y) {
                self.set(cx, y, Glyph { ch, fg, bg: under.bg });
            }
        }
    }

    /// Row `y` as plain text, for assertions.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width as i32)
            .filter_map(|x| self.get(x, y as i32))
            .map(|g| g.ch)
            .collect()
    }
}
