//! Screen geometry and clickable hot-zones.
//!
//! Everything is measured in canvas units and recomputed from the viewport
//! each frame, so a resize simply moves things around.

use crate::types::{Rect, BOARD_HEIGHT, BOARD_WIDTH};

/// Canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    fn center(&self) -> (i32, i32) {
        (self.width as i32 / 2, self.height as i32 / 2)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

/// Board cell width in canvas units.
///
/// 2x1 helps compensate for typical terminal glyph aspect ratio.
pub const CELL_W: u16 = 2;
/// Board cell height in canvas units.
pub const CELL_H: u16 = 1;

/// Padding between the next-piece frame and the piece.
const NEXT_PADDING: u16 = 1;

const PLAY_BUTTON: (u16, u16) = (10, 3);
const BACK_BUTTON: (u16, u16) = (15, 3);
const BACK_BUTTON_HOVER_W: u16 = 20;

/// Home screen: base play button, hit-tested before it is enlarged.
pub fn play_button(vp: Viewport) -> Rect {
    let (cx, cy) = vp.center();
    Rect::centered(cx, cy + 4, PLAY_BUTTON.0, PLAY_BUTTON.1)
}

/// Play button as drawn: doubled in both directions while hovered.
pub fn play_button_drawn(vp: Viewport, hovered: bool) -> Rect {
    if !hovered {
        return play_button(vp);
    }
    let (cx, cy) = vp.center();
    Rect::centered(cx, cy + 4, PLAY_BUTTON.0 * 2, PLAY_BUTTON.1 * 2)
}

/// Game over screen: base "go back" zone.
pub fn back_button(vp: Viewport) -> Rect {
    let (cx, cy) = vp.center();
    Rect::centered(cx, cy + 6, BACK_BUTTON.0, BACK_BUTTON.1)
}

/// "Go back" zone as drawn: wider while hovered.
pub fn back_button_drawn(vp: Viewport, hovered: bool) -> Rect {
    let base = back_button(vp);
    if !hovered {
        return base;
    }
    let (cx, _) = vp.center();
    Rect::centered(cx, base.y + base.h as i32 / 2, BACK_BUTTON_HOVER_W, base.h)
}

/// Title line, bobbing by `bob` units.
pub fn title(vp: Viewport, bob: i32) -> Rect {
    let (cx, cy) = vp.center();
    Rect::centered(cx, cy - 5 + bob, 30, 3)
}

/// Score label on the game over screen.
pub fn score_label(vp: Viewport) -> Rect {
    let (cx, cy) = vp.center();
    Rect::centered(cx, cy + 1, 20, 1)
}

/// Placement of the board and side panel on the play screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayLayout {
    /// Top-left of board cell (0, 0).
    pub board_x: i32,
    pub board_y: i32,
    /// Outer rectangle of the next-piece frame, when there is room for it.
    pub next_frame: Option<Rect>,
    /// Where the score line goes, under the next-piece frame.
    pub score: Option<Rect>,
}

impl PlayLayout {
    pub fn new(vp: Viewport) -> Self {
        let board_w = (BOARD_WIDTH as u16 * CELL_W) as i32;
        let board_h = (BOARD_HEIGHT as u16 * CELL_H) as i32;
        let board_x = (vp.width as i32 - board_w) / 2;
        let board_y = ((vp.height as i32 - board_h) / 2).max(0);

        // Only draw the next piece when the strip right of the board can hold it.
        let strip_x = board_x + board_w + 1;
        let strip_w = vp.width as i32 - strip_x;
        let frame_w = (4 * CELL_W + 2 * NEXT_PADDING + 2) as i32;
        let frame_h = (4 * CELL_H + 2 * NEXT_PADDING + 2) as i32;

        let (next_frame, score) = if strip_w > frame_w {
            let x = strip_x + (strip_w - frame_w) / 2;
            let frame = Rect::new(x, board_y, frame_w as u16, frame_h as u16);
            let score = Rect::new(x, board_y + frame_h + 1, frame_w as u16, 1);
            (Some(frame), Some(score))
        } else {
            (None, None)
        };

        Self {
            board_x,
            board_y,
            next_frame,
            score,
        }
    }

    /// Destination rectangle of board cell `(x, y)`.
    pub fn cell(&self, x: i8, y: i8) -> Rect {
        Rect::new(
            self.board_x + x as i32 * CELL_W as i32,
            self.board_y + y as i32 * CELL_H as i32,
            CELL_W,
            CELL_H,
        )
    }

    /// Outer frame around the board.
    pub fn board_frame(&self) -> Rect {
        Rect::new(
            self.board_x - 1,
            self.board_y - 1,
            BOARD_WIDTH as u16 * CELL_W + 2,
            BOARD_HEIGHT as u16 * CELL_H + 2,
        )
    }

    /// Destination of cell `(px, py)` of the next piece's 4x4 box.
    pub fn next_cell(&self, px: i8, py: i8) -> Option<Rect> {
        let frame = self.next_frame?;
        let inner_x = frame.x + 1 + NEXT_PADDING as i32;
        let inner_y = frame.y + 1 + NEXT_PADDING as i32;
        Some(Rect::new(
            inner_x + px as i32 * CELL_W as i32,
            inner_y + py as i32 * CELL_H as i32,
            CELL_W,
            CELL_H,
        ))
    }
}
