//! Maps screens and session state onto canvas calls.
//!
//! Pure functions over a [`Canvas`]; nothing here presents a frame.

use crate::canvas::{piece_sprite, Canvas, Sheet, TextSize};
use crate::core::{cells, GameSession};
use crate::layout::{self, PlayLayout, Viewport};
use crate::types::{Cell, Rect, Rgba, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Screen background.
pub const BACKGROUND: Rgba = Rgba::rgb(51, 51, 51);
/// Empty board cell.
pub const EMPTY_CELL: Rgba = Rgba::rgb(28, 28, 28);
/// Rows flagged for clearing flash white.
pub const CLEARING_CELL: Rgba = Rgba::WHITE;
/// Frames and labels.
pub const FOREGROUND: Rgba = Rgba::WHITE;

pub fn home(canvas: &mut (impl Canvas + ?Sized), vp: Viewport, bob: i32, hovered: bool) {
    canvas.clear(BACKGROUND);
    canvas.draw_text("The Tetris", TextSize::Title, FOREGROUND, layout::title(vp, bob));

    let button = layout::play_button_drawn(vp, hovered);
    canvas.draw_sprite(Sheet::PlayButton, Rect::new(0, 0, button.w, button.h), button);
}

pub fn game_over(
    canvas: &mut (impl Canvas + ?Sized),
    vp: Viewport,
    bob: i32,
    score: u32,
    hovered: bool,
) {
    canvas.clear(BACKGROUND);
    canvas.draw_text("Game Over", TextSize::Title, FOREGROUND, layout::title(vp, bob));
    canvas.draw_text(
        &format!("Score: {score}"),
        TextSize::Label,
        FOREGROUND,
        layout::score_label(vp),
    );
    canvas.draw_text(
        "Go Back",
        TextSize::Label,
        FOREGROUND,
        layout::back_button_drawn(vp, hovered),
    );
}

/// Board, falling piece, next-piece frame and score.
pub fn play(canvas: &mut (impl Canvas + ?Sized), vp: Viewport, session: &GameSession) {
    let layout = PlayLayout::new(vp);
    canvas.clear(BACKGROUND);

    draw_frame(canvas, layout.board_frame(), FOREGROUND);

    for (y, row) in session.board().rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let dst = layout.cell(x as i8, y as i8);
            match *cell {
                Cell::Empty => canvas.fill_rect(dst, EMPTY_CELL),
                Cell::Clearing => canvas.fill_rect(dst, CLEARING_CELL),
                Cell::Locked(kind) => canvas.draw_sprite(Sheet::Pieces, piece_sprite(kind), dst),
            }
        }
    }

    if let Some(active) = session.active() {
        for (x, y) in active.board_cells() {
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                canvas.draw_sprite(Sheet::Pieces, piece_sprite(active.kind), layout.cell(x, y));
            }
        }
    }

    if let Some(frame) = layout.next_frame {
        draw_frame(canvas, frame, FOREGROUND);
        let next = session.next();
        for (px, py) in cells(next, Rotation::North) {
            if let Some(dst) = layout.next_cell(px, py) {
                canvas.draw_sprite(Sheet::Pieces, piece_sprite(next), dst);
            }
        }
    }

    if let Some(score) = layout.score {
        canvas.draw_text(
            &format!("SCORE {}", session.score()),
            TextSize::Label,
            FOREGROUND,
            score,
        );
    }
}

/// One-unit outline around `outer`.
fn draw_frame(canvas: &mut (impl Canvas + ?Sized), outer: Rect, color: Rgba) {
    if outer.w < 2 || outer.h < 2 {
        return;
    }
    let right = outer.x + outer.w as i32 - 1;
    let bottom = outer.y + outer.h as i32 - 1;
    canvas.fill_rect(Rect::new(outer.x, outer.y, outer.w, 1), color);
    canvas.fill_rect(Rect::new(outer.x, bottom, outer.w, 1), color);
    canvas.fill_rect(Rect::new(outer.x, outer.y, 1, outer.h), color);
    canvas.fill_rect(Rect::new(right, outer.y, 1, outer.h), color);
}
