//! Collision checking of a rotated shape against the board.

use crate::board::Board;
use crate::pieces::is_filled;
use crate::types::{PieceKind, Rotation};

/// Whether `kind` at `(x, y)` with `rotation` fits on `board`.
///
/// Fails when any occupied mask cell projects outside the board or onto a
/// non-empty board cell. Empty mask cells never constrain, so a shape may
/// hang partially outside the board through its empty border.
///
/// This is a pure query: callers check first and commit a move only when it
/// returns true.
pub fn fits(board: &Board, kind: PieceKind, x: i8, y: i8, rotation: Rotation) -> bool {
    for py in 0..4 {
        for px in 0..4 {
            if !is_filled(kind, px, py, rotation) {
                continue;
            }
            if !board.is_valid(x + px as i8, y + py as i8) {
                return false;
            }
        }
    }
    true
}
