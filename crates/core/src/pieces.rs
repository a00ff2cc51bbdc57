//! Pieces module - tetromino shape table and the 4x4 rotation indexer
//!
//! Every shape is a 4x4 occupancy mask stored once, at its North orientation.
//! Rotated orientations are never materialised: [`rotated_index`] maps a
//! cell of the rotated box back into the canonical mask.

use crate::types::{PieceKind, Rotation};

/// 4x4 occupancy mask, row-major (`py * 4 + px`).
pub type Mask = [bool; 16];

/// Parse a 16-character `x`/`.` pattern into a mask at compile time.
const fn parse_mask(pattern: &[u8; 16]) -> Mask {
    let mut mask = [false; 16];
    let mut i = 0;
    while i < 16 {
        mask[i] = pattern[i] == b'x';
        i += 1;
    }
    mask
}

/// Shape table, indexed by [`PieceKind::index`].
static SHAPES: [Mask; 7] = [
    parse_mask(b"..x...x...x...x."), // I
    parse_mask(b".xx..xx........."), // O
    parse_mask(b".....xx.xx......"), // S
    parse_mask(b"....xx...xx....."), // Z
    parse_mask(b".....x...x...xx."), // L
    parse_mask(b"......x...x..xx."), // J
    parse_mask(b"....xxx..x......"), // T
];

/// Canonical (North) mask of a piece kind.
pub fn mask(kind: PieceKind) -> &'static Mask {
    &SHAPES[kind.index()]
}

/// Index into a canonical mask for cell `(px, py)` of the box rotated by
/// `rotation`.
///
/// For each rotation this is a bijection over the 16 cells, so a shape is
/// rotated in place without copying it.
///
/// ```
/// use tui_blocks_core::pieces::rotated_index;
/// use tui_blocks_types::Rotation;
///
/// assert_eq!(rotated_index(0, 0, Rotation::North), 0);
/// assert_eq!(rotated_index(0, 0, Rotation::East), 12);
/// assert_eq!(rotated_index(0, 0, Rotation::South), 15);
/// assert_eq!(rotated_index(0, 0, Rotation::West), 3);
/// ```
#[inline(always)]
pub fn rotated_index(px: usize, py: usize, rotation: Rotation) -> usize {
    debug_assert!(px < 4 && py < 4, "cell ({px}, {py}) outside the 4x4 box");
    match rotation {
        Rotation::North => py * 4 + px,
        Rotation::East => 12 + py - 4 * px,
        Rotation::South => 15 - px - 4 * py,
        Rotation::West => 3 - py + 4 * px,
    }
}

/// Whether cell `(px, py)` of the rotated box is occupied.
#[inline(always)]
pub fn is_filled(kind: PieceKind, px: usize, py: usize, rotation: Rotation) -> bool {
    mask(kind)[rotated_index(px, py, rotation)]
}

/// Occupied `(px, py)` offsets of a rotated shape, scanning rows top to bottom.
pub fn cells(kind: PieceKind, rotation: Rotation) -> impl Iterator<Item = (i8, i8)> {
    (0..16usize).filter_map(move |i| {
        let (px, py) = (i % 4, i / 4);
        is_filled(kind, px, py, rotation).then_some((px as i8, py as i8))
    })
}
