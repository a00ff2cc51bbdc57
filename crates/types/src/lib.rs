//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, screens, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (5, 0), the top-left corner of the 4x4 piece box
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Input poll timeout, paces the frame loop (~60 FPS) |
//! | `FALL_SPEED` | 3.0 | Natural fall speed in rows per second |
//! | `LINE_CLEAR_PAUSE_MS` | 100 | Flash shown before full rows collapse |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{Cell, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.color(), 7);
//! assert_eq!(Cell::Locked(piece).code(), 7);
//!
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Column where new pieces spawn (left edge of the 4x4 box).
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8;

/// Row where new pieces spawn (top edge of the 4x4 box).
pub const SPAWN_Y: i8 = 0;

/// Frame pacing interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Natural fall speed in rows per second.
pub const FALL_SPEED: f32 = 3.0;

/// How long full rows stay visible as [`Cell::Clearing`] before collapsing.
pub const LINE_CLEAR_PAUSE_MS: u32 = 100;

/// Points awarded for every cleared row.
pub const SCORE_PER_LINE: u32 = 100;

/// Music volume on the home and game over screens (mixer scale 0-128).
pub const MENU_VOLUME: u8 = 10;

/// Music volume while playing.
pub const PLAY_VOLUME: u8 = 50;

/// Music fade-in on startup in milliseconds.
pub const MUSIC_FADE_IN_MS: u32 = 100;

/// Side length of one sprite in the piece sheet, in sheet units.
pub const SPRITE_SIZE: u16 = 30;

/// Numeric code of [`Cell::Clearing`].
pub const CLEARING_CODE: u8 = 127;

/// The seven tetromino piece kinds, in shape-table order.
///
/// The declaration order matters: a piece's board color is its index + 1,
/// and the piece sprite sheet is laid out in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    S,
    Z,
    L,
    J,
    T,
}

impl PieceKind {
    /// All kinds, indexable by [`PieceKind::index`].
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
    ];

    /// Position in the shape table (0..7).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Board color identifier (1..=7). Zero is reserved for empty cells.
    ///
    /// ```
    /// use tui_blocks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.color(), 1);
    /// assert_eq!(PieceKind::T.color(), 7);
    /// ```
    pub fn color(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`PieceKind::color`].
    pub fn from_color(color: u8) -> Option<Self> {
        match color {
            1..=7 => Some(Self::ALL[(color - 1) as usize]),
            _ => None,
        }
    }
}

/// The four discrete orientations of a piece
///
/// - **North**: spawn orientation (0°)
/// - **East**: 90° clockwise
/// - **South**: 180°
/// - **West**: 270° clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Quarter turns from North (0..4).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotate clockwise (90°), wrapping West back to North
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }
}

/// Player commands applied to the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Add one row to the fall accumulator
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
}

/// One input event, as consumed by a single frame step.
///
/// Pointer coordinates are in the canvas unit (terminal cells for the
/// terminal backend).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed / quit key. Ends the program from any screen.
    Quit,
    /// A gameplay key was pressed.
    Key(GameAction),
    /// Keyboard activation of the hovered button (Enter / Space).
    Confirm,
    /// Primary pointer button released.
    PointerUp { x: u16, y: u16 },
    /// Pointer moved without a click.
    PointerMoved { x: u16, y: u16 },
}

/// A cell on the game board
///
/// Every cell is one of exactly three states, which map onto the numeric
/// codes `0` (empty), `1..=7` (locked, piece color) and `127` (row flagged
/// for clearing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Locked(PieceKind),
    Clearing,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Numeric code of the cell.
    ///
    /// ```
    /// use tui_blocks_types::{Cell, PieceKind};
    ///
    /// assert_eq!(Cell::Empty.code(), 0);
    /// assert_eq!(Cell::Locked(PieceKind::O).code(), 2);
    /// assert_eq!(Cell::Clearing.code(), 127);
    /// ```
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Locked(kind) => kind.color(),
            Cell::Clearing => CLEARING_CODE,
        }
    }
}

/// Axis-aligned rectangle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// A `w` x `h` rectangle centered on `(cx, cy)`.
    pub fn centered(cx: i32, cy: i32, w: u16, h: u16) -> Self {
        Self {
            x: cx - w as i32 / 2,
            y: cy - h as i32 / 2,
            w,
            h,
        }
    }

    /// Inclusive hit-test: points on the right and bottom edges count.
    ///
    /// ```
    /// use tui_blocks_types::Rect;
    ///
    /// let r = Rect::new(10, 5, 4, 2);
    /// assert!(r.contains(10, 5));
    /// assert!(r.contains(14, 7));
    /// assert!(!r.contains(15, 7));
    /// ```
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.x + self.w as i32 && y >= self.y && y <= self.y + self.h as i32
    }
}

/// 32-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
}
