//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the piece/board simulation. It has **zero
//! dependencies** on UI, audio, or I/O, so every rule can be driven
//! synchronously from tests.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven 4x4 shape masks and the rotation indexer
//! - [`collision`]: does a rotated shape fit at a position
//! - [`board`]: 10x20 grid, locking, line detection and row collapse
//! - [`rng`]: uniform random piece selection
//! - [`session`]: the piece controller tying everything together
//!
//! # Game Rules
//!
//! - Pieces fall at a constant 3 rows per second; soft drop adds one row
//! - A piece locks as soon as it cannot move down one more row
//! - Full rows flash, then collapse; each one scores 100 points
//! - The game ends when a freshly spawned piece does not fit
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::GameSession;
//! use tui_blocks_types::GameAction;
//!
//! let mut game = GameSession::new(12345);
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::RotateCw);
//! game.tick(0.016);
//!
//! assert_eq!(game.score(), 0);
//! assert!(!game.is_over());
//! ```

pub mod board;
pub mod collision;
pub mod pieces;
pub mod rng;
pub mod session;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LineClearQueue};
pub use collision::fits;
pub use pieces::{cells, is_filled, rotated_index};
pub use rng::SimpleRng;
pub use session::{GameSession, Piece, TickOutcome};
