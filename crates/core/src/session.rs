//! Game session module - the piece controller
//!
//! Owns the board, the falling piece, the next piece and the score, and
//! advances them by elapsed time. Line clears are split in two phases so a
//! frontend can show the flagged rows before they collapse:
//! [`GameSession::tick`] locks and flags, [`GameSession::collapse_lines`]
//! collapses, scores and spawns the next piece.

use crate::board::{Board, LineClearQueue};
use crate::collision::fits;
use crate::pieces::cells;
use crate::rng::SimpleRng;
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Left edge of the 4x4 box.
    pub x: i8,
    /// Top edge of the 4x4 box, always the floor of the fall accumulator
    /// (or above it, when the fall was blocked).
    pub y: i8,
}

impl Piece {
    /// Create a new piece at the spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Whether the piece fits on `board` where it stands.
    pub fn fits(&self, board: &Board) -> bool {
        fits(board, self.kind, self.x, self.y, self.rotation)
    }

    /// Occupied board coordinates.
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        cells(self.kind, self.rotation).map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// What one call to [`GameSession::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to simulate (game over, or no active piece).
    Idle,
    /// The piece is still falling.
    Falling,
    /// The piece locked without completing a row; the next piece spawned.
    Locked,
    /// The piece locked and completed this many rows. They are flagged as
    /// [`Cell::Clearing`] until [`GameSession::collapse_lines`] runs.
    LinesPending(usize),
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Option<Piece>,
    next: PieceKind,
    rng: SimpleRng,
    clear_queue: LineClearQueue,
    /// Continuous fall position in rows since spawn.
    fall: f32,
    /// Rows per second.
    fall_speed: f32,
    /// Speed restored by `reset`.
    base_fall_speed: f32,
    score: u32,
    over: bool,
}

impl GameSession {
    /// Create a new session with the given RNG seed and default fall speed
    pub fn new(seed: u32) -> Self {
        Self::with_fall_speed(seed, FALL_SPEED)
    }

    pub fn with_fall_speed(seed: u32, fall_speed: f32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let current = rng.next_kind();
        let next = rng.next_kind();

        Self {
            board: Board::new(),
            active: Some(Piece::spawn(current)),
            next,
            rng,
            clear_queue: LineClearQueue::new(),
            fall: 0.0,
            fall_speed,
            base_fall_speed: fall_speed,
            score: 0,
            over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn fall(&self) -> f32 {
        self.fall
    }

    pub fn fall_speed(&self) -> f32 {
        self.fall_speed
    }

    /// Row indices flagged by the last lock and not yet collapsed.
    pub fn pending_clears(&self) -> &[usize] {
        &self.clear_queue
    }

    /// Replace the falling piece (tests and scripted setups).
    ///
    /// The fall accumulator follows the piece's row.
    pub fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
        self.fall = piece.y as f32;
    }

    /// Replace the upcoming piece kind.
    pub fn set_next(&mut self, kind: PieceKind) {
        self.next = kind;
    }

    /// Start a fresh game: empty board, zero score, new pieces, default speed.
    pub fn reset(&mut self) {
        self.board.clear();
        self.clear_queue.clear();
        self.score = 0;
        self.over = false;
        self.fall = 0.0;
        self.fall_speed = self.base_fall_speed;
        self.active = Some(Piece::spawn(self.rng.next_kind()));
        self.next = self.rng.next_kind();
    }

    /// Promote the next piece to the active slot and draw a new next piece.
    ///
    /// Sets the over flag (and leaves the slot empty) when the new piece
    /// does not fit at its spawn position. The board is never modified here.
    pub fn spawn_next(&mut self) -> bool {
        let piece = Piece::spawn(self.next);
        self.next = self.rng.next_kind();
        self.fall = 0.0;

        if !piece.fits(&self.board) {
            self.over = true;
            self.active = None;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Try to move the active piece
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = Piece {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        };
        if !moved.fits(&self.board) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Try to rotate the active piece clockwise in place
    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotated = Piece {
            rotation: active.rotation.rotate_cw(),
            ..active
        };
        if !rotated.fits(&self.board) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// Apply a player command. Returns whether anything changed.
    ///
    /// Moves and rotations that would collide are rejected and leave the
    /// piece untouched.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.over || self.active.is_none() {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::RotateCw => self.try_rotate(),
            GameAction::SoftDrop => {
                self.fall += 1.0;
                true
            }
        }
    }

    /// Advance the simulation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> TickOutcome {
        if self.over {
            return TickOutcome::Idle;
        }

        // A clear left pending by the caller is finished before anything moves.
        if !self.clear_queue.is_empty() {
            self.collapse_lines();
            if self.over {
                return TickOutcome::Idle;
            }
        }

        let Some(active) = self.active else {
            return TickOutcome::Idle;
        };

        if fits(&self.board, active.kind, active.x, active.y + 1, active.rotation) {
            self.fall += dt * self.fall_speed;
            let target = self.fall.floor();
            while (self.active_y() as f32) < target && self.try_move(0, 1) {}
            return TickOutcome::Falling;
        }

        self.board
            .lock_piece(active.kind, active.x, active.y, active.rotation);
        self.active = None;

        let found = self.board.detect_lines(active.y, &mut self.clear_queue);
        if found > 0 {
            return TickOutcome::LinesPending(found);
        }

        self.spawn_next();
        TickOutcome::Locked
    }

    fn active_y(&self) -> i8 {
        self.active.map_or(0, |p| p.y)
    }

    /// Collapse flagged rows, score them and spawn the next piece.
    ///
    /// Returns the number of rows collapsed. Does nothing while a piece is
    /// still falling.
    pub fn collapse_lines(&mut self) -> u32 {
        if self.active.is_some() {
            return 0;
        }

        let cleared = self.board.collapse_lines(&mut self.clear_queue) as u32;
        self.score += cleared * SCORE_PER_LINE;

        if !self.over {
            self.spawn_next();
        }
        cleared
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(kind: PieceKind, x: i8, y: i8) -> GameSession {
        let mut s = GameSession::new(12345);
        s.set_active(Piece {
            kind,
            rotation: Rotation::North,
            x,
            y,
        });
        s
    }

    #[test]
    fn test_new_session() {
        let s = GameSession::new(12345);
        assert_eq!(s.score(), 0);
        assert!(!s.is_over());
        assert_eq!(s.fall(), 0.0);
        assert_eq!(s.fall_speed(), FALL_SPEED);
        let active = s.active().unwrap();
        assert_eq!((active.x, active.y), (SPAWN_X, SPAWN_Y));
        assert_eq!(active.rotation, Rotation::North);
        assert!(s.pending_clears().is_empty());
    }

    #[test]
    fn test_move_and_reject() {
        let mut s = session_with(PieceKind::I, 5, 0);
        assert!(s.apply_action(GameAction::MoveLeft));
        assert_eq!(s.active().unwrap().x, 4);
        assert!(s.apply_action(GameAction::MoveRight));
        assert!(s.apply_action(GameAction::MoveRight));
        assert!(s.apply_action(GameAction::MoveRight));
        // Column 2 of the box is at x = 9 now; one more step would leave the board.
        assert_eq!(s.active().unwrap().x, 7);
        assert!(!s.apply_action(GameAction::MoveRight));
        assert_eq!(s.active().unwrap().x, 7);
    }

    #[test]
    fn test_rotate_wraps() {
        let mut s = session_with(PieceKind::T, 4, 5);
        for expected in [
            Rotation::East,
            Rotation::South,
            Rotation::West,
            Rotation::North,
        ] {
            assert!(s.apply_action(GameAction::RotateCw));
            assert_eq!(s.active().unwrap().rotation, expected);
        }
    }

    #[test]
    fn test_rotate_rejected_against_wall() {
        // Vertical I hugging the right wall cannot turn horizontal.
        let mut s = session_with(PieceKind::I, 7, 5);
        assert!(!s.apply_action(GameAction::RotateCw));
        assert_eq!(s.active().unwrap().rotation, Rotation::North);
    }

    #[test]
    fn test_natural_fall() {
        let mut s = session_with(PieceKind::O, 3, 0);
        assert_eq!(s.tick(0.2), TickOutcome::Falling);
        assert_eq!(s.active().unwrap().y, 0);
        assert_eq!(s.tick(0.2), TickOutcome::Falling);
        // 0.4s at 3 rows/s = 1.2 rows.
        assert_eq!(s.active().unwrap().y, 1);
    }

    #[test]
    fn test_soft_drop_adds_a_row() {
        let mut s = session_with(PieceKind::O, 3, 0);
        assert!(s.apply_action(GameAction::SoftDrop));
        assert_eq!(s.fall(), 1.0);
        s.tick(0.0);
        assert_eq!(s.active().unwrap().y, 1);
    }

    #[test]
    fn test_large_step_is_clamped_by_collision() {
        let mut s = session_with(PieceKind::O, 3, 0);
        // 10 seconds would be 30 rows; the O rests with its box at y = 18.
        assert_eq!(s.tick(10.0), TickOutcome::Falling);
        assert_eq!(s.active().unwrap().y, 18);
        assert!(s.active().unwrap().fits(s.board()));
    }

    #[test]
    fn test_lock_and_spawn_next() {
        let mut s = session_with(PieceKind::O, 3, 18);
        s.set_next(PieceKind::T);

        assert_eq!(s.tick(0.016), TickOutcome::Locked);
        assert_eq!(s.board().get(4, 19), Some(Cell::Locked(PieceKind::O)));
        let active = s.active().unwrap();
        assert_eq!(active.kind, PieceKind::T);
        assert_eq!((active.x, active.y), (SPAWN_X, SPAWN_Y));
        assert_eq!(s.fall(), 0.0);
    }

    #[test]
    fn test_line_clear_is_two_phase() {
        let mut s = session_with(PieceKind::I, -2, 16);
        for x in 1..10 {
            s.board_mut().set(x, 19, Cell::Locked(PieceKind::S));
        }

        assert_eq!(s.tick(0.016), TickOutcome::LinesPending(1));
        assert!(s.active().is_none());
        assert_eq!(s.pending_clears(), &[19]);
        assert!(s.board().row(19).iter().all(|c| *c == Cell::Clearing));
        assert!(!s.apply_action(GameAction::MoveLeft));

        assert_eq!(s.collapse_lines(), 1);
        assert_eq!(s.score(), 100);
        assert!(s.pending_clears().is_empty());
        assert!(s.active().is_some());
        // The three I cells above the cleared row moved down by one.
        for y in 17..20 {
            assert_eq!(s.board().get(0, y), Some(Cell::Locked(PieceKind::I)));
        }
        assert_eq!(s.board().get(0, 16), Some(Cell::Empty));
    }

    #[test]
    fn test_tick_drains_pending_clear() {
        let mut s = session_with(PieceKind::I, -2, 16);
        for x in 1..10 {
            s.board_mut().set(x, 19, Cell::Locked(PieceKind::S));
        }
        assert_eq!(s.tick(0.0), TickOutcome::LinesPending(1));

        s.tick(0.0);
        assert!(s.pending_clears().is_empty());
        assert_eq!(s.score(), 100);
        assert!(s.active().is_some());
    }

    #[test]
    fn test_collapse_is_noop_while_falling() {
        let mut s = GameSession::new(1);
        assert_eq!(s.collapse_lines(), 0);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_top_out() {
        let mut s = GameSession::new(9);
        s.set_next(PieceKind::O);
        for x in 5..9 {
            s.board_mut().set(x, 0, Cell::Locked(PieceKind::L));
            s.board_mut().set(x, 1, Cell::Locked(PieceKind::L));
        }
        let before = s.board().clone();

        assert!(!s.spawn_next());
        assert!(s.is_over());
        assert!(s.active().is_none());
        assert_eq!(s.board(), &before);

        assert_eq!(s.tick(1.0), TickOutcome::Idle);
        assert!(!s.apply_action(GameAction::MoveLeft));
    }

    #[test]
    fn test_reset() {
        let mut s = session_with(PieceKind::O, 3, 18);
        s.tick(0.0);
        s.board_mut().set(0, 0, Cell::Locked(PieceKind::Z));
        s.apply_action(GameAction::SoftDrop);

        s.reset();
        assert_eq!(s.score(), 0);
        assert!(!s.is_over());
        assert_eq!(s.fall(), 0.0);
        assert!(s.board().cells().iter().all(|c| c.code() == 0));
        assert!(s.active().is_some());
    }
}
