//! Screen state machine: Home -> Play -> GameOver -> Home, Exit from anywhere.
//!
//! [`App::step`] runs one frame of the current screen: it consumes at most
//! one input event, advances the session, issues draw calls and presents.

use std::f32::consts::TAU;
use std::time::Duration;

use anyhow::Result;

use crate::audio::Audio;
use crate::canvas::Canvas;
use crate::core::{GameSession, TickOutcome};
use crate::draw;
use crate::layout::{self, Viewport};
use crate::types::{
    InputEvent, Rect, LINE_CLEAR_PAUSE_MS, MENU_VOLUME, MUSIC_FADE_IN_MS, PLAY_VOLUME,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Play,
    GameOver,
    /// Terminal state: the frame loop stops.
    Exit,
}

/// Result of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub screen: Screen,
    /// Set when full rows are on screen waiting to collapse. The driver
    /// should hold the presented frame this long, then call
    /// [`App::finish_line_clear`].
    pub pause: Option<Duration>,
}

/// Owns the session and the per-screen presentation state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    screen: Screen,
    viewport: Viewport,
    /// Last known pointer position.
    pointer: Option<(u16, u16)>,
    /// Title bob phase of the home screen.
    home_phase: f32,
    /// Title bob phase of the game over screen, kept apart from home's.
    game_over_phase: f32,
}

impl App {
    /// Start on the home screen with quiet music fading in.
    pub fn new(session: GameSession, audio: &mut (impl Audio + ?Sized)) -> Self {
        audio.set_volume(MENU_VOLUME);
        audio.play_music(Duration::from_millis(MUSIC_FADE_IN_MS as u64));
        Self {
            session,
            screen: Screen::Home,
            viewport: Viewport::default(),
            pointer: None,
            home_phase: 0.0,
            game_over_phase: 0.0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn pointer(&self) -> Option<(u16, u16)> {
        self.pointer
    }

    /// Run one frame of the current screen.
    pub fn step(
        &mut self,
        event: Option<InputEvent>,
        dt: f32,
        canvas: &mut (impl Canvas + ?Sized),
        audio: &mut (impl Audio + ?Sized),
    ) -> Result<Frame> {
        if let Some(InputEvent::PointerMoved { x, y } | InputEvent::PointerUp { x, y }) = event {
            self.pointer = Some((x, y));
        }

        let (next, pause) = match self.screen {
            Screen::Home => (self.home(event, dt, canvas)?, None),
            Screen::Play => self.play(event, dt, canvas)?,
            Screen::GameOver => (self.game_over(event, dt, canvas)?, None),
            Screen::Exit => (Screen::Exit, None),
        };

        self.transition(next, audio);
        Ok(Frame {
            screen: self.screen,
            pause,
        })
    }

    /// Collapse the rows shown by the previous paused frame.
    pub fn finish_line_clear(&mut self) -> u32 {
        let cleared = self.session.collapse_lines();
        if cleared > 0 {
            tracing::debug!(cleared, score = self.session.score(), "rows collapsed");
        }
        if self.session.is_over() {
            tracing::debug!(score = self.session.score(), "top out");
        }
        cleared
    }

    fn transition(&mut self, next: Screen, audio: &mut (impl Audio + ?Sized)) {
        let prev = self.screen;
        if prev == next {
            return;
        }

        match (prev, next) {
            (Screen::Home, Screen::Play) => audio.set_volume(PLAY_VOLUME),
            (Screen::Play, Screen::GameOver) => audio.set_volume(MENU_VOLUME),
            (Screen::GameOver, Screen::Home) => self.session.reset(),
            _ => {}
        }

        tracing::info!(from = ?prev, to = ?next, score = self.session.score(), "screen change");
        self.screen = next;
    }

    fn hovering(&self, zone: Rect) -> bool {
        self.pointer
            .is_some_and(|(x, y)| zone.contains(x as i32, y as i32))
    }

    /// Advance a title bob phase and return the offset in canvas units.
    fn bob(phase: &mut f32, dt: f32) -> i32 {
        *phase = (*phase + 5.0 * dt) % TAU;
        phase.sin().round() as i32
    }

    fn home(
        &mut self,
        event: Option<InputEvent>,
        dt: f32,
        canvas: &mut (impl Canvas + ?Sized),
    ) -> Result<Screen> {
        let zone = layout::play_button(self.viewport);
        match event {
            Some(InputEvent::Quit) => return Ok(Screen::Exit),
            Some(InputEvent::Confirm) => return Ok(Screen::Play),
            Some(InputEvent::PointerUp { x, y }) if zone.contains(x as i32, y as i32) => {
                return Ok(Screen::Play)
            }
            _ => {}
        }

        let hovered = self.hovering(zone);
        let bob = Self::bob(&mut self.home_phase, dt);
        draw::home(canvas, self.viewport, bob, hovered);
        canvas.present()?;
        Ok(Screen::Home)
    }

    fn play(
        &mut self,
        event: Option<InputEvent>,
        dt: f32,
        canvas: &mut (impl Canvas + ?Sized),
    ) -> Result<(Screen, Option<Duration>)> {
        match event {
            Some(InputEvent::Quit) => return Ok((Screen::Exit, None)),
            Some(InputEvent::Key(action)) => {
                self.session.apply_action(action);
            }
            _ => {}
        }

        if self.session.is_over() {
            return Ok((Screen::GameOver, None));
        }

        let outcome = self.session.tick(dt);
        let pause = match outcome {
            TickOutcome::LinesPending(rows) => {
                tracing::debug!(rows, "rows completed");
                Some(Duration::from_millis(LINE_CLEAR_PAUSE_MS as u64))
            }
            TickOutcome::Locked if self.session.is_over() => {
                tracing::debug!(score = self.session.score(), "top out");
                None
            }
            _ => None,
        };

        draw::play(canvas, self.viewport, &self.session);
        canvas.present()?;
        Ok((Screen::Play, pause))
    }

    fn game_over(
        &mut self,
        event: Option<InputEvent>,
        dt: f32,
        canvas: &mut (impl Canvas + ?Sized),
    ) -> Result<Screen> {
        let zone = layout::back_button(self.viewport);
        match event {
            Some(InputEvent::Quit) => return Ok(Screen::Exit),
            Some(InputEvent::Confirm) => return Ok(Screen::Home),
            Some(InputEvent::PointerUp { x, y }) if zone.contains(x as i32, y as i32) => {
                return Ok(Screen::Home)
            }
            _ => {}
        }

        let hovered = self.hovering(zone);
        let bob = Self::bob(&mut self.game_over_phase, dt);
        draw::game_over(canvas, self.viewport, bob, self.session.score(), hovered);
        canvas.present()?;
        Ok(Screen::GameOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentAudio;
    use crate::canvas::RecordingCanvas;
    use crate::types::{GameAction, PieceKind};

    fn app() -> (App, RecordingCanvas, SilentAudio) {
        let mut audio = SilentAudio::new();
        let app = App::new(GameSession::new(5), &mut audio);
        (app, RecordingCanvas::new(), audio)
    }

    fn click(zone: crate::types::Rect) -> InputEvent {
        InputEvent::PointerUp {
            x: zone.x as u16 + 1,
            y: zone.y as u16 + 1,
        }
    }

    #[test]
    fn starts_home_with_quiet_music() {
        let (app, _, audio) = app();
        assert_eq!(app.screen(), Screen::Home);
        assert_eq!(audio.volume(), MENU_VOLUME);
        assert!(audio.is_playing());
    }

    #[test]
    fn home_click_outside_stays_home() {
        let (mut app, mut canvas, mut audio) = app();
        let frame = app
            .step(Some(InputEvent::PointerUp { x: 0, y: 0 }), 0.016, &mut canvas, &mut audio)
            .unwrap();
        assert_eq!(frame.screen, Screen::Home);
        assert_eq!(canvas.presents, 1);
    }

    #[test]
    fn home_click_on_button_starts_play() {
        let (mut app, mut canvas, mut audio) = app();
        let zone = layout::play_button(Viewport::default());
        let frame = app
            .step(Some(click(zone)), 0.016, &mut canvas, &mut audio)
            .unwrap();
        assert_eq!(frame.screen, Screen::Play);
        assert_eq!(audio.volume(), PLAY_VOLUME);
    }

    #[test]
    fn hover_enlarges_play_button() {
        let (mut app, mut canvas, mut audio) = app();
        let zone = layout::play_button(Viewport::default());
        let moved = InputEvent::PointerMoved {
            x: zone.x as u16,
            y: zone.y as u16,
        };
        app.step(Some(moved), 0.016, &mut canvas, &mut audio).unwrap();
        assert_eq!(app.pointer(), Some((zone.x as u16, zone.y as u16)));

        let big = layout::play_button_drawn(Viewport::default(), true);
        assert!(canvas.frame().iter().any(|c| matches!(
            c,
            crate::canvas::DrawCall::Sprite(crate::canvas::Sheet::PlayButton, _, dst) if *dst == big
        )));
    }

    #[test]
    fn play_forwards_keys() {
        let (mut app, mut canvas, mut audio) = app();
        app.step(Some(InputEvent::Confirm), 0.0, &mut canvas, &mut audio).unwrap();
        let x = app.session().active().unwrap().x;

        app.step(
            Some(InputEvent::Key(GameAction::MoveLeft)),
            0.0,
            &mut canvas,
            &mut audio,
        )
        .unwrap();
        assert_eq!(app.session().active().unwrap().x, x - 1);
    }

    #[test]
    fn line_clear_requests_a_pause() {
        let (mut app, mut canvas, mut audio) = app();
        app.step(Some(InputEvent::Confirm), 0.0, &mut canvas, &mut audio).unwrap();

        let session = app.session_mut();
        session.set_active(crate::core::Piece {
            kind: PieceKind::I,
            rotation: crate::types::Rotation::North,
            x: -2,
            y: 16,
        });
        for x in 1..10 {
            session
                .board_mut()
                .set(x, 19, crate::types::Cell::Locked(PieceKind::O));
        }

        let frame = app.step(None, 0.016, &mut canvas, &mut audio).unwrap();
        assert_eq!(frame.pause, Some(Duration::from_millis(100)));
        assert_eq!(app.session().pending_clears(), &[19]);

        assert_eq!(app.finish_line_clear(), 1);
        assert_eq!(app.session().score(), 100);
    }

    #[test]
    fn top_out_leads_to_game_over_then_home_resets() {
        let (mut app, mut canvas, mut audio) = app();
        app.step(Some(InputEvent::Confirm), 0.0, &mut canvas, &mut audio).unwrap();

        // Block the spawn area so the next spawn tops out.
        app.session_mut().set_next(PieceKind::O);
        for y in 0..2 {
            for x in 5..9 {
                app.session_mut()
                    .board_mut()
                    .set(x, y, crate::types::Cell::Locked(PieceKind::T));
            }
        }
        app.session_mut().set_active(crate::core::Piece {
            kind: PieceKind::O,
            rotation: crate::types::Rotation::North,
            x: 3,
            y: 18,
        });

        // The O locks without completing a row and the next spawn fails.
        app.step(None, 0.0, &mut canvas, &mut audio).unwrap();
        assert!(app.session().is_over());

        let frame = app.step(None, 0.0, &mut canvas, &mut audio).unwrap();
        assert_eq!(frame.screen, Screen::GameOver);
        assert_eq!(audio.volume(), MENU_VOLUME);

        let frame = app
            .step(Some(InputEvent::Confirm), 0.0, &mut canvas, &mut audio)
            .unwrap();
        assert_eq!(frame.screen, Screen::Home);
        assert_eq!(app.session().score(), 0);
        assert!(!app.session().is_over());
        assert!(app.session().board().cells().iter().all(|c| c.code() == 0));
    }

    #[test]
    fn title_bob_is_tracked_per_screen() {
        let (mut app, mut canvas, mut audio) = app();
        let vp = Viewport::default();

        // 0.3 s on home puts its phase at 1.5 rad: the title sits one row low.
        app.step(None, 0.3, &mut canvas, &mut audio).unwrap();
        assert!(canvas
            .frame()
            .iter()
            .any(|c| matches!(c, crate::canvas::DrawCall::Text(t, _, r) if t == "The Tetris" && *r == layout::title(vp, 1))));

        app.screen = Screen::GameOver;
        app.step(None, 0.0, &mut canvas, &mut audio).unwrap();
        assert!(canvas
            .frame()
            .iter()
            .any(|c| matches!(c, crate::canvas::DrawCall::Text(t, _, r) if t == "Game Over" && *r == layout::title(vp, 0))));
    }

    #[test]
    fn quit_exits_from_every_screen() {
        for screen in [Screen::Home, Screen::Play, Screen::GameOver] {
            let (mut app, mut canvas, mut audio) = app();
            app.screen = screen;
            let frame = app
                .step(Some(InputEvent::Quit), 0.016, &mut canvas, &mut audio)
                .unwrap();
            assert_eq!(frame.screen, Screen::Exit);
        }
    }
}
