//! Terminal runner (default binary).
//!
//! Crossterm for input, the framebuffer canvas for output, one frame per
//! loop iteration until the player quits.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing_subscriber::filter::EnvFilter;

use tui_blocks::core::GameSession;
use tui_blocks::engine::{App, Screen, SilentAudio, Viewport};
use tui_blocks::input::{EventSource, TerminalEvents};
use tui_blocks::term::{TermCanvas, TerminalRenderer};
use tui_blocks::types::TICK_MS;
use tui_blocks::Config;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(config.log_path.as_deref())?;
    tracing::info!(
        seed = config.seed,
        fall_speed = config.fall_speed,
        "starting"
    );

    let mut renderer = TerminalRenderer::new();
    if let Err(err) = renderer.enter() {
        let _ = renderer.exit();
        return Err(err);
    }

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut canvas = TermCanvas::new(renderer, w, h);
    let result = run(&config, &mut canvas);

    // Always try to restore terminal state.
    if let Some(mut renderer) = canvas.into_renderer() {
        let _ = renderer.exit();
    }
    if let Err(err) = &result {
        tracing::error!(error = %err, "stopped");
    } else {
        tracing::info!("bye");
    }
    result
}

/// Logs go to a file: stderr is unusable while the terminal is in raw mode.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(config: &Config, canvas: &mut TermCanvas) -> Result<()> {
    let session = GameSession::with_fall_speed(config.seed, config.fall_speed);
    let mut audio = SilentAudio::new();
    let mut app = App::new(session, &mut audio);
    let mut events = TerminalEvents::new();

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        canvas.resize(w, h);
        app.set_viewport(Viewport::new(w, h));

        let event = events.next_event(tick)?;

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        let frame = app.step(event, dt, canvas, &mut audio)?;
        if frame.screen == Screen::Exit {
            return Ok(());
        }

        // Hold the flashing rows on screen, then collapse them. The pause
        // does not count as fall time.
        if let Some(pause) = frame.pause {
            thread::sleep(pause);
            app.finish_line_clear();
            last_frame = Instant::now();
        }
    }
}
