use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blocks::core::{fits, Board, GameSession, LineClearQueue};
use tui_blocks::engine::{App, RecordingCanvas, SilentAudio};
use tui_blocks::types::{Cell, GameAction, InputEvent, PieceKind, Rotation};

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            if session.is_over() {
                session.reset();
            }
            session.tick(black_box(0.016));
            session.collapse_lines();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                board.fill_row(y, Cell::Locked(PieceKind::I));
            }
            let mut queue = LineClearQueue::new();
            board.detect_lines(black_box(16), &mut queue);
            board.collapse_lines(&mut queue)
        })
    });
}

fn bench_fits(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("fits", |b| {
        b.iter(|| {
            fits(
                &board,
                black_box(PieceKind::T),
                black_box(4),
                black_box(10),
                Rotation::East,
            )
        })
    });
}

fn bench_apply_action(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("apply_rotate", |b| {
        b.iter(|| session.apply_action(black_box(GameAction::RotateCw)))
    });
}

fn bench_play_frame(c: &mut Criterion) {
    let mut audio = SilentAudio::new();
    let mut app = App::new(GameSession::new(12345), &mut audio);
    let mut canvas = RecordingCanvas::new();
    app.step(Some(InputEvent::Confirm), 0.0, &mut canvas, &mut audio)
        .unwrap();

    c.bench_function("play_frame", |b| {
        b.iter(|| {
            if app.session().is_over() {
                app.session_mut().reset();
            }
            app.step(None, black_box(0.016), &mut canvas, &mut audio)
                .unwrap();
            app.finish_line_clear();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_fits,
    bench_apply_action,
    bench_play_frame
);
criterion_main!(benches);
