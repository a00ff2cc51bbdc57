//! Input mapping tests - crossterm events to game input

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use tui_blocks::input::map_event;
use tui_blocks::types::{GameAction, InputEvent};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::from(code))
}

#[test]
fn test_wasd_and_arrows_agree() {
    let pairs = [
        (KeyCode::Char('w'), KeyCode::Up, GameAction::RotateCw),
        (KeyCode::Char('a'), KeyCode::Left, GameAction::MoveLeft),
        (KeyCode::Char('s'), KeyCode::Down, GameAction::SoftDrop),
        (KeyCode::Char('d'), KeyCode::Right, GameAction::MoveRight),
    ];
    for (letter, arrow, action) in pairs {
        assert_eq!(map_event(key(letter)), Some(InputEvent::Key(action)));
        assert_eq!(map_event(key(arrow)), Some(InputEvent::Key(action)));
    }
}

#[test]
fn test_release_is_ignored() {
    let release = KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(map_event(Event::Key(release)), None);
}

#[test]
fn test_left_click_release_is_pointer_up() {
    let up = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Up(MouseButton::Left),
        column: 40,
        row: 16,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(map_event(up), Some(InputEvent::PointerUp { x: 40, y: 16 }));
}

#[test]
fn test_focus_and_paste_ignored() {
    assert_eq!(map_event(Event::FocusGained), None);
    assert_eq!(map_event(Event::Paste("x".into())), None);
}
