//! Mapping from terminal events to game input.

use crate::types::{GameAction, InputEvent};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map a keyboard key to a game action.
pub fn key_action(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::RotateCw),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Enter and space press the button of the current menu screen.
pub fn is_confirm(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    // Terminals that report releases also report presses; auto-repeat is a press.
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }
    if is_confirm(key) {
        return Some(InputEvent::Confirm);
    }
    key_action(key).map(InputEvent::Key)
}

fn map_mouse(mouse: MouseEvent) -> Option<InputEvent> {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::PointerUp { x, y }),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputEvent::PointerMoved { x, y }),
        _ => None,
    }
}

/// Map one terminal event to game input. Unbound events map to `None`.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_event(press(KeyCode::Left)),
            Some(InputEvent::Key(GameAction::MoveLeft))
        );
        assert_eq!(
            map_event(press(KeyCode::Char('d'))),
            Some(InputEvent::Key(GameAction::MoveRight))
        );
        assert_eq!(
            map_event(press(KeyCode::Char('S'))),
            Some(InputEvent::Key(GameAction::SoftDrop))
        );
        assert_eq!(
            map_event(press(KeyCode::Char('w'))),
            Some(InputEvent::Key(GameAction::RotateCw))
        );
        assert_eq!(map_event(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_and_confirm() {
        assert_eq!(map_event(press(KeyCode::Esc)), Some(InputEvent::Quit));
        assert_eq!(map_event(press(KeyCode::Char('q'))), Some(InputEvent::Quit));
        assert_eq!(
            map_event(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ))),
            Some(InputEvent::Quit)
        );
        assert_eq!(map_event(press(KeyCode::Enter)), Some(InputEvent::Confirm));
        assert_eq!(map_event(press(KeyCode::Char(' '))), Some(InputEvent::Confirm));
    }

    #[test]
    fn test_release_ignored_repeat_kept() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Left,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_event(Event::Key(release)), None);

        let repeat = KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(
            map_event(Event::Key(repeat)),
            Some(InputEvent::Key(GameAction::MoveLeft))
        );
    }

    #[test]
    fn test_mouse() {
        assert_eq!(
            map_event(mouse(MouseEventKind::Up(MouseButton::Left), 12, 7)),
            Some(InputEvent::PointerUp { x: 12, y: 7 })
        );
        assert_eq!(
            map_event(mouse(MouseEventKind::Moved, 3, 4)),
            Some(InputEvent::PointerMoved { x: 3, y: 4 })
        );
        assert_eq!(
            map_event(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 6)),
            Some(InputEvent::PointerMoved { x: 5, y: 6 })
        );
        assert_eq!(map_event(mouse(MouseEventKind::Down(MouseButton::Left), 1, 1)), None);
        assert_eq!(map_event(mouse(MouseEventKind::Up(MouseButton::Right), 1, 1)), None);
    }

    #[test]
    fn test_resize_ignored() {
        assert_eq!(map_event(Event::Resize(100, 40)), None);
    }
}
