//! Maps crossterm events to [`Action`]s.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::state::Action;
use crate::view::Layout;

/// Rows moved per wheel notch
const WHEEL_ROWS: isize = 3;

pub fn action_for_event(event: &Event, layout: &Layout) -> Option<Action> {
    match event {
        Event::Key(key) => action_for_key(key),
        Event::Mouse(mouse) => action_for_mouse(mouse, layout),
        Event::Resize(cols, rows) => Some(Action::Resize {
            cols: *cols,
            rows: *rows,
        }),
        _ => None,
    }
}

pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Action::ToggleTheme),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Scroll(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Scroll(1)),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::PageDown),
        KeyCode::Home => Some(Action::Home),
        KeyCode::End => Some(Action::End),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Action::TogglePause),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::ToggleDebug),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::ToggleWireframe),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Enter => Some(Action::ActivateContact),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

pub fn action_for_mouse(mouse: &MouseEvent, layout: &Layout) -> Option<Action> {
    let (col, row) = (mouse.column as isize, mouse.row as isize);
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(Action::Scroll(-WHEEL_ROWS)),
        MouseEventKind::ScrollDown => Some(Action::Scroll(WHEEL_ROWS)),
        MouseEventKind::Down(MouseButton::Left) => {
            if layout.toggle_button.contains(col, row) {
                Some(Action::ToggleTheme)
            } else if layout.contact_button.is_some_and(|b| b.contains(col, row)) {
                Some(Action::ActivateContact)
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn layout() -> Layout {
        let mut layout = Layout::default();
        layout.toggle_button = Rect::new(60, 0, 12, 1);
        layout.contact_button = Some(Rect::new(30, 10, 20, 3));
        layout
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(action_for_key(&key(KeyCode::Char('t'))), Some(Action::ToggleTheme));
        assert_eq!(action_for_key(&key(KeyCode::Down)), Some(Action::Scroll(1)));
        assert_eq!(action_for_key(&key(KeyCode::Char('k'))), Some(Action::Scroll(-1)));
        assert_eq!(action_for_key(&key(KeyCode::Char(' '))), Some(Action::PageDown));
        assert_eq!(action_for_key(&key(KeyCode::Enter)), Some(Action::ActivateContact));
        assert_eq!(action_for_key(&key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(action_for_key(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(&event), Some(Action::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut event = key(KeyCode::Char('t'));
        event.kind = KeyEventKind::Release;
        assert_eq!(action_for_key(&event), None);
    }

    #[test]
    fn clicks_hit_buttons() {
        let layout = layout();
        assert_eq!(action_for_mouse(&click(65, 0), &layout), Some(Action::ToggleTheme));
        assert_eq!(action_for_mouse(&click(35, 11), &layout), Some(Action::ActivateContact));
        assert_eq!(action_for_mouse(&click(5, 5), &layout), None);
    }

    #[test]
    fn wheel_scrolls() {
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(action_for_mouse(&wheel, &layout()), Some(Action::Scroll(3)));
    }

    #[test]
    fn resize_event_carries_size() {
        let action = action_for_event(&Event::Resize(120, 40), &layout());
        assert_eq!(action, Some(Action::Resize { cols: 120, rows: 40 }));
    }
}
