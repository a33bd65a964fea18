//! Conversion from crossterm events.

use crossterm::event::{self, Event, KeyEventKind};

use super::event::{InputEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent};

impl InputEvent {
    /// Convert a crossterm event.
    ///
    /// Returns `None` for key releases and repeats, and for keys, buttons or
    /// mouse motions that have no counterpart here.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }

                let code = convert_key_code(key_event.code)?;
                let modifiers = KeyModifiers::from(key_event.modifiers);

                Some(Self::Key { code, modifiers })
            }

            Event::Mouse(mouse_event) => convert_mouse_event(mouse_event),

            Event::Resize(width, height) => Some(Self::Resize { width, height }),

            Event::FocusGained => Some(Self::FocusGained),

            Event::FocusLost => Some(Self::FocusLost),

            Event::Paste(text) => Some(Self::Paste(text)),
        }
    }
}

impl From<event::KeyModifiers> for KeyModifiers {
    fn from(mods: event::KeyModifiers) -> Self {
        Self {
            shift: mods.contains(event::KeyModifiers::SHIFT),
            control: mods.contains(event::KeyModifiers::CONTROL),
            alt: mods.contains(event::KeyModifiers::ALT),
            super_key: mods.contains(event::KeyModifiers::SUPER),
        }
    }
}

fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
    Some(match code {
        event::KeyCode::Char(c) => KeyCode::Char(c),
        event::KeyCode::F(n) => KeyCode::F(n),
        event::KeyCode::Backspace => KeyCode::Backspace,
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Left => KeyCode::Left,
        event::KeyCode::Right => KeyCode::Right,
        event::KeyCode::Up => KeyCode::Up,
        event::KeyCode::Down => KeyCode::Down,
        event::KeyCode::Home => KeyCode::Home,
        event::KeyCode::End => KeyCode::End,
        event::KeyCode::PageUp => KeyCode::PageUp,
        event::KeyCode::PageDown => KeyCode::PageDown,
        event::KeyCode::Tab => KeyCode::Tab,
        event::KeyCode::BackTab => KeyCode::BackTab,
        event::KeyCode::Delete => KeyCode::Delete,
        event::KeyCode::Insert => KeyCode::Insert,
        event::KeyCode::Esc => KeyCode::Esc,
        event::KeyCode::Null => KeyCode::Null,
        _ => return None,
    })
}

fn convert_mouse_event(mouse: event::MouseEvent) -> Option<InputEvent> {
    let modifiers = KeyModifiers::from(mouse.modifiers);
    let at = |button| MouseEvent {
        x: mouse.column,
        y: mouse.row,
        button,
        modifiers,
    };

    match mouse.kind {
        event::MouseEventKind::Down(button) => Some(InputEvent::MouseDown(at(Some(convert_mouse_button(button))))),
        event::MouseEventKind::Up(button) => Some(InputEvent::MouseUp(at(Some(convert_mouse_button(button))))),
        event::MouseEventKind::Drag(button) => Some(InputEvent::MouseMove(at(Some(convert_mouse_button(button))))),
        event::MouseEventKind::Moved => Some(InputEvent::MouseMove(at(None))),
        event::MouseEventKind::ScrollUp => Some(InputEvent::MouseScroll {
            x: mouse.column,
            y: mouse.row,
            delta: 1,
        }),
        event::MouseEventKind::ScrollDown => Some(InputEvent::MouseScroll {
            x: mouse.column,
            y: mouse.row,
            delta: -1,
        }),
        _ => None,
    }
}

const fn convert_mouse_button(button: event::MouseButton) -> MouseButton {
    match button {
        event::MouseButton::Left => MouseButton::Left,
        event::MouseButton::Right => MouseButton::Right,
        event::MouseButton::Middle => MouseButton::Middle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, MouseEventKind};

    fn key(code: event::KeyCode, modifiers: event::KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_key_press_converts() {
        let event = key(event::KeyCode::Char('q'), event::KeyModifiers::ALT, KeyEventKind::Press);
        assert_eq!(
            InputEvent::from_crossterm(event),
            Some(InputEvent::key_with(KeyCode::Char('q'), KeyModifiers::ALT))
        );
    }

    #[test]
    fn test_key_release_is_dropped() {
        let event = key(event::KeyCode::Enter, event::KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(InputEvent::from_crossterm(event), None);
    }

    #[test]
    fn test_mouse_scroll() {
        let event = Event::Mouse(event::MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 4,
            row: 7,
            modifiers: event::KeyModifiers::NONE,
        });
        assert_eq!(
            InputEvent::from_crossterm(event),
            Some(InputEvent::MouseScroll { x: 4, y: 7, delta: -1 })
        );
    }

    #[test]
    fn test_resize_and_paste() {
        assert_eq!(
            InputEvent::from_crossterm(Event::Resize(100, 30)),
            Some(InputEvent::Resize { width: 100, height: 30 })
        );
        assert_eq!(
            InputEvent::from_crossterm(Event::Paste("hi".into())),
            Some(InputEvent::Paste("hi".into()))
        );
    }
}
