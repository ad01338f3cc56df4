use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gitfinder_core::Input;

/// Translates terminal events into selection inputs
pub struct TuiUpdate;

impl TuiUpdate {
    /// Map a raw terminal event. Events with no meaning for the picker
    /// (mouse, focus, paste, key releases) map to `None`.
    pub fn map_event(event: &Event) -> Option<Input> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::map_key(key),
            Event::Resize(width, height) => Some(Input::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }

    pub fn map_key(key: &KeyEvent) -> Option<Input> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => Some(Input::Cancel),
            KeyCode::Char('c') if ctrl => Some(Input::Cancel),

            KeyCode::Up | KeyCode::BackTab => Some(Input::Up),
            KeyCode::Char('p') if ctrl => Some(Input::Up),

            KeyCode::Down | KeyCode::Tab => Some(Input::Down),
            KeyCode::Char('n') if ctrl => Some(Input::Down),

            KeyCode::Enter => Some(Input::Confirm),
            KeyCode::Backspace => Some(Input::Backspace),

            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Input::Char(c))
            }

            _ => None,
        }
    }
}
