use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    ScrollUp,
    ScrollDown,
    JumpTop,
    JumpBottom,
    CycleTheme,
    TogglePause,  // p: stop/resume sampling, keep the last snapshot on screen
    None,
}

pub fn handle_key(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _)
        | (KeyCode::Esc, _)
        | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Volume list scrolling: arrows, vim jk, paging
        (KeyCode::Up,   _) | (KeyCode::Char('k'), _) | (KeyCode::PageUp,   _) => Action::ScrollUp,
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) | (KeyCode::PageDown, _) => Action::ScrollDown,

        (KeyCode::Char('g'), _) | (KeyCode::Home, _) => Action::JumpTop,
        (KeyCode::Char('G'), _) | (KeyCode::End,  _) => Action::JumpBottom,

        (KeyCode::Char('t'), _) => Action::CycleTheme,
        (KeyCode::Char('p'), _) => Action::TogglePause,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(handle_key(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)), Action::Quit);
        assert_eq!(handle_key(key(KeyCode::Char('j'))), Action::ScrollDown);
        assert_eq!(handle_key(key(KeyCode::Up)), Action::ScrollUp);
        assert_eq!(handle_key(key(KeyCode::Char('G'))), Action::JumpBottom);
        assert_eq!(handle_key(key(KeyCode::Char('t'))), Action::CycleTheme);
        assert_eq!(handle_key(key(KeyCode::Char('p'))), Action::TogglePause);
        assert_eq!(handle_key(key(KeyCode::Char('z'))), Action::None);
    }
}
