//! Keyboard event model.
//!
//! Event types plus the crossterm conversion. Dispatch is owned by the
//! event loop, which routes press events to the [`Navigator`] and the
//! global shortcuts; there is no free-floating handler registry.
//!
//! [`Navigator`]: crate::state::navigator::Navigator

use crossterm::event::{KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers};

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

/// Key event state (press, repeat, release).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "Tab", " ").
    pub key: String,
    pub modifiers: Modifiers,
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers.
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }
}

// =============================================================================
// CROSSTERM CONVERSION
// =============================================================================

/// Convert a crossterm KeyEvent to our KeyboardEvent.
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent {
        key,
        modifiers: convert_modifiers(event.modifiers),
        state,
    }
}

fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_char_key() {
        let event = convert_key_event(CrosstermKeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ));
        assert_eq!(event.key, "c");
        assert!(event.modifiers.ctrl);
        assert!(event.is_press());
    }

    #[test]
    fn test_convert_named_keys() {
        for (code, name) in [
            (KeyCode::Enter, "Enter"),
            (KeyCode::Tab, "Tab"),
            (KeyCode::Esc, "Escape"),
            (KeyCode::PageDown, "PageDown"),
        ] {
            let event = convert_key_event(CrosstermKeyEvent::new(code, KeyModifiers::NONE));
            assert_eq!(event.key, name);
        }
    }

    #[test]
    fn test_space_is_a_char() {
        let event =
            convert_key_event(CrosstermKeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        assert_eq!(event.key, " ");
    }

    #[test]
    fn test_back_tab_maps_to_tab() {
        // Shift+Tab arrives as BackTab; the navigator treats any Tab alike
        let event =
            convert_key_event(CrosstermKeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(event.key, "Tab");
        assert!(event.modifiers.shift);
    }
}
