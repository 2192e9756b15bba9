//! Keyboard input handling.
//!
//! Only the keys the runtime and its components act on get their own
//! [`KeyType`]; anything else arrives as [`KeyType::Other`].

use std::fmt;

/// Keyboard key event message.
///
/// # Example
///
/// ```rust
/// use teacup::{KeyMsg, KeyType};
///
/// let key = KeyMsg::from_char('q');
/// assert_eq!(key.key_type, KeyType::Runes);
/// assert_eq!(key.to_string(), "q");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMsg {
    /// The type of key pressed.
    pub key_type: KeyType,
    /// For [`KeyType::Runes`], the characters typed.
    pub runes: Vec<char>,
    /// Whether Alt was held.
    pub alt: bool,
}

impl KeyMsg {
    /// Create a new key message from a key type.
    pub fn from_type(key_type: KeyType) -> Self {
        Self {
            key_type,
            runes: Vec::new(),
            alt: false,
        }
    }

    /// Create a new key message from a character.
    pub fn from_char(c: char) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes: vec![c],
            alt: false,
        }
    }

    /// Set the alt modifier.
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// The single typed character, if this is a one-rune key press.
    pub fn rune(&self) -> Option<char> {
        match (self.key_type, self.runes.as_slice()) {
            (KeyType::Runes, [c]) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for KeyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.key_type == KeyType::Runes {
            for c in &self.runes {
                write!(f, "{c}")?;
            }
            Ok(())
        } else {
            write!(f, "{}", self.key_type)
        }
    }
}

/// Key type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Regular character(s) input.
    Runes,
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Tab.
    Tab,
    /// Shift+Tab.
    ShiftTab,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Escape.
    Esc,
    /// Break/Interrupt (Ctrl+C).
    CtrlC,
    /// Backspace.
    Backspace,
    /// Any key without a dedicated variant.
    Other,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyType::Runes => "runes",
            KeyType::Enter => "enter",
            KeyType::Space => " ",
            KeyType::Tab => "tab",
            KeyType::ShiftTab => "shift+tab",
            KeyType::Up => "up",
            KeyType::Down => "down",
            KeyType::Left => "left",
            KeyType::Right => "right",
            KeyType::Esc => "esc",
            KeyType::CtrlC => "ctrl+c",
            KeyType::Backspace => "backspace",
            KeyType::Other => "other",
        };
        write!(f, "{name}")
    }
}

/// Convert a crossterm key event into a [`KeyMsg`].
pub fn from_crossterm_key(
    code: crossterm::event::KeyCode,
    modifiers: crossterm::event::KeyModifiers,
) -> KeyMsg {
    use crossterm::event::{KeyCode, KeyModifiers};

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);

    let mut key = match code {
        KeyCode::Char(c) if ctrl && c.eq_ignore_ascii_case(&'c') => {
            KeyMsg::from_type(KeyType::CtrlC)
        }
        KeyCode::Char(_) if ctrl => KeyMsg::from_type(KeyType::Other),
        KeyCode::Char(' ') => KeyMsg::from_type(KeyType::Space),
        KeyCode::Char(c) => KeyMsg::from_char(c),
        KeyCode::Enter => KeyMsg::from_type(KeyType::Enter),
        KeyCode::Backspace => KeyMsg::from_type(KeyType::Backspace),
        KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => {
            KeyMsg::from_type(KeyType::ShiftTab)
        }
        KeyCode::Tab => KeyMsg::from_type(KeyType::Tab),
        KeyCode::BackTab => KeyMsg::from_type(KeyType::ShiftTab),
        KeyCode::Esc => KeyMsg::from_type(KeyType::Esc),
        KeyCode::Up => KeyMsg::from_type(KeyType::Up),
        KeyCode::Down => KeyMsg::from_type(KeyType::Down),
        KeyCode::Left => KeyMsg::from_type(KeyType::Left),
        KeyCode::Right => KeyMsg::from_type(KeyType::Right),
        _ => KeyMsg::from_type(KeyType::Other),
    };
    key.alt = alt;
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_key_display() {
        assert_eq!(KeyMsg::from_char('a').to_string(), "a");
        assert_eq!(KeyMsg::from_char('a').with_alt().to_string(), "alt+a");
        assert_eq!(KeyMsg::from_type(KeyType::Enter).to_string(), "enter");
        assert_eq!(KeyMsg::from_type(KeyType::ShiftTab).to_string(), "shift+tab");
    }

    #[test]
    fn test_rune() {
        assert_eq!(KeyMsg::from_char('q').rune(), Some('q'));
        assert_eq!(KeyMsg::from_type(KeyType::Tab).rune(), None);
    }

    #[test]
    fn test_from_crossterm_ctrl_c() {
        let key = from_crossterm_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key.key_type, KeyType::CtrlC);
    }

    #[test]
    fn test_from_crossterm_space_and_chars() {
        let space = from_crossterm_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(space.key_type, KeyType::Space);

        let q = from_crossterm_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(q.rune(), Some('q'));
    }

    #[test]
    fn test_from_crossterm_tabs() {
        let tab = from_crossterm_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(tab.key_type, KeyType::Tab);

        let back = from_crossterm_key(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(back.key_type, KeyType::ShiftTab);
    }

    #[test]
    fn test_from_crossterm_unmapped() {
        let key = from_crossterm_key(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(key.key_type, KeyType::Other);
    }
}
