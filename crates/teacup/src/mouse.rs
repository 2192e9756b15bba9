//! Mouse input handling.
//!
//! Mouse events must be enabled with `Program::with_mouse()`. The runtime
//! uses left presses to activate buttons; everything else is forwarded to
//! the component.

use std::fmt;

/// Mouse event message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseMsg {
    /// X coordinate (column), 0-indexed.
    pub x: u16,
    /// Y coordinate (row), 0-indexed.
    pub y: u16,
    /// The action that occurred.
    pub action: MouseAction,
    /// The button involved.
    pub button: MouseButton,
}

impl MouseMsg {
    /// A left-button press at the given cell.
    pub fn left_press(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            action: MouseAction::Press,
            button: MouseButton::Left,
        }
    }

    /// Whether this is a left-button press.
    pub fn is_left_press(&self) -> bool {
        self.action == MouseAction::Press && self.button == MouseButton::Left
    }
}

impl fmt::Display for MouseMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at ({}, {})", self.button, self.action, self.x, self.y)
    }
}

/// Mouse action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseAction {
    /// Mouse button pressed.
    #[default]
    Press,
    /// Mouse button released.
    Release,
    /// Mouse moved.
    Motion,
}

impl fmt::Display for MouseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MouseAction::Press => "press",
            MouseAction::Release => "release",
            MouseAction::Motion => "motion",
        };
        write!(f, "{name}")
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// No button (motion only).
    #[default]
    None,
    /// Left button.
    Left,
    /// Middle button.
    Middle,
    /// Right button.
    Right,
    /// Any scroll wheel direction.
    Wheel,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MouseButton::None => "none",
            MouseButton::Left => "left",
            MouseButton::Middle => "middle",
            MouseButton::Right => "right",
            MouseButton::Wheel => "wheel",
        };
        write!(f, "{name}")
    }
}

/// Convert a crossterm mouse event into a [`MouseMsg`].
pub fn from_crossterm_mouse(event: crossterm::event::MouseEvent) -> MouseMsg {
    use crossterm::event::{MouseButton as CtButton, MouseEventKind};

    let (action, button) = match event.kind {
        MouseEventKind::Down(b) => (MouseAction::Press, b),
        MouseEventKind::Up(b) => (MouseAction::Release, b),
        MouseEventKind::Drag(b) => (MouseAction::Motion, b),
        MouseEventKind::Moved => {
            return MouseMsg {
                x: event.column,
                y: event.row,
                action: MouseAction::Motion,
                button: MouseButton::None,
            };
        }
        MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => {
            return MouseMsg {
                x: event.column,
                y: event.row,
                action: MouseAction::Press,
                button: MouseButton::Wheel,
            };
        }
    };

    let button = match button {
        CtButton::Left => MouseButton::Left,
        CtButton::Right => MouseButton::Right,
        CtButton::Middle => MouseButton::Middle,
    };

    MouseMsg {
        x: event.column,
        y: event.row,
        action,
        button,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};

    fn event(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 3,
            row: 7,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_left_press_from_crossterm() {
        let msg = from_crossterm_mouse(event(MouseEventKind::Down(
            crossterm::event::MouseButton::Left,
        )));
        assert!(msg.is_left_press());
        assert_eq!((msg.x, msg.y), (3, 7));
    }

    #[test]
    fn test_release_is_not_press() {
        let msg = from_crossterm_mouse(event(MouseEventKind::Up(
            crossterm::event::MouseButton::Left,
        )));
        assert!(!msg.is_left_press());
        assert_eq!(msg.action, MouseAction::Release);
    }

    #[test]
    fn test_scroll_maps_to_wheel() {
        let msg = from_crossterm_mouse(event(MouseEventKind::ScrollDown));
        assert_eq!(msg.button, MouseButton::Wheel);
        assert!(!msg.is_left_press());
    }

    #[test]
    fn test_display() {
        assert_eq!(MouseMsg::left_press(1, 2).to_string(), "left press at (1, 2)");
    }
}
