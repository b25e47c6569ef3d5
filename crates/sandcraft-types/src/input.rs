//! Renderer-agnostic input event types.
//!
//! The host event loop maps its native window events to these types. Widgets
//! never see raw platform input.

use serde::{Deserialize, Serialize};

/// A keyboard key symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Space,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    /// Function key `F1`..`F24`.
    Function(u8),
    /// A printable key, reported by its unshifted character.
    Char(char),
    /// Native key code with no portable mapping.
    Other(u32),
}

/// Keyboard modifier state accompanying key and mouse events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    /// True when no modifier is held.
    pub const fn is_empty(self) -> bool {
        !(self.shift || self.ctrl || self.alt || self.meta)
    }
}

/// A single mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Set of mouse buttons held during a drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MouseButtons {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl MouseButtons {
    /// A set holding exactly one button.
    pub const fn only(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self {
                left: true,
                middle: false,
                right: false,
            },
            MouseButton::Middle => Self {
                left: false,
                middle: true,
                right: false,
            },
            MouseButton::Right => Self {
                left: false,
                middle: false,
                right: true,
            },
        }
    }

    pub const fn contains(self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Middle => self.middle,
            MouseButton::Right => self.right,
        }
    }
}

/// Caret movement or deletion requested by the text input system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextMotion {
    Up,
    Down,
    Left,
    Right,
    BeginningOfLine,
    EndOfLine,
    /// Delete the character before the caret.
    Backspace,
    /// Delete the character after the caret.
    Delete,
}

/// An event routed to a single widget.
///
/// Coordinates are in render space (origin at the bottom-left of the window).
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// The widget gained keyboard focus.
    Focus,
    /// The widget lost keyboard focus.
    Unfocus,
    KeyPress { key: Key, modifiers: Modifiers },
    KeyRelease { key: Key, modifiers: Modifiers },
    MousePress {
        x: f32,
        y: f32,
        button: MouseButton,
        modifiers: Modifiers,
    },
    MouseRelease {
        x: f32,
        y: f32,
        button: MouseButton,
        modifiers: Modifiers,
    },
    MouseMotion { x: f32, y: f32, dx: f32, dy: f32 },
    MouseDrag {
        x: f32,
        y: f32,
        dx: f32,
        dy: f32,
        buttons: MouseButtons,
        modifiers: Modifiers,
    },
    MouseScroll {
        x: f32,
        y: f32,
        scroll_x: f32,
        scroll_y: f32,
    },
    /// Committed text from the keyboard or an input method.
    Text(String),
    TextMotion(TextMotion),
    /// Caret motion that extends the selection.
    TextMotionSelect(TextMotion),
}

impl WidgetEvent {
    /// Pointer position carried by mouse events.
    pub fn pointer(&self) -> Option<(f32, f32)> {
        match *self {
            Self::MousePress { x, y, .. }
            | Self::MouseRelease { x, y, .. }
            | Self::MouseMotion { x, y, .. }
            | Self::MouseDrag { x, y, .. }
            | Self::MouseScroll { x, y, .. } => Some((x, y)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_none_is_empty() {
        assert!(Modifiers::NONE.is_empty());
        assert!(Modifiers::default().is_empty());
        assert!(!Modifiers::SHIFT.is_empty());
        assert!(Modifiers::CTRL.ctrl);
        assert!(!Modifiers::CTRL.shift);
    }

    #[test]
    fn mouse_buttons_only() {
        let set = MouseButtons::only(MouseButton::Right);
        assert!(set.contains(MouseButton::Right));
        assert!(!set.contains(MouseButton::Left));
        assert!(!set.contains(MouseButton::Middle));
    }

    #[test]
    fn key_serde_roundtrip() {
        for key in [Key::Escape, Key::Char('q'), Key::Function(3), Key::Other(0xff)] {
            let json = serde_json::to_string(&key).unwrap();
            let back: Key = serde_json::from_str(&json).unwrap();
            assert_eq!(key, back);
        }
    }

    #[test]
    fn pointer_only_on_mouse_events() {
        let press = WidgetEvent::MousePress {
            x: 3.0,
            y: 4.0,
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        };
        assert_eq!(press.pointer(), Some((3.0, 4.0)));
        let scroll = WidgetEvent::MouseScroll {
            x: 1.0,
            y: 2.0,
            scroll_x: 0.0,
            scroll_y: -1.0,
        };
        assert_eq!(scroll.pointer(), Some((1.0, 2.0)));
        assert_eq!(WidgetEvent::Focus.pointer(), None);
        assert_eq!(WidgetEvent::Text("a".into()).pointer(), None);
    }

    #[test]
    fn motion_and_select_differ() {
        assert_ne!(
            WidgetEvent::TextMotion(TextMotion::Left),
            WidgetEvent::TextMotionSelect(TextMotion::Left)
        );
    }
}
