//! Key codes and the virtual keyboard character map.
//!
//! The canonical key representation is the host OS's own integer key code
//! (the numbering used by the `input keyevent` shell tool and by the direct
//! input channel).  Keeping the raw integer, rather than a closed enum, means
//! a code the engine has never heard of can still be forwarded bit-for-bit to
//! the strategies that understand raw codes.
//!
//! # What is a virtual keymap? (for beginners)
//!
//! A key code names a *key*, not a *character*.  Key 29 is "the A key"; whether
//! it types `a` or `A` depends on Shift.  When the engine has to fall back to
//! editing a text field directly, it needs the character, so
//! [`virtual_keyboard::to_char`] plays the role of a standard US virtual
//! keyboard layout.

pub mod virtual_keyboard;

use serde::{Deserialize, Serialize};

use crate::domain::geometry::Direction;

/// A raw OS key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub i32);

impl KeyCode {
    pub const HOME: KeyCode = KeyCode(3);
    pub const BACK: KeyCode = KeyCode(4);

    // Digits (7–16)
    pub const DIGIT_0: KeyCode = KeyCode(7);
    pub const DIGIT_1: KeyCode = KeyCode(8);
    pub const DIGIT_9: KeyCode = KeyCode(16);
    pub const STAR: KeyCode = KeyCode(17);
    pub const POUND: KeyCode = KeyCode(18);

    // D-pad (19–23)
    pub const DPAD_UP: KeyCode = KeyCode(19);
    pub const DPAD_DOWN: KeyCode = KeyCode(20);
    pub const DPAD_LEFT: KeyCode = KeyCode(21);
    pub const DPAD_RIGHT: KeyCode = KeyCode(22);
    pub const DPAD_CENTER: KeyCode = KeyCode(23);

    // Letters (29–54)
    pub const A: KeyCode = KeyCode(29);
    pub const B: KeyCode = KeyCode(30);
    pub const C: KeyCode = KeyCode(31);
    pub const Z: KeyCode = KeyCode(54);

    pub const COMMA: KeyCode = KeyCode(55);
    pub const PERIOD: KeyCode = KeyCode(56);
    pub const ALT_LEFT: KeyCode = KeyCode(57);
    pub const ALT_RIGHT: KeyCode = KeyCode(58);
    pub const SHIFT_LEFT: KeyCode = KeyCode(59);
    pub const SHIFT_RIGHT: KeyCode = KeyCode(60);
    pub const TAB: KeyCode = KeyCode(61);
    pub const SPACE: KeyCode = KeyCode(62);
    pub const ENTER: KeyCode = KeyCode(66);
    /// Backspace.
    pub const DEL: KeyCode = KeyCode(67);
    pub const GRAVE: KeyCode = KeyCode(68);
    pub const MINUS: KeyCode = KeyCode(69);
    pub const EQUALS: KeyCode = KeyCode(70);
    pub const LEFT_BRACKET: KeyCode = KeyCode(71);
    pub const RIGHT_BRACKET: KeyCode = KeyCode(72);
    pub const BACKSLASH: KeyCode = KeyCode(73);
    pub const SEMICOLON: KeyCode = KeyCode(74);
    pub const APOSTROPHE: KeyCode = KeyCode(75);
    pub const SLASH: KeyCode = KeyCode(76);
    pub const AT: KeyCode = KeyCode(77);
    pub const HEADSETHOOK: KeyCode = KeyCode(79);
    pub const PLUS: KeyCode = KeyCode(81);
    pub const MENU: KeyCode = KeyCode(82);
    pub const MEDIA_PLAY_PAUSE: KeyCode = KeyCode(85);
    pub const ESCAPE: KeyCode = KeyCode(111);
    pub const CTRL_LEFT: KeyCode = KeyCode(113);
    pub const CTRL_RIGHT: KeyCode = KeyCode(114);

    // Numpad (144–161)
    pub const NUMPAD_0: KeyCode = KeyCode(144);
    pub const NUMPAD_9: KeyCode = KeyCode(153);
    pub const NUMPAD_DIVIDE: KeyCode = KeyCode(154);
    pub const NUMPAD_MULTIPLY: KeyCode = KeyCode(155);
    pub const NUMPAD_SUBTRACT: KeyCode = KeyCode(156);
    pub const NUMPAD_ADD: KeyCode = KeyCode(157);
    pub const NUMPAD_DOT: KeyCode = KeyCode(158);
    pub const NUMPAD_COMMA: KeyCode = KeyCode(159);
    pub const NUMPAD_ENTER: KeyCode = KeyCode(160);
    pub const NUMPAD_EQUALS: KeyCode = KeyCode(161);

    pub const APP_SWITCH: KeyCode = KeyCode(187);

    /// Returns the raw integer code.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Returns the movement direction for D-pad arrow keys.
    pub fn direction(self) -> Option<Direction> {
        match self {
            KeyCode::DPAD_UP => Some(Direction::Up),
            KeyCode::DPAD_DOWN => Some(Direction::Down),
            KeyCode::DPAD_LEFT => Some(Direction::Left),
            KeyCode::DPAD_RIGHT => Some(Direction::Right),
            _ => None,
        }
    }

    /// Returns `true` for keys that mean "activate the current element".
    pub fn is_select(self) -> bool {
        matches!(self, KeyCode::DPAD_CENTER | KeyCode::ENTER)
    }

    /// Returns `true` for the backspace key.
    pub fn is_delete(self) -> bool {
        self == KeyCode::DEL
    }
}

impl std::fmt::Display for KeyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpad_keys_map_to_directions() {
        assert_eq!(KeyCode::DPAD_UP.direction(), Some(Direction::Up));
        assert_eq!(KeyCode::DPAD_DOWN.direction(), Some(Direction::Down));
        assert_eq!(KeyCode::DPAD_LEFT.direction(), Some(Direction::Left));
        assert_eq!(KeyCode::DPAD_RIGHT.direction(), Some(Direction::Right));
        assert_eq!(KeyCode::DPAD_CENTER.direction(), None);
    }

    #[test]
    fn test_center_and_enter_are_select_keys() {
        assert!(KeyCode::DPAD_CENTER.is_select());
        assert!(KeyCode::ENTER.is_select());
        assert!(!KeyCode::NUMPAD_ENTER.is_select());
        assert!(!KeyCode::SPACE.is_select());
    }

    #[test]
    fn test_key_code_serializes_as_bare_integer() {
        // serde(transparent) keeps fixtures and API payloads readable.
        let code = KeyCode::BACK;
        assert_eq!(code.as_i32(), 4);
        assert_eq!(code.to_string(), "4");
    }
}
