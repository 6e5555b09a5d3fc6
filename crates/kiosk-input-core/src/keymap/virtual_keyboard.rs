//! Key code to character translation for a standard virtual keyboard.
//!
//! Mirrors the OS's built-in virtual keyboard character map (US layout).  Only
//! Shift changes the produced character; any key pressed with Ctrl or Alt
//! produces no character because those combinations are shortcuts, not text.

use crate::command::Modifiers;

use super::KeyCode;

/// Unshifted and shifted characters for the digit row, `0` through `9`.
const DIGIT_ROW: [(char, char); 10] = [
    ('0', ')'),
    ('1', '!'),
    ('2', '@'),
    ('3', '#'),
    ('4', '$'),
    ('5', '%'),
    ('6', '^'),
    ('7', '&'),
    ('8', '*'),
    ('9', '('),
];

/// Translates a key code to the character it types, if any.
///
/// Returns `None` for non-printable keys (arrows, Escape, function keys,
/// modifiers) and for any key combined with Ctrl or Alt.
pub fn to_char(code: KeyCode, modifiers: Modifiers) -> Option<char> {
    if modifiers.ctrl() || modifiers.alt() {
        return None;
    }
    let shift = modifiers.shift();
    let pick = |plain: char, shifted: char| Some(if shift { shifted } else { plain });

    let raw = code.as_i32();
    match code {
        _ if (KeyCode::A.0..=KeyCode::Z.0).contains(&raw) => {
            let offset = (raw - KeyCode::A.0) as u8;
            let lower = (b'a' + offset) as char;
            pick(lower, lower.to_ascii_uppercase())
        }
        _ if (KeyCode::DIGIT_0.0..=KeyCode::DIGIT_9.0).contains(&raw) => {
            let (plain, shifted) = DIGIT_ROW[(raw - KeyCode::DIGIT_0.0) as usize];
            pick(plain, shifted)
        }
        _ if (KeyCode::NUMPAD_0.0..=KeyCode::NUMPAD_9.0).contains(&raw) => {
            let offset = (raw - KeyCode::NUMPAD_0.0) as u8;
            Some((b'0' + offset) as char)
        }
        KeyCode::SPACE => Some(' '),
        KeyCode::TAB => Some('\t'),
        KeyCode::ENTER | KeyCode::NUMPAD_ENTER => Some('\n'),
        KeyCode::STAR | KeyCode::NUMPAD_MULTIPLY => Some('*'),
        KeyCode::POUND => Some('#'),
        KeyCode::AT => Some('@'),
        KeyCode::PLUS | KeyCode::NUMPAD_ADD => Some('+'),
        KeyCode::NUMPAD_DIVIDE => Some('/'),
        KeyCode::NUMPAD_SUBTRACT => Some('-'),
        KeyCode::NUMPAD_DOT => Some('.'),
        KeyCode::NUMPAD_COMMA => Some(','),
        KeyCode::NUMPAD_EQUALS => Some('='),
        KeyCode::COMMA => pick(',', '<'),
        KeyCode::PERIOD => pick('.', '>'),
        KeyCode::GRAVE => pick('`', '~'),
        KeyCode::MINUS => pick('-', '_'),
        KeyCode::EQUALS => pick('=', '+'),
        KeyCode::LEFT_BRACKET => pick('[', '{'),
        KeyCode::RIGHT_BRACKET => pick(']', '}'),
        KeyCode::BACKSLASH => pick('\\', '|'),
        KeyCode::SEMICOLON => pick(';', ':'),
        KeyCode::APOSTROPHE => pick('\'', '"'),
        KeyCode::SLASH => pick('/', '?'),
        _ => None,
    }
}
