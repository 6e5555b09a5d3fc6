//! Named remote-control buttons.
//!
//! The kiosk's HTTP API exposes a TV-remote style vocabulary
//! (`/api/remote/up`, `/api/remote/select`, ...).  Each button name maps to a
//! single key press; the engine then decides how that key is delivered.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::Command;
use crate::keymap::KeyCode;

/// Error returned when a button name is not part of the remote vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown remote button: {0:?}")]
pub struct UnknownButton(pub String);

/// A button on the virtual remote control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteButton {
    Up,
    Down,
    Left,
    Right,
    Select,
    Back,
    Home,
    Menu,
    PlayPause,
}

impl RemoteButton {
    /// All buttons, in the order the API documents them.
    pub const ALL: [RemoteButton; 9] = [
        RemoteButton::Up,
        RemoteButton::Down,
        RemoteButton::Left,
        RemoteButton::Right,
        RemoteButton::Select,
        RemoteButton::Back,
        RemoteButton::Home,
        RemoteButton::Menu,
        RemoteButton::PlayPause,
    ];

    /// The key code this button sends.
    pub fn key_code(self) -> KeyCode {
        match self {
            RemoteButton::Up => KeyCode::DPAD_UP,
            RemoteButton::Down => KeyCode::DPAD_DOWN,
            RemoteButton::Left => KeyCode::DPAD_LEFT,
            RemoteButton::Right => KeyCode::DPAD_RIGHT,
            RemoteButton::Select => KeyCode::DPAD_CENTER,
            RemoteButton::Back => KeyCode::BACK,
            RemoteButton::Home => KeyCode::HOME,
            RemoteButton::Menu => KeyCode::MENU,
            RemoteButton::PlayPause => KeyCode::MEDIA_PLAY_PAUSE,
        }
    }

    /// The path segment used on the HTTP API.
    pub fn name(self) -> &'static str {
        match self {
            RemoteButton::Up => "up",
            RemoteButton::Down => "down",
            RemoteButton::Left => "left",
            RemoteButton::Right => "right",
            RemoteButton::Select => "select",
            RemoteButton::Back => "back",
            RemoteButton::Home => "home",
            RemoteButton::Menu => "menu",
            RemoteButton::PlayPause => "playpause",
        }
    }

    /// Builds the unmodified key press for this button.
    pub fn to_command(self) -> Command {
        Command::key(self.key_code())
    }
}

impl FromStr for RemoteButton {
    type Err = UnknownButton;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        RemoteButton::ALL
            .into_iter()
            .find(|b| b.name() == lowered)
            .ok_or(UnknownButton(s.to_string()))
    }
}

impl fmt::Display for RemoteButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_button_name_parses_back_to_itself() {
        for button in RemoteButton::ALL {
            assert_eq!(button.name().parse::<RemoteButton>(), Ok(button));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(" Select ".parse::<RemoteButton>(), Ok(RemoteButton::Select));
    }

    #[test]
    fn test_unknown_button_is_rejected() {
        let err = "volume".parse::<RemoteButton>().unwrap_err();
        assert_eq!(err, UnknownButton("volume".to_string()));
    }

    #[test]
    fn test_select_sends_dpad_center() {
        assert_eq!(RemoteButton::Select.to_command(), Command::key(KeyCode::DPAD_CENTER));
    }
}
