//! The command vocabulary consumed from upstream callers.
//!
//! A [`Command`] is built by whatever layer received the request (the local
//! HTTP API, the MQTT bridge, the replay console) and handed to the engine for
//! exactly one dispatch.  Commands are plain immutable values: the engine never
//! stores them past the `send` call that received them.
//!
//! # The three command kinds (for beginners)
//!
//! | Kind         | Example                        | Typical source                 |
//! |--------------|--------------------------------|--------------------------------|
//! | `KeyPress`   | D-pad up, Backspace, Ctrl+C    | remote-control buttons, keypad |
//! | `TextInsert` | `"hello world"`                | "type this text" API calls     |
//! | `Action`     | go back, go home, show recents | system buttons                 |
//!
//! A key press is the most general of the three: depending on the key and on
//! what the foreground application exposes, it may end up as a global action,
//! a focus move, a click, a text edit, or a raw shell key event.

pub mod remote;

use serde::{Deserialize, Serialize};

use crate::keymap::KeyCode;

pub use remote::{RemoteButton, UnknownButton};

/// Modifier keys held during a key press, as an OS meta-state bitmask.
///
/// The bit values match the meta-state flags the direct input channel
/// expects, so the mask can be forwarded without translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers(pub u32);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: u32 = 0x0000_0001;
    pub const ALT: u32 = 0x0000_0002;
    pub const CTRL: u32 = 0x0000_1000;

    /// Builds a mask from individual flags.
    pub fn new(shift: bool, ctrl: bool, alt: bool) -> Self {
        let mut bits = 0;
        if shift {
            bits |= Self::SHIFT;
        }
        if ctrl {
            bits |= Self::CTRL;
        }
        if alt {
            bits |= Self::ALT;
        }
        Modifiers(bits)
    }

    /// Returns `true` if Shift is held.
    pub fn shift(&self) -> bool {
        self.0 & Self::SHIFT != 0
    }

    /// Returns `true` if Ctrl is held.
    pub fn ctrl(&self) -> bool {
        self.0 & Self::CTRL != 0
    }

    /// Returns `true` if Alt is held.
    pub fn alt(&self) -> bool {
        self.0 & Self::ALT != 0
    }

    /// Returns `true` if no modifier is held.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if Shift is the only modifier held.
    pub fn is_shift_only(&self) -> bool {
        self.shift() && !self.ctrl() && !self.alt()
    }

    /// Returns a copy with the given flag bits set.
    pub fn with(self, bits: u32) -> Self {
        Modifiers(self.0 | bits)
    }
}

/// Coarse, app-independent actions a caller can request by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Back,
    Home,
    Recents,
    MediaToggle,
}

impl ActionKind {
    /// Parses the lowercase action name used on the command channels.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "back" => Some(ActionKind::Back),
            "home" => Some(ActionKind::Home),
            "recents" | "app_switch" => Some(ActionKind::Recents),
            "media" | "media_toggle" | "playpause" => Some(ActionKind::MediaToggle),
            _ => None,
        }
    }
}

/// A single injection request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Press and release one key, optionally with modifiers held.
    KeyPress { code: KeyCode, modifiers: Modifiers },
    /// Insert literal text into the focused field.
    TextInsert { text: String },
    /// Perform a named system action.
    Action { kind: ActionKind },
}

impl Command {
    /// Convenience constructor for an unmodified key press.
    pub fn key(code: KeyCode) -> Self {
        Command::KeyPress {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Convenience constructor for a key press with modifiers.
    pub fn key_with(code: KeyCode, modifiers: Modifiers) -> Self {
        Command::KeyPress { code, modifiers }
    }

    /// Convenience constructor for text insertion.
    pub fn text(text: impl Into<String>) -> Self {
        Command::TextInsert { text: text.into() }
    }

    /// Convenience constructor for a named action.
    pub fn action(kind: ActionKind) -> Self {
        Command::Action { kind }
    }

    /// Short label used in log lines.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Command::KeyPress { .. } => "key_press",
            Command::TextInsert { .. } => "text_insert",
            Command::Action { .. } => "action",
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
