//! System-global actions and the fixed tables that select them.

use serde::{Deserialize, Serialize};

use super::capability::CapabilityLevel;
use crate::command::ActionKind;
use crate::keymap::KeyCode;

/// A coarse system command the host can execute without a UI target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalAction {
    Back,
    Home,
    Recents,
    /// Headset-hook key, which media sessions treat as play/pause.
    MediaPlayPause,
}

impl GlobalAction {
    /// The host's numeric identifier for this action.
    pub fn id(self) -> i32 {
        match self {
            GlobalAction::Back => 1,
            GlobalAction::Home => 2,
            GlobalAction::Recents => 3,
            GlobalAction::MediaPlayPause => 10,
        }
    }

    /// Minimum capability level at which the host offers this action.
    pub fn floor(self) -> Option<CapabilityLevel> {
        match self {
            GlobalAction::MediaPlayPause => Some(CapabilityLevel::MEDIA_GLOBAL_ACTION),
            _ => None,
        }
    }

    /// Returns `true` if the action can be issued at `level`.
    pub fn available_at(self, level: CapabilityLevel) -> bool {
        self.floor().map_or(true, |floor| level.supports(floor))
    }

    /// Maps a key code to its global action, if the key has one.
    ///
    /// Availability is not checked here; see [`GlobalAction::available_at`].
    pub fn for_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::BACK => Some(GlobalAction::Back),
            KeyCode::HOME => Some(GlobalAction::Home),
            KeyCode::APP_SWITCH => Some(GlobalAction::Recents),
            KeyCode::MEDIA_PLAY_PAUSE | KeyCode::HEADSETHOOK => Some(GlobalAction::MediaPlayPause),
            _ => None,
        }
    }

    /// Maps a named action to its global action.
    pub fn for_kind(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Back => GlobalAction::Back,
            ActionKind::Home => GlobalAction::Home,
            ActionKind::Recents => GlobalAction::Recents,
            ActionKind::MediaToggle => GlobalAction::MediaPlayPause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_key_table() {
        assert_eq!(GlobalAction::for_key(KeyCode::BACK), Some(GlobalAction::Back));
        assert_eq!(GlobalAction::for_key(KeyCode::HOME), Some(GlobalAction::Home));
        assert_eq!(GlobalAction::for_key(KeyCode::APP_SWITCH), Some(GlobalAction::Recents));
        assert_eq!(
            GlobalAction::for_key(KeyCode::HEADSETHOOK),
            Some(GlobalAction::MediaPlayPause)
        );
        assert_eq!(GlobalAction::for_key(KeyCode::DPAD_UP), None);
        assert_eq!(GlobalAction::for_key(KeyCode::MENU), None);
    }

    #[test]
    fn test_media_action_is_gated_by_capability_level() {
        assert!(!GlobalAction::MediaPlayPause.available_at(CapabilityLevel(30)));
        assert!(GlobalAction::MediaPlayPause.available_at(CapabilityLevel(31)));
    }

    #[test]
    fn test_navigation_actions_are_always_available() {
        for action in [GlobalAction::Back, GlobalAction::Home, GlobalAction::Recents] {
            assert!(action.available_at(CapabilityLevel(1)), "{action:?}");
        }
    }

    #[test]
    fn test_host_identifiers() {
        assert_eq!(GlobalAction::Back.id(), 1);
        assert_eq!(GlobalAction::MediaPlayPause.id(), 10);
    }
}
