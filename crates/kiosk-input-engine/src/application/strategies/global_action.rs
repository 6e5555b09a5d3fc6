//! GlobalActionStrategy: system-wide back, home, recents, and media toggle.
//!
//! These actions work the same in every app, so they are tried before any
//! strategy that needs the app's cooperation.

use kiosk_input_core::{Command, GlobalAction};
use tracing::{debug, warn};

use crate::application::host::AccessibilityHost;
use crate::application::strategy::InjectionStrategy;

/// Issues global actions for the fixed key table and for `Action` commands.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalActionStrategy;

impl GlobalActionStrategy {
    fn action_for(command: &Command) -> Option<GlobalAction> {
        match command {
            Command::KeyPress { code, modifiers } if modifiers.is_empty() => {
                GlobalAction::for_key(*code)
            }
            Command::Action { kind } => Some(GlobalAction::for_kind(*kind)),
            _ => None,
        }
    }
}

impl InjectionStrategy for GlobalActionStrategy {
    fn name(&self) -> &'static str {
        "global_action"
    }

    fn try_inject(&self, host: &dyn AccessibilityHost, command: &Command) -> Option<bool> {
        let action = Self::action_for(command)?;

        let level = host.capability_level();
        if !action.available_at(level) {
            debug!(?action, %level, "global action not available at this level");
            return None;
        }

        match host.perform_global_action(action) {
            Ok(true) => {
                debug!(?action, id = action.id(), "global action performed");
                Some(true)
            }
            Ok(false) => {
                debug!(?action, "global action declined");
                Some(false)
            }
            Err(e) => {
                warn!(?action, error = %e, "global action failed");
                Some(false)
            }
        }
    }
}
