//! DirectInputStrategy: the OS's cooperative input channel.
//!
//! When the engine is the active input method and a field has focus, the OS
//! hands out a channel that delivers key events and committed text exactly
//! like a hardware keyboard would.  This is the highest-fidelity path for
//! key presses (modifiers included) and text, so it runs right after the
//! global actions.

use kiosk_input_core::{CapabilityLevel, Command, KeyCode, Modifiers};
use tracing::{debug, warn};

use crate::application::host::{
    AccessibilityHost, HostError, InputChannel, KeyEvent, KeyEventAction,
};
use crate::application::strategy::InjectionStrategy;

#[derive(Debug, Default, Clone, Copy)]
pub struct DirectInputStrategy;

impl DirectInputStrategy {
    fn press(channel: &dyn InputChannel, code: KeyCode, meta: Modifiers) -> Result<(), HostError> {
        for action in [KeyEventAction::Down, KeyEventAction::Up] {
            channel.send_key_event(KeyEvent { action, code, meta })?;
        }
        Ok(())
    }
}

impl InjectionStrategy for DirectInputStrategy {
    fn name(&self) -> &'static str {
        "direct_input"
    }

    fn try_inject(&self, host: &dyn AccessibilityHost, command: &Command) -> Option<bool> {
        if matches!(command, Command::Action { .. }) {
            return None;
        }
        if !host.capability_level().supports(CapabilityLevel::DIRECT_INPUT) {
            return None;
        }

        let channel = match host.input_channel() {
            Ok(Some(channel)) => channel,
            Ok(None) => {
                debug!("no input channel; nothing focused");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "input channel lookup failed");
                return None;
            }
        };

        let result = match command {
            Command::KeyPress { code, modifiers } => Self::press(channel.as_ref(), *code, *modifiers),
            Command::TextInsert { text } => channel.commit_text(text),
            Command::Action { .. } => return None,
        };

        match result {
            Ok(()) => Some(true),
            Err(e) => {
                warn!(error = %e, "direct input delivery failed");
                Some(false)
            }
        }
    }
}
