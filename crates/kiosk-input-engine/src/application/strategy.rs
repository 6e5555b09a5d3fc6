//! The probing interface shared by every injection strategy.
//!
//! # How strategies cooperate (for beginners)
//!
//! No single OS mechanism can deliver every command to every app.  The engine
//! therefore keeps an ordered list of strategies and asks each one in turn.
//! Each answer is a three-way `Option<bool>`:
//!
//! | Answer        | Meaning                                             |
//! |---------------|-----------------------------------------------------|
//! | `None`        | Not mine, or the OS lacks what I need.  Skip me.    |
//! | `Some(false)` | I tried and it did not work.  Try the next one.     |
//! | `Some(true)`  | Delivered.  Stop here.                              |
//!
//! Strategies never return errors: OS failures are logged and folded into
//! `Some(false)` at the strategy boundary.

use kiosk_input_core::Command;
use serde::{Deserialize, Serialize};

use super::host::AccessibilityHost;

/// One way of delivering a command into the foreground app.
#[cfg_attr(test, mockall::automock)]
pub trait InjectionStrategy: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Attempts delivery.  See the module docs for the meaning of the result.
    fn try_inject(&self, host: &dyn AccessibilityHost, command: &Command) -> Option<bool>;
}

/// What to do with modifier keys the chosen mechanism cannot express.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierPolicy {
    /// Deliver the bare key and log that the modifiers were dropped.
    #[default]
    Degrade,
    /// Refuse, so the combo fails instead of arriving as a different key.
    Reject,
}
