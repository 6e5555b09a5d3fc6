//! ShellFallbackStrategy: last-resort `input keyevent <code>`.
//!
//! Spawning the platform's synthetic-input tool works on some devices where
//! nothing else does, but it is slow, carries only the raw key code, and its
//! outcome cannot be observed.  It therefore runs only after every structured
//! strategy has failed, and a successfully *started* spawn counts as
//! delivered.

use std::sync::Arc;

use kiosk_input_core::Command;
use tracing::{debug, warn};

use crate::application::host::AccessibilityHost;
use crate::application::strategy::{InjectionStrategy, ModifierPolicy};

/// Starts an external program without waiting for it.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Returns once the spawn has been requested.  Failures of the program
    /// itself are the runner's to log.
    fn spawn(&self, program: &str, args: &[String]) -> std::io::Result<()>;
}

pub struct ShellFallbackStrategy {
    runner: Arc<dyn CommandRunner>,
    program: String,
    policy: ModifierPolicy,
}

impl ShellFallbackStrategy {
    pub fn new(runner: Arc<dyn CommandRunner>, program: impl Into<String>, policy: ModifierPolicy) -> Self {
        Self {
            runner,
            program: program.into(),
            policy,
        }
    }
}

impl InjectionStrategy for ShellFallbackStrategy {
    fn name(&self) -> &'static str {
        "shell_fallback"
    }

    fn try_inject(&self, _host: &dyn AccessibilityHost, command: &Command) -> Option<bool> {
        let Command::KeyPress { code, modifiers } = command else {
            return None;
        };

        if !modifiers.is_empty() {
            match self.policy {
                ModifierPolicy::Reject => {
                    debug!(%code, ?modifiers, "modified key cannot be sent through the shell");
                    return None;
                }
                ModifierPolicy::Degrade => {
                    debug!(%code, ?modifiers, "sending bare key; modifiers dropped");
                }
            }
        }

        let args = vec!["keyevent".to_string(), code.as_i32().to_string()];
        match self.runner.spawn(&self.program, &args) {
            Ok(()) => Some(true),
            Err(e) => {
                warn!(program = %self.program, error = %e, "failed to spawn input command");
                Some(false)
            }
        }
    }
}
