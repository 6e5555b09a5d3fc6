//! InjectionDispatcher: runs one command down the strategy chain.
//!
//! The standard chain is:
//!
//! ```text
//! GlobalAction → DirectInput → SpatialNavigator → TextFieldEditor → ShellFallback
//! ```
//!
//! Each strategy only claims the commands it understands, so this single list
//! yields the per-kind orders:
//!
//! - key press: all five, in order;
//! - text: direct input, then text field;
//! - action: global action only.
//!
//! The first `Some(true)` stops the chain.  There is no retry.

use std::sync::Arc;

use kiosk_input_core::Command;
use tracing::debug;

use super::host::AccessibilityHost;
use super::strategies::{
    CommandRunner, DirectInputStrategy, GestureSynthesizer, GestureTiming, GlobalActionStrategy,
    ShellFallbackStrategy, SpatialNavigator, TextFieldEditor,
};
use super::strategy::{InjectionStrategy, ModifierPolicy};

/// Knobs for [`InjectionDispatcher::standard`].
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOptions {
    pub modifier_policy: ModifierPolicy,
    pub gesture: GestureTiming,
    /// Program for the shell fallback; `None` leaves it out of the chain.
    pub shell_program: Option<String>,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            modifier_policy: ModifierPolicy::default(),
            gesture: GestureTiming::default(),
            shell_program: Some("input".to_string()),
        }
    }
}

pub struct InjectionDispatcher {
    strategies: Vec<Box<dyn InjectionStrategy>>,
}

impl InjectionDispatcher {
    /// Creates a dispatcher over an explicit chain.
    pub fn new(strategies: Vec<Box<dyn InjectionStrategy>>) -> Self {
        Self { strategies }
    }

    /// Creates the standard chain.
    pub fn standard(options: &DispatchOptions, runner: Arc<dyn CommandRunner>) -> Self {
        let gestures = GestureSynthesizer::new(options.gesture);
        let mut strategies: Vec<Box<dyn InjectionStrategy>> = vec![
            Box::new(GlobalActionStrategy),
            Box::new(DirectInputStrategy),
            Box::new(SpatialNavigator::new(gestures)),
            Box::new(TextFieldEditor),
        ];
        if let Some(program) = &options.shell_program {
            strategies.push(Box::new(ShellFallbackStrategy::new(
                runner,
                program.clone(),
                options.modifier_policy,
            )));
        }
        Self::new(strategies)
    }

    /// Names of the strategies, in chain order.
    pub fn chain(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Delivers `command`.  Returns `false` when every strategy passed or
    /// failed.
    pub fn send(&self, host: &dyn AccessibilityHost, command: &Command) -> bool {
        for strategy in &self.strategies {
            match strategy.try_inject(host, command) {
                Some(true) => {
                    debug!(strategy = strategy.name(), kind = command.kind_name(), "delivered");
                    return true;
                }
                Some(false) => {
                    debug!(strategy = strategy.name(), "attempt failed; trying next");
                }
                None => {}
            }
        }
        debug!(kind = command.kind_name(), "no strategy could deliver command");
        false
    }
}
