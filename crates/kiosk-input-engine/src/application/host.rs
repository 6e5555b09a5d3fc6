//! The OS seam: everything the engine needs from the assistive-technology host.
//!
//! The engine never talks to the operating system directly.  It goes through
//! [`AccessibilityHost`], implemented in the infrastructure layer for each
//! platform (and by [`SimulatedHost`] for tests and the replay console).
//!
//! # Node handles
//!
//! UI elements are addressed through opaque [`RawNode`] handles.  Every handle
//! the host returns (from [`AccessibilityHost::active_root`],
//! [`AccessibilityHost::find_focus`], [`AccessibilityHost::child`] or
//! [`AccessibilityHost::parent`]) is an *acquisition* that must be given back
//! with exactly one [`AccessibilityHost::release`] call.  The host bounds how
//! many snapshots may be outstanding at once; a leak degrades the whole
//! device, not just one app.  Application code never handles `RawNode`
//! directly: it wraps every acquisition in a
//! [`UiElement`](super::ui_tree::UiElement) guard that releases on drop.
//!
//! A handle can go stale while it is held (the element was removed from the
//! screen).  Calls on a stale handle return [`HostError::StaleNode`]; the
//! handle must still be released.
//!
//! [`SimulatedHost`]: crate::infrastructure::host::simulated::SimulatedHost

use std::sync::Arc;

use kiosk_input_core::{
    CapabilityLevel, DisplaySize, FocusKind, GlobalAction, KeyCode, Modifiers, NodeAction,
    NodeInfo, Point,
};
use thiserror::Error;

/// Error type for host calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The element behind a handle no longer exists.
    #[error("node handle is stale")]
    StaleNode,
    /// The OS call itself failed.
    #[error("host call failed: {0}")]
    CallFailed(String),
    /// The host does not implement this operation.
    #[error("operation not supported by this host")]
    Unsupported,
}

/// An opaque, acquired handle to one UI element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawNode(pub u64);

/// Press or release half of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventAction {
    Down,
    Up,
}

/// One key event sent over the direct input channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub action: KeyEventAction,
    pub code: KeyCode,
    /// Meta state, forwarded untouched.
    pub meta: Modifiers,
}

/// A single straight-line touch stroke.
///
/// A tap is a stroke whose `from` and `to` are the same point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureStroke {
    pub from: Point,
    pub to: Point,
    /// Delay before the finger touches down.
    pub start_ms: u64,
    /// Time from touch-down to lift-off.
    pub duration_ms: u64,
}

impl GestureStroke {
    /// Returns `true` if the stroke does not move.
    pub fn is_tap(&self) -> bool {
        self.from == self.to
    }
}

/// The OS's cooperative low-level input channel.
///
/// Available only while the engine is the active input method and a field
/// has focus; events sent here reach the target exactly like hardware input.
#[cfg_attr(test, mockall::automock)]
pub trait InputChannel: Send + Sync {
    /// Delivers one key event to the focused target.
    fn send_key_event(&self, event: KeyEvent) -> Result<(), HostError>;

    /// Commits literal text at the cursor of the focused target.
    fn commit_text(&self, text: &str) -> Result<(), HostError>;
}

/// Platform-agnostic assistive-technology host.
///
/// Implementations must be callable from the engine's UI thread; the engine
/// never calls them concurrently from several threads for the same session.
pub trait AccessibilityHost: Send + Sync {
    /// The platform API level.
    fn capability_level(&self) -> CapabilityLevel;

    /// Physical display size, used to place synthetic gestures.
    fn display_size(&self) -> DisplaySize;

    /// Asks the OS to let this engine act as an input method.
    fn enable_input_method(&self) -> Result<(), HostError>;

    /// Issues a system-global action.  `Ok(false)` means the OS declined.
    fn perform_global_action(&self, action: GlobalAction) -> Result<bool, HostError>;

    /// Returns the direct input channel, if one can be obtained right now.
    fn input_channel(&self) -> Result<Option<Arc<dyn InputChannel>>, HostError>;

    /// Queues a gesture for playback.  `Ok(true)` means "accepted", not
    /// "finished".
    fn dispatch_gesture(&self, stroke: &GestureStroke) -> Result<bool, HostError>;

    /// Acquires the root element of the active window.
    fn active_root(&self) -> Result<Option<RawNode>, HostError>;

    /// Acquires the element holding `kind` focus within `root`'s window.
    fn find_focus(&self, root: RawNode, kind: FocusKind) -> Result<Option<RawNode>, HostError>;

    /// Reads the current attributes of `node`.
    fn node_info(&self, node: RawNode) -> Result<NodeInfo, HostError>;

    /// Acquires the `index`-th child of `node`.
    fn child(&self, node: RawNode, index: usize) -> Result<Option<RawNode>, HostError>;

    /// Acquires the parent of `node`.
    fn parent(&self, node: RawNode) -> Result<Option<RawNode>, HostError>;

    /// Performs `action` on `node`.  `Ok(false)` means the element refused.
    fn perform_node_action(&self, node: RawNode, action: &NodeAction) -> Result<bool, HostError>;

    /// Gives back one acquisition of `node`.
    fn release(&self, node: RawNode);
}
