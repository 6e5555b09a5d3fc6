//! In-memory accessibility host for tests and the replay console.
//!
//! # Why a simulated host?
//!
//! A real host reads another app's live UI tree and injects events into it.
//! That needs a device, changes the screen under test, and cannot be observed
//! from Rust test code.
//!
//! `SimulatedHost` keeps a small UI tree in memory and records every side
//! effect the engine produces: global actions, node actions, gestures, and
//! direct-channel events.  Tests assert on those records instead of on a
//! screen.
//!
//! # Handle accounting
//!
//! Every acquisition gets a fresh handle id, so the host can count exactly how
//! many handles are still outstanding and how many were released twice.  A
//! correct engine leaves both counters at zero after each command.
//!
//! # Fault injection
//!
//! - [`SimulatedHost::mark_stale`] makes every call on a node's handles fail
//!   with [`HostError::StaleNode`], like an element removed mid-walk.
//! - [`SimulatedHost::mark_scroll_limit`] makes a list decline scrolling.
//! - [`SimulatedHost::set_global_actions_accepted`] and
//!   [`SimulatedHost::set_gestures_accepted`] make the OS decline.
//! - [`SimulatedHost::set_input_channel_error`] makes channel lookup fail.
//!
//! # Fixtures
//!
//! A tree can also be loaded from JSON (see [`UiFixture`]):
//!
//! ```json
//! {
//!   "capability_level": 33,
//!   "input_focus": "search",
//!   "root": {
//!     "bounds": { "left": 0, "top": 0, "right": 1920, "bottom": 1080 },
//!     "children": [
//!       { "id": "search", "bounds": { "left": 0, "top": 0, "right": 800, "bottom": 80 },
//!         "flags": ["focusable", "editable"], "text": "" }
//!     ]
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use kiosk_input_core::{
    CapabilityLevel, DisplaySize, FocusKind, GlobalAction, NodeAction, NodeFlags, NodeInfo, Rect,
};
use serde::Deserialize;
use thiserror::Error;

use crate::application::host::{
    AccessibilityHost, GestureStroke, HostError, InputChannel, KeyEvent, RawNode,
};

/// Index of a node inside a [`SimulatedHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Attributes of one simulated node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeSpec {
    pub bounds: Rect,
    pub flags: NodeFlags,
    pub text: Option<String>,
    pub class_name: Option<String>,
}

impl NodeSpec {
    pub fn new(bounds: Rect, flags: NodeFlags) -> Self {
        Self {
            bounds,
            flags,
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

#[derive(Debug)]
struct SimNode {
    spec: NodeSpec,
    name: Option<String>,
    parent: Option<usize>,
    children: Vec<usize>,
    stale: bool,
    at_scroll_limit: bool,
}

#[derive(Debug)]
struct SimState {
    nodes: Vec<SimNode>,
    root: Option<usize>,
    input_focus: Option<usize>,
    accessibility_focus: Option<usize>,

    level: CapabilityLevel,
    display: DisplaySize,
    channel: Option<Arc<RecordingChannel>>,
    channel_error: bool,
    global_actions_accepted: bool,
    gestures_accepted: bool,
    ime_enable_error: bool,
    ime_enable_calls: usize,

    live_handles: HashMap<u64, usize>,
    next_handle: u64,
    acquisitions: usize,
    double_releases: usize,

    global_actions: Vec<GlobalAction>,
    node_actions: Vec<(NodeId, NodeAction)>,
    gestures: Vec<GestureStroke>,
}

impl Default for SimState {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            input_focus: None,
            accessibility_focus: None,
            level: CapabilityLevel::DIRECT_INPUT,
            display: DisplaySize::default(),
            channel: None,
            channel_error: false,
            global_actions_accepted: true,
            gestures_accepted: true,
            ime_enable_error: false,
            ime_enable_calls: 0,
            live_handles: HashMap::new(),
            next_handle: 1,
            acquisitions: 0,
            double_releases: 0,
            global_actions: Vec::new(),
            node_actions: Vec::new(),
            gestures: Vec::new(),
        }
    }
}

impl SimState {
    fn acquire(&mut self, index: usize) -> RawNode {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.acquisitions += 1;
        self.live_handles.insert(handle, index);
        RawNode(handle)
    }

    /// Resolves a live handle to a node that still exists.
    fn resolve(&self, node: RawNode) -> Result<usize, HostError> {
        let index = *self
            .live_handles
            .get(&node.0)
            .ok_or_else(|| HostError::CallFailed(format!("unknown handle {}", node.0)))?;
        if self.nodes[index].stale {
            return Err(HostError::StaleNode);
        }
        Ok(index)
    }
}

/// Direct input channel that records what it is sent.
#[derive(Debug, Default)]
pub struct RecordingChannel {
    key_events: Mutex<Vec<KeyEvent>>,
    texts: Mutex<Vec<String>>,
    /// When `true`, every call fails with [`HostError::CallFailed`].
    pub should_fail: bool,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn key_events(&self) -> Vec<KeyEvent> {
        lock(&self.key_events).clone()
    }

    pub fn texts(&self) -> Vec<String> {
        lock(&self.texts).clone()
    }

    pub fn clear(&self) {
        lock(&self.key_events).clear();
        lock(&self.texts).clear();
    }
}

impl InputChannel for RecordingChannel {
    fn send_key_event(&self, event: KeyEvent) -> Result<(), HostError> {
        if self.should_fail {
            return Err(HostError::CallFailed("simulated channel failure".into()));
        }
        lock(&self.key_events).push(event);
        Ok(())
    }

    fn commit_text(&self, text: &str) -> Result<(), HostError> {
        if self.should_fail {
            return Err(HostError::CallFailed("simulated channel failure".into()));
        }
        lock(&self.texts).push(text.to_owned());
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// An accessibility host backed by an in-memory UI tree.
#[derive(Debug, Default)]
pub struct SimulatedHost {
    state: Mutex<SimState>,
}

impl SimulatedHost {
    /// Creates an empty host at the direct-input capability level.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(self, level: u32) -> Self {
        self.state().level = CapabilityLevel(level);
        self
    }

    pub fn with_display(self, display: DisplaySize) -> Self {
        self.state().display = display;
        self
    }

    fn state(&self) -> MutexGuard<'_, SimState> {
        lock(&self.state)
    }

    // ── Tree building ───────────────────────────────────────────────────────

    /// Replaces the active window with a single root node.
    pub fn add_root(&self, spec: NodeSpec) -> NodeId {
        let mut state = self.state();
        let index = state.nodes.len();
        state.nodes.push(SimNode {
            spec,
            name: None,
            parent: None,
            children: Vec::new(),
            stale: false,
            at_scroll_limit: false,
        });
        state.root = Some(index);
        NodeId(index)
    }

    /// Appends a child under `parent`.
    pub fn add_child(&self, parent: NodeId, spec: NodeSpec) -> NodeId {
        let mut state = self.state();
        let index = state.nodes.len();
        state.nodes.push(SimNode {
            spec,
            name: None,
            parent: Some(parent.0),
            children: Vec::new(),
            stale: false,
            at_scroll_limit: false,
        });
        state.nodes[parent.0].children.push(index);
        NodeId(index)
    }

    /// Removes the active window, as during an app transition.
    pub fn clear_window(&self) {
        self.state().root = None;
    }

    pub fn mark_stale(&self, node: NodeId) {
        self.state().nodes[node.0].stale = true;
    }

    /// Makes a scrollable node decline further scrolling in both directions.
    pub fn mark_scroll_limit(&self, node: NodeId) {
        self.state().nodes[node.0].at_scroll_limit = true;
    }

    pub fn set_input_focus(&self, node: Option<NodeId>) {
        self.state().input_focus = node.map(|n| n.0);
    }

    pub fn set_accessibility_focus(&self, node: Option<NodeId>) {
        self.state().accessibility_focus = node.map(|n| n.0);
    }

    /// Makes a direct input channel available and returns it for inspection.
    pub fn attach_input_channel(&self, channel: RecordingChannel) -> Arc<RecordingChannel> {
        let channel = Arc::new(channel);
        self.state().channel = Some(Arc::clone(&channel));
        channel
    }

    /// The attached recording channel, if any.
    pub fn recording_channel(&self) -> Option<Arc<RecordingChannel>> {
        self.state().channel.clone()
    }

    pub fn set_input_channel_error(&self, fail: bool) {
        self.state().channel_error = fail;
    }

    pub fn set_global_actions_accepted(&self, accepted: bool) {
        self.state().global_actions_accepted = accepted;
    }

    pub fn set_gestures_accepted(&self, accepted: bool) {
        self.state().gestures_accepted = accepted;
    }

    pub fn set_ime_enable_error(&self, fail: bool) {
        self.state().ime_enable_error = fail;
    }

    // ── Inspection ──────────────────────────────────────────────────────────

    /// Every node in insertion order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        (0..self.state().nodes.len()).map(NodeId).collect()
    }

    /// Looks up a node by its fixture id.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.state()
            .nodes
            .iter()
            .position(|n| n.name.as_deref() == Some(name))
            .map(NodeId)
    }

    pub fn node_text(&self, node: NodeId) -> Option<String> {
        self.state().nodes[node.0].spec.text.clone()
    }

    pub fn input_focus(&self) -> Option<NodeId> {
        self.state().input_focus.map(NodeId)
    }

    pub fn accessibility_focus(&self) -> Option<NodeId> {
        self.state().accessibility_focus.map(NodeId)
    }

    pub fn global_actions(&self) -> Vec<GlobalAction> {
        self.state().global_actions.clone()
    }

    pub fn node_actions(&self) -> Vec<(NodeId, NodeAction)> {
        self.state().node_actions.clone()
    }

    pub fn gestures(&self) -> Vec<GestureStroke> {
        self.state().gestures.clone()
    }

    pub fn ime_enable_calls(&self) -> usize {
        self.state().ime_enable_calls
    }

    /// Handles acquired and not yet released.
    pub fn outstanding_handles(&self) -> usize {
        self.state().live_handles.len()
    }

    /// Total handles ever acquired.
    pub fn acquisitions(&self) -> usize {
        self.state().acquisitions
    }

    /// Release calls for handles that were not live.
    pub fn double_releases(&self) -> usize {
        self.state().double_releases
    }

    /// Forgets all recorded side effects (the tree and counters stay).
    pub fn clear_records(&self) {
        let mut state = self.state();
        state.global_actions.clear();
        state.node_actions.clear();
        state.gestures.clear();
        if let Some(channel) = &state.channel {
            channel.clear();
        }
    }
}

impl AccessibilityHost for SimulatedHost {
    fn capability_level(&self) -> CapabilityLevel {
        self.state().level
    }

    fn display_size(&self) -> DisplaySize {
        self.state().display
    }

    fn enable_input_method(&self) -> Result<(), HostError> {
        let mut state = self.state();
        state.ime_enable_calls += 1;
        if state.ime_enable_error {
            return Err(HostError::CallFailed("input method refused".into()));
        }
        Ok(())
    }

    fn perform_global_action(&self, action: GlobalAction) -> Result<bool, HostError> {
        let mut state = self.state();
        state.global_actions.push(action);
        Ok(state.global_actions_accepted)
    }

    fn input_channel(&self) -> Result<Option<Arc<dyn InputChannel>>, HostError> {
        let state = self.state();
        if state.channel_error {
            return Err(HostError::CallFailed("input connection lost".into()));
        }
        Ok(state
            .channel
            .as_ref()
            .map(|c| Arc::clone(c) as Arc<dyn InputChannel>))
    }

    fn dispatch_gesture(&self, stroke: &GestureStroke) -> Result<bool, HostError> {
        let mut state = self.state();
        if !state.level.supports(CapabilityLevel::GESTURES) {
            return Err(HostError::Unsupported);
        }
        state.gestures.push(*stroke);
        Ok(state.gestures_accepted)
    }

    fn active_root(&self) -> Result<Option<RawNode>, HostError> {
        let mut state = self.state();
        let root = state.root;
        Ok(root.map(|root| state.acquire(root)))
    }

    fn find_focus(&self, root: RawNode, kind: FocusKind) -> Result<Option<RawNode>, HostError> {
        let mut state = self.state();
        state.resolve(root)?;
        let focused = match kind {
            FocusKind::Input => state.input_focus,
            FocusKind::Accessibility => state.accessibility_focus,
        };
        Ok(focused.map(|index| state.acquire(index)))
    }

    fn node_info(&self, node: RawNode) -> Result<NodeInfo, HostError> {
        let state = self.state();
        let index = state.resolve(node)?;
        let sim = &state.nodes[index];
        Ok(NodeInfo {
            bounds: sim.spec.bounds,
            flags: sim.spec.flags,
            text: sim.spec.text.clone(),
            child_count: sim.children.len(),
            class_name: sim.spec.class_name.clone(),
        })
    }

    fn child(&self, node: RawNode, index: usize) -> Result<Option<RawNode>, HostError> {
        let mut state = self.state();
        let parent = state.resolve(node)?;
        let child = state.nodes[parent].children.get(index).copied();
        Ok(child.map(|c| state.acquire(c)))
    }

    fn parent(&self, node: RawNode) -> Result<Option<RawNode>, HostError> {
        let mut state = self.state();
        let index = state.resolve(node)?;
        let parent = state.nodes[index].parent;
        Ok(parent.map(|p| state.acquire(p)))
    }

    fn perform_node_action(&self, node: RawNode, action: &NodeAction) -> Result<bool, HostError> {
        let mut state = self.state();
        let index = state.resolve(node)?;
        state.node_actions.push((NodeId(index), action.clone()));

        let flags = state.nodes[index].spec.flags;
        let accepted = match action {
            NodeAction::Click => flags.clickable(),
            NodeAction::Focus => {
                if flags.focusable() {
                    state.input_focus = Some(index);
                }
                flags.focusable()
            }
            NodeAction::AccessibilityFocus => {
                if flags.visible() {
                    state.accessibility_focus = Some(index);
                }
                flags.visible()
            }
            NodeAction::ScrollForward | NodeAction::ScrollBackward => {
                flags.scrollable() && !state.nodes[index].at_scroll_limit
            }
            NodeAction::SetText(text) => {
                if flags.editable() {
                    state.nodes[index].spec.text = Some(text.clone());
                }
                flags.editable()
            }
        };
        Ok(accepted)
    }

    fn release(&self, node: RawNode) {
        let mut state = self.state();
        if state.live_handles.remove(&node.0).is_none() {
            state.double_releases += 1;
        }
    }
}

// ── Fixtures ────────────────────────────────────────────────────────────────

/// Error type for loading UI-tree fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid fixture JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("focus target '{0}' does not name any node")]
    UnknownNode(String),
}

/// Element flag names accepted in fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureFlag {
    Focusable,
    Clickable,
    Editable,
    Scrollable,
}

impl FixtureFlag {
    fn bits(self) -> u8 {
        match self {
            FixtureFlag::Focusable => NodeFlags::FOCUSABLE,
            FixtureFlag::Clickable => NodeFlags::CLICKABLE,
            FixtureFlag::Editable => NodeFlags::EDITABLE,
            FixtureFlag::Scrollable => NodeFlags::SCROLLABLE,
        }
    }
}

/// One node of a fixture tree.  Nodes are visible unless `hidden` is set.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureNode {
    #[serde(default)]
    pub id: Option<String>,
    pub bounds: Rect,
    #[serde(default)]
    pub flags: Vec<FixtureFlag>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub children: Vec<FixtureNode>,
}

impl FixtureNode {
    fn spec(&self) -> NodeSpec {
        let mut flags = self
            .flags
            .iter()
            .fold(NodeFlags::default(), |acc, f| acc.with(f.bits()));
        if !self.hidden {
            flags = flags.with(NodeFlags::VISIBLE);
        }
        NodeSpec {
            bounds: self.bounds,
            flags,
            text: self.text.clone(),
            class_name: self.class_name.clone(),
        }
    }
}

fn default_fixture_level() -> u32 {
    CapabilityLevel::DIRECT_INPUT.0
}

/// A whole simulated screen: device properties plus the active window.
#[derive(Debug, Clone, Deserialize)]
pub struct UiFixture {
    #[serde(default = "default_fixture_level")]
    pub capability_level: u32,
    #[serde(default)]
    pub display: DisplaySize,
    #[serde(default)]
    pub input_focus: Option<String>,
    #[serde(default)]
    pub accessibility_focus: Option<String>,
    /// Attach a recording direct-input channel.
    #[serde(default)]
    pub direct_input: bool,
    pub root: FixtureNode,
}

impl UiFixture {
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

impl SimulatedHost {
    /// Builds a host from a parsed fixture.
    pub fn from_fixture(fixture: &UiFixture) -> Result<Self, FixtureError> {
        let host = SimulatedHost::new()
            .with_level(fixture.capability_level)
            .with_display(fixture.display);

        let root = host.add_root(fixture.root.spec());
        host.name_node(root, fixture.root.id.clone());
        let mut pending: Vec<(NodeId, &FixtureNode)> = vec![(root, &fixture.root)];
        while let Some((parent, node)) = pending.pop() {
            for child in &node.children {
                let id = host.add_child(parent, child.spec());
                host.name_node(id, child.id.clone());
                pending.push((id, child));
            }
        }

        if let Some(name) = &fixture.input_focus {
            let node = host
                .find(name)
                .ok_or_else(|| FixtureError::UnknownNode(name.clone()))?;
            host.set_input_focus(Some(node));
        }
        if let Some(name) = &fixture.accessibility_focus {
            let node = host
                .find(name)
                .ok_or_else(|| FixtureError::UnknownNode(name.clone()))?;
            host.set_accessibility_focus(Some(node));
        }
        if fixture.direct_input {
            host.attach_input_channel(RecordingChannel::new());
        }
        Ok(host)
    }

    fn name_node(&self, node: NodeId, name: Option<String>) {
        self.state().nodes[node.0].name = name;
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(bits: u8) -> NodeFlags {
        NodeFlags(bits | NodeFlags::VISIBLE)
    }

    #[test]
    fn test_each_acquisition_gets_a_fresh_handle() {
        // Arrange
        let host = SimulatedHost::new();
        host.add_root(NodeSpec::new(Rect::new(0, 0, 10, 10), visible(0)));

        // Act
        let a = host.active_root().unwrap().unwrap();
        let b = host.active_root().unwrap().unwrap();

        // Assert
        assert_ne!(a, b);
        assert_eq!(host.outstanding_handles(), 2);
        host.release(a);
        host.release(b);
        assert_eq!(host.outstanding_handles(), 0);
    }

    #[test]
    fn test_second_release_is_counted() {
        let host = SimulatedHost::new();
        host.add_root(NodeSpec::new(Rect::new(0, 0, 10, 10), visible(0)));
        let root = host.active_root().unwrap().unwrap();

        host.release(root);
        host.release(root);

        assert_eq!(host.double_releases(), 1);
    }

    #[test]
    fn test_stale_node_fails_but_can_be_released() {
        let host = SimulatedHost::new();
        let root = host.add_root(NodeSpec::new(Rect::new(0, 0, 10, 10), visible(0)));
        let raw = host.active_root().unwrap().unwrap();
        host.mark_stale(root);

        assert_eq!(host.node_info(raw), Err(HostError::StaleNode));
        host.release(raw);
        assert_eq!(host.outstanding_handles(), 0);
        assert_eq!(host.double_releases(), 0);
    }

    #[test]
    fn test_set_text_only_changes_editable_nodes() {
        let host = SimulatedHost::new();
        let root = host.add_root(NodeSpec::new(Rect::new(0, 0, 10, 10), visible(0)));
        let field = host.add_child(
            root,
            NodeSpec::new(Rect::new(0, 0, 5, 5), visible(NodeFlags::EDITABLE)).with_text("a"),
        );
        host.set_input_focus(Some(field));
        let raw_root = host.active_root().unwrap().unwrap();
        let raw_field = host.find_focus(raw_root, FocusKind::Input).unwrap().unwrap();

        let ok = host
            .perform_node_action(raw_field, &NodeAction::SetText("ab".into()))
            .unwrap();
        let refused = host
            .perform_node_action(raw_root, &NodeAction::SetText("x".into()))
            .unwrap();

        assert!(ok);
        assert!(!refused);
        assert_eq!(host.node_text(field).as_deref(), Some("ab"));
        assert_eq!(host.node_text(root), None);
        host.release(raw_field);
        host.release(raw_root);
    }

    #[test]
    fn test_gestures_unsupported_below_floor() {
        let host = SimulatedHost::new().with_level(23);
        let stroke = GestureStroke {
            from: kiosk_input_core::Point::new(1, 1),
            to: kiosk_input_core::Point::new(1, 1),
            start_ms: 0,
            duration_ms: 50,
        };

        assert_eq!(host.dispatch_gesture(&stroke), Err(HostError::Unsupported));
        assert!(host.gestures().is_empty());
    }

    #[test]
    fn test_fixture_builds_named_tree_with_focus() {
        // Arrange
        let json = r#"{
            "capability_level": 30,
            "display": { "width": 1280, "height": 720 },
            "input_focus": "search",
            "root": {
                "bounds": { "left": 0, "top": 0, "right": 1280, "bottom": 720 },
                "children": [
                    { "id": "search", "flags": ["focusable", "editable"], "text": "tv",
                      "bounds": { "left": 0, "top": 0, "right": 600, "bottom": 60 } },
                    { "id": "ghost", "hidden": true, "flags": ["clickable"],
                      "bounds": { "left": 0, "top": 100, "right": 600, "bottom": 160 } }
                ]
            }
        }"#;

        // Act
        let fixture = UiFixture::from_json(json).unwrap();
        let host = SimulatedHost::from_fixture(&fixture).unwrap();

        // Assert
        let search = host.find("search").unwrap();
        assert_eq!(host.input_focus(), Some(search));
        assert_eq!(host.node_text(search).as_deref(), Some("tv"));
        assert_eq!(host.capability_level(), CapabilityLevel(30));
        assert_eq!(host.display_size(), DisplaySize::new(1280, 720));
        assert_eq!(host.node_ids().len(), 3);

        let ghost = host.find("ghost").unwrap();
        let state = host.state();
        assert!(!state.nodes[ghost.0].spec.flags.visible());
        assert!(state.nodes[search.0].spec.flags.visible());
    }

    #[test]
    fn test_fixture_with_unknown_focus_target_is_rejected() {
        let json = r#"{
            "input_focus": "missing",
            "root": { "bounds": { "left": 0, "top": 0, "right": 10, "bottom": 10 } }
        }"#;
        let fixture = UiFixture::from_json(json).unwrap();

        let err = SimulatedHost::from_fixture(&fixture).unwrap_err();

        assert!(matches!(err, FixtureError::UnknownNode(name) if name == "missing"));
    }
}
