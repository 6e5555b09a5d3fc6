//! Vocabulary for talking about UI elements and the actions the host can
//! perform on them.
//!
//! These types carry no handles and no OS state; they describe *what* an
//! element is and *what* to do with it.  The engine's host seam pairs them
//! with live handles.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// Boolean attributes of a UI element, packed as a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeFlags(pub u8);

impl NodeFlags {
    pub const FOCUSABLE: u8 = 1 << 0;
    pub const CLICKABLE: u8 = 1 << 1;
    pub const EDITABLE: u8 = 1 << 2;
    pub const SCROLLABLE: u8 = 1 << 3;
    pub const VISIBLE: u8 = 1 << 4;

    pub fn focusable(&self) -> bool {
        self.0 & Self::FOCUSABLE != 0
    }

    pub fn clickable(&self) -> bool {
        self.0 & Self::CLICKABLE != 0
    }

    pub fn editable(&self) -> bool {
        self.0 & Self::EDITABLE != 0
    }

    pub fn scrollable(&self) -> bool {
        self.0 & Self::SCROLLABLE != 0
    }

    pub fn visible(&self) -> bool {
        self.0 & Self::VISIBLE != 0
    }

    /// Returns `true` if the element can take part in spatial navigation.
    pub fn interactive(&self) -> bool {
        self.focusable() || self.clickable()
    }

    /// Returns a copy with the given flag bits set.
    pub fn with(self, bits: u8) -> Self {
        NodeFlags(self.0 | bits)
    }
}

/// A point-in-time description of one UI element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    /// Bounds in screen coordinates.
    pub bounds: Rect,
    pub flags: NodeFlags,
    /// Current text content, `None` when the element has no text.
    pub text: Option<String>,
    pub child_count: usize,
    /// Widget class reported by the host, used only for log lines.
    pub class_name: Option<String>,
}

/// The two independent "currently selected element" notions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusKind {
    /// The element receiving keyboard input.
    Input,
    /// The element highlighted by assistive technology.
    Accessibility,
}

/// Actions the host can perform on a single UI element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeAction {
    Click,
    /// Request input focus.
    Focus,
    /// Request accessibility focus.
    AccessibilityFocus,
    ScrollForward,
    ScrollBackward,
    /// Replace the element's text content.
    SetText(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_report_individual_bits() {
        let flags = NodeFlags::default()
            .with(NodeFlags::CLICKABLE)
            .with(NodeFlags::VISIBLE);
        assert!(flags.clickable());
        assert!(flags.visible());
        assert!(!flags.editable());
        assert!(!flags.scrollable());
    }

    #[test]
    fn test_interactive_is_focusable_or_clickable() {
        assert!(NodeFlags(NodeFlags::FOCUSABLE).interactive());
        assert!(NodeFlags(NodeFlags::CLICKABLE).interactive());
        assert!(!NodeFlags(NodeFlags::EDITABLE | NodeFlags::VISIBLE).interactive());
    }
}
