//! SpatialNavigator: D-pad movement and Select for apps that ignore keys.
//!
//! # Directional moves (for beginners)
//!
//! A TV remote only has four arrows.  Many apps never react to arrow keys, but
//! every app exposes its on-screen elements through the accessibility tree.
//! To move "up" the navigator:
//!
//! 1. Takes the input-focused element as the origin.
//! 2. Collects every visible focusable or clickable element.
//! 3. Keeps those whose center lies strictly above the origin's center.
//! 4. Picks the lowest score: vertical distance plus three times the
//!    horizontal drift (see `kiosk_input_core::domain::spatial`).
//! 5. Moves focus there.
//!
//! When nothing qualifies the screen is probably a list that needs scrolling,
//! so the first visible scrollable container is scrolled instead.  If there is
//! not even that, or the container declines to scroll, a short swipe is
//! played.  Without an active window nothing is attempted.
//!
//! # Select
//!
//! Select (`DPAD_CENTER` / `ENTER`) clicks the focused element, or its
//! nearest clickable ancestor.  A focused text field is left alone so Enter
//! can fall through to text entry.  With nothing focused at all, the center
//! of the screen is tapped.

use kiosk_input_core::domain::spatial::best_candidate;
use kiosk_input_core::{Command, Direction, FocusKind, NodeAction, Rect};
use tracing::{debug, warn};

use super::gesture::GestureSynthesizer;
use crate::application::host::{AccessibilityHost, HostError};
use crate::application::strategy::InjectionStrategy;
use crate::application::ui_tree::{UiElement, UiTree};

#[derive(Debug, Clone, Copy, Default)]
pub struct SpatialNavigator {
    gestures: GestureSynthesizer,
}

impl SpatialNavigator {
    pub fn new(gestures: GestureSynthesizer) -> Self {
        Self { gestures }
    }

    /// Activates the focused element.
    pub fn select(&self, host: &dyn AccessibilityHost) -> Result<bool, HostError> {
        let Some(tree) = UiTree::active(host)? else {
            debug!("no active window");
            return Ok(false);
        };

        let Some((kind, focused)) = tree.resolve_focus()? else {
            drop(tree);
            debug!("nothing focused; tapping center");
            return Ok(self.gestures.tap_center(host));
        };

        if focused.info()?.flags.editable() {
            debug!(?kind, "focused element is editable; leaving Select to text entry");
            return Ok(false);
        }

        Self::click_nearest_clickable(focused)
    }

    /// Clicks `element` or its closest clickable ancestor.
    fn click_nearest_clickable(element: UiElement<'_>) -> Result<bool, HostError> {
        let mut current = element;
        loop {
            let info = current.info()?;
            if info.flags.clickable() {
                debug!(class = ?info.class_name, "clicking");
                return current.perform(&NodeAction::Click);
            }
            match current.parent()? {
                Some(parent) => current = parent,
                None => {
                    debug!("no clickable ancestor");
                    return Ok(false);
                }
            }
        }
    }

    /// Moves focus one step in `direction`.
    pub fn move_focus(
        &self,
        host: &dyn AccessibilityHost,
        direction: Direction,
    ) -> Result<bool, HostError> {
        let Some(tree) = UiTree::active(host)? else {
            debug!("no active window");
            return Ok(false);
        };

        let origin = match tree.find_focus(FocusKind::Input)? {
            Some(element) => Some(element.info()?.bounds),
            None => None,
        };
        let snapshot = tree.into_snapshot();

        if let Some(origin) = origin {
            let candidates = snapshot.interactive_candidates();
            let bounds: Vec<Rect> = candidates
                .iter()
                .map(|&index| snapshot.node(index).info.bounds)
                .collect();
            if let Some(best) = best_candidate(origin, direction, &bounds) {
                let target = snapshot.node(candidates[best]);
                debug!(
                    ?direction,
                    bounds = ?bounds[best],
                    class = ?target.info.class_name,
                    "moving focus"
                );
                return Self::focus(&target.element);
            }
        } else {
            debug!("no input focus; skipping candidate search");
        }

        if let Some(index) = snapshot.first_scrollable() {
            let action = if direction.is_backward() {
                NodeAction::ScrollBackward
            } else {
                NodeAction::ScrollForward
            };
            debug!(?direction, ?action, "no candidate; scrolling");
            if snapshot.node(index).element.perform(&action)? {
                return Ok(true);
            }
            // Declined at its scroll limit; fall through to the swipe.
            debug!(?direction, "scroll declined");
        }
        drop(snapshot);

        debug!(?direction, "swiping");
        Ok(self.gestures.swipe(host, direction))
    }

    fn focus(target: &UiElement<'_>) -> Result<bool, HostError> {
        if target.perform(&NodeAction::Focus)? {
            return Ok(true);
        }
        target.perform(&NodeAction::AccessibilityFocus)
    }
}

impl InjectionStrategy for SpatialNavigator {
    fn name(&self) -> &'static str {
        "spatial_navigator"
    }

    fn try_inject(&self, host: &dyn AccessibilityHost, command: &Command) -> Option<bool> {
        let Command::KeyPress { code, modifiers } = command else {
            return None;
        };
        if !modifiers.is_empty() {
            return None;
        }

        let result = if code.is_select() {
            self.select(host)
        } else {
            self.move_focus(host, code.direction()?)
        };

        match result {
            Ok(delivered) => Some(delivered),
            Err(e) => {
                warn!(%code, error = %e, "spatial navigation failed");
                Some(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::host::simulated::{NodeId, NodeSpec, SimulatedHost};
    use kiosk_input_core::{KeyCode, NodeFlags, Point};

    fn visible(bits: u8) -> NodeFlags {
        NodeFlags(bits | NodeFlags::VISIBLE)
    }

    fn button_at(x: i32, y: i32) -> NodeSpec {
        NodeSpec::new(
            Rect::centered_at(Point::new(x, y), 10, 10),
            visible(NodeFlags::FOCUSABLE | NodeFlags::CLICKABLE),
        )
    }

    fn screen() -> (SimulatedHost, NodeId) {
        let host = SimulatedHost::new();
        let root = host.add_root(NodeSpec::new(Rect::new(0, 0, 100, 100), visible(0)));
        (host, root)
    }

    fn assert_no_leaks(host: &SimulatedHost) {
        assert_eq!(host.outstanding_handles(), 0, "handles leaked");
        assert_eq!(host.double_releases(), 0, "handles released twice");
    }

    // ── Select ──────────────────────────────────────────────────────────────

    #[test]
    fn test_select_clicks_focused_clickable_leaf() {
        // Arrange
        let (host, root) = screen();
        let button = host.add_child(root, button_at(50, 50));
        host.set_input_focus(Some(button));

        // Act
        let result = SpatialNavigator::default().try_inject(&host, &Command::key(KeyCode::DPAD_CENTER));

        // Assert
        assert_eq!(result, Some(true));
        assert_eq!(host.node_actions(), vec![(button, NodeAction::Click)]);
        assert_no_leaks(&host);
    }

    #[test]
    fn test_select_never_clicks_editable_field() {
        let (host, root) = screen();
        let field = host.add_child(
            root,
            NodeSpec::new(
                Rect::new(0, 0, 100, 20),
                visible(NodeFlags::FOCUSABLE | NodeFlags::CLICKABLE | NodeFlags::EDITABLE),
            ),
        );
        host.set_input_focus(Some(field));

        for code in [KeyCode::DPAD_CENTER, KeyCode::ENTER] {
            let result = SpatialNavigator::default().try_inject(&host, &Command::key(code));
            assert_eq!(result, Some(false));
        }
        assert!(host.node_actions().is_empty());
        assert_no_leaks(&host);
    }

    #[test]
    fn test_select_walks_up_to_clickable_ancestor() {
        let (host, root) = screen();
        let card = host.add_child(
            root,
            NodeSpec::new(Rect::new(0, 0, 50, 50), visible(NodeFlags::CLICKABLE)),
        );
        let label = host.add_child(card, NodeSpec::new(Rect::new(0, 0, 50, 10), visible(0)));
        host.set_accessibility_focus(Some(label));

        let result = SpatialNavigator::default().try_inject(&host, &Command::key(KeyCode::ENTER));

        assert_eq!(result, Some(true));
        assert_eq!(host.node_actions(), vec![(card, NodeAction::Click)]);
        assert_no_leaks(&host);
    }

    #[test]
    fn test_select_without_clickable_ancestor_fails() {
        let (host, root) = screen();
        let label = host.add_child(root, NodeSpec::new(Rect::new(0, 0, 50, 10), visible(0)));
        host.set_input_focus(Some(label));

        let result = SpatialNavigator::default().try_inject(&host, &Command::key(KeyCode::DPAD_CENTER));

        assert_eq!(result, Some(false));
        assert!(host.gestures().is_empty());
        assert_no_leaks(&host);
    }

    #[test]
    fn test_select_with_nothing_focused_taps_center() {
        let (host, _root) = screen();

        let result = SpatialNavigator::default().try_inject(&host, &Command::key(KeyCode::DPAD_CENTER));

        assert_eq!(result, Some(true));
        let strokes = host.gestures();
        assert_eq!(strokes.len(), 1);
        assert!(strokes[0].is_tap());
        assert_no_leaks(&host);
    }

    #[test]
    fn test_no_active_window_attempts_nothing() {
        // Arrange: an app transition leaves no window to act on
        let (host, root) = screen();
        host.set_input_focus(Some(host.add_child(root, button_at(50, 50))));
        host.clear_window();

        // Act
        let select = SpatialNavigator::default().try_inject(&host, &Command::key(KeyCode::DPAD_CENTER));
        let up = SpatialNavigator::default().try_inject(&host, &Command::key(KeyCode::DPAD_UP));

        // Assert
        assert_eq!(select, Some(false));
        assert_eq!(up, Some(false));
        assert!(host.gestures().is_empty());
        assert!(host.node_actions().is_empty());
        assert_no_leaks(&host);
    }

    // ── Directional moves ───────────────────────────────────────────────────

    #[test]
    fn test_up_picks_straight_ahead_candidate() {
        // Arrange
        let (host, root) = screen();
        let origin = host.add_child(root, button_at(50, 50));
        host.add_child(root, button_at(10, 10));
        let ahead = host.add_child(root, button_at(50, 10));
        host.add_child(root, button_at(90, 10));
        host.set_input_focus(Some(origin));

        // Act
        let result = SpatialNavigator::default().try_inject(&host, &Command::key(KeyCode::DPAD_UP));

        // Assert
        assert_eq!(result, Some(true));
        assert_eq!(host.node_actions(), vec![(ahead, NodeAction::Focus)]);
        assert_eq!(host.input_focus(), Some(ahead));
        assert_no_leaks(&host);
    }

    #[test]
    fn test_rejected_focus_falls_back_to_accessibility_focus() {
        let (host, root) = screen();
        let origin = host.add_child(root, button_at(50, 50));
        let target = host.add_child(
            root,
            NodeSpec::new(
                Rect::centered_at(Point::new(90, 50), 10, 10),
                visible(NodeFlags::CLICKABLE),
            ),
        );
        host.set_input_focus(Some(origin));

        let result = SpatialNavigator::default().try_inject(&host, &Command::key(KeyCode::DPAD_RIGHT));

        assert_eq!(result, Some(true));
        assert_eq!(
            host.node_actions(),
            vec![(target, NodeAction::Focus), (target, NodeAction::AccessibilityFocus)]
        );
        assert_eq!(host.accessibility_focus(), Some(target));
    }

    #[test]
    fn test_no_candidate_scrolls_instead_of_gesturing() {
        let (host, root) = screen();
        let list = host.add_child(
            root,
            NodeSpec::new(Rect::new(0, 0, 100, 100), visible(NodeFlags::SCROLLABLE)),
        );
        let only = host.add_child(list, button_at(50, 50));
        host.set_input_focus(Some(only));

        let down = SpatialNavigator::default().try_inject(&host, &Command::key(KeyCode::DPAD_DOWN));
        let up = SpatialNavigator::default().try_inject(&host, &Command::key(KeyCode::DPAD_UP));

        assert_eq!(down, Some(true));
        assert_eq!(up, Some(true));
        assert_eq!(
            host.node_actions(),
            vec![(list, NodeAction::ScrollForward), (list, NodeAction::ScrollBackward)]
        );
        assert!(host.gestures().is_empty());
        assert_no_leaks(&host);
    }

    #[test]
    fn test_no_candidate_and_nothing_scrollable_swipes() {
        let (host, root) = screen();
        let only = host.add_child(root, button_at(50, 50));
        host.set_input_focus(Some(only));

        let result = SpatialNavigator::default().try_inject(&host, &Command::key(KeyCode::DPAD_LEFT));

        assert_eq!(result, Some(true));
        let strokes = host.gestures();
        assert_eq!(strokes.len(), 1);
        assert!(!strokes[0].is_tap());
        assert_no_leaks(&host);
    }

    #[test]
    fn test_list_at_scroll_limit_falls_through_to_swipe() {
        let (host, root) = screen();
        let list = host.add_child(
            root,
            NodeSpec::new(Rect::new(0, 0, 100, 100), visible(NodeFlags::SCROLLABLE)),
        );
        let only = host.add_child(list, button_at(50, 50));
        host.set_input_focus(Some(only));
        host.mark_scroll_limit(list);

        let result = SpatialNavigator::default().try_inject(&host, &Command::key(KeyCode::DPAD_DOWN));

        assert_eq!(result, Some(true));
        assert_eq!(host.node_actions(), vec![(list, NodeAction::ScrollForward)]);
        let strokes = host.gestures();
        assert_eq!(strokes.len(), 1);
        assert!(!strokes[0].is_tap());
        assert_no_leaks(&host);
    }

    #[test]
    fn test_no_input_focus_goes_straight_to_scroll() {
        let (host, root) = screen();
        host.add_child(root, button_at(50, 10));
        let list = host.add_child(
            root,
            NodeSpec::new(Rect::new(0, 50, 100, 100), visible(NodeFlags::SCROLLABLE)),
        );

        let result = SpatialNavigator::default().try_inject(&host, &Command::key(KeyCode::DPAD_UP));

        assert_eq!(result, Some(true));
        assert_eq!(host.node_actions(), vec![(list, NodeAction::ScrollBackward)]);
    }

    #[test]
    fn test_stale_candidate_is_skipped_and_released() {
        let (host, root) = screen();
        let origin = host.add_child(root, button_at(50, 50));
        let stale = host.add_child(root, button_at(50, 40));
        let farther = host.add_child(root, button_at(50, 10));
        host.mark_stale(stale);
        host.set_input_focus(Some(origin));

        let result = SpatialNavigator::default().try_inject(&host, &Command::key(KeyCode::DPAD_UP));

        assert_eq!(result, Some(true));
        assert_eq!(host.node_actions(), vec![(farther, NodeAction::Focus)]);
        assert_no_leaks(&host);
    }

    #[test]
    fn test_stale_focus_reports_failure_without_leaking() {
        let (host, root) = screen();
        let origin = host.add_child(root, button_at(50, 50));
        host.set_input_focus(Some(origin));
        host.mark_stale(origin);

        let result = SpatialNavigator::default().try_inject(&host, &Command::key(KeyCode::DPAD_UP));

        assert_eq!(result, Some(false));
        assert_no_leaks(&host);
    }

    #[test]
    fn test_other_keys_and_modified_keys_are_not_claimed() {
        let (host, _root) = screen();
        let nav = SpatialNavigator::default();

        assert_eq!(nav.try_inject(&host, &Command::key(KeyCode::A)), None);
        assert_eq!(nav.try_inject(&host, &Command::text("x")), None);
        let shifted_up = Command::key_with(
            KeyCode::DPAD_UP,
            kiosk_input_core::Modifiers::new(true, false, false),
        );
        assert_eq!(nav.try_inject(&host, &shifted_up), None);
    }
}
