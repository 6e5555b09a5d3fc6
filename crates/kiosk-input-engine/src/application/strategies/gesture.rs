//! GestureSynthesizer: synthetic touch strokes for screens with nothing to
//! address.
//!
//! Used by the spatial navigator as its last resort: a tap at the display
//! center when Select finds no focused element, and a short swipe when a
//! directional move finds neither a candidate nor a scrollable container.
//!
//! Playback is fire-and-forget.  The host reports whether it *accepted* the
//! gesture, not whether the app reacted to it.

use kiosk_input_core::{CapabilityLevel, Direction, Point};
use tracing::{debug, warn};

use crate::application::host::{AccessibilityHost, GestureStroke};

/// Stroke timing and swipe length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTiming {
    pub tap_duration_ms: u64,
    pub swipe_duration_ms: u64,
    /// Swipe length as a fraction of the display dimension along the move.
    pub swipe_fraction: f32,
}

impl Default for GestureTiming {
    fn default() -> Self {
        Self {
            tap_duration_ms: 50,
            swipe_duration_ms: 250,
            swipe_fraction: 0.25,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GestureSynthesizer {
    timing: GestureTiming,
}

impl GestureSynthesizer {
    pub fn new(timing: GestureTiming) -> Self {
        Self { timing }
    }

    /// Taps the center of the display.
    pub fn tap_center(&self, host: &dyn AccessibilityHost) -> bool {
        let center = host.display_size().center();
        self.play(
            host,
            GestureStroke {
                from: center,
                to: center,
                start_ms: 0,
                duration_ms: self.timing.tap_duration_ms,
            },
        )
    }

    /// Swipes from the display center so the content moves toward
    /// `direction`.
    ///
    /// The finger travels opposite to the direction of travel: revealing
    /// content above means dragging the page down.
    pub fn swipe(&self, host: &dyn AccessibilityHost, direction: Direction) -> bool {
        let display = host.display_size();
        let center = display.center();
        let span = if direction.is_vertical() {
            display.height
        } else {
            display.width
        };
        let distance = (span as f32 * self.timing.swipe_fraction) as i32;

        let to = match direction {
            Direction::Up => Point::new(center.x, center.y + distance),
            Direction::Down => Point::new(center.x, center.y - distance),
            Direction::Left => Point::new(center.x + distance, center.y),
            Direction::Right => Point::new(center.x - distance, center.y),
        };

        self.play(
            host,
            GestureStroke {
                from: center,
                to,
                start_ms: 0,
                duration_ms: self.timing.swipe_duration_ms,
            },
        )
    }

    fn play(&self, host: &dyn AccessibilityHost, stroke: GestureStroke) -> bool {
        let level = host.capability_level();
        if !level.supports(CapabilityLevel::GESTURES) {
            debug!(%level, "gesture playback not available");
            return false;
        }
        match host.dispatch_gesture(&stroke) {
            Ok(accepted) => {
                debug!(?stroke, accepted, "gesture dispatched");
                accepted
            }
            Err(e) => {
                warn!(error = %e, "gesture dispatch failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::host::simulated::SimulatedHost;
    use kiosk_input_core::DisplaySize;

    fn host() -> SimulatedHost {
        SimulatedHost::new().with_display(DisplaySize::new(1000, 800))
    }

    #[test]
    fn test_tap_is_a_stationary_stroke_at_center() {
        // Arrange
        let host = host();

        // Act
        let ok = GestureSynthesizer::default().tap_center(&host);

        // Assert
        assert!(ok);
        let strokes = host.gestures();
        assert_eq!(strokes.len(), 1);
        assert!(strokes[0].is_tap());
        assert_eq!(strokes[0].from, Point::new(500, 400));
        assert_eq!(strokes[0].duration_ms, 50);
    }

    #[test]
    fn test_swipe_distances_are_a_quarter_of_the_axis() {
        let host = host();
        let synth = GestureSynthesizer::default();

        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert!(synth.swipe(&host, direction));
        }

        let ends: Vec<Point> = host.gestures().iter().map(|s| s.to).collect();
        assert_eq!(
            ends,
            vec![
                Point::new(500, 600),
                Point::new(500, 200),
                Point::new(750, 400),
                Point::new(250, 400),
            ]
        );
        assert!(host.gestures().iter().all(|s| !s.is_tap() && s.duration_ms == 250));
    }

    #[test]
    fn test_below_gesture_floor_fails_without_dispatch() {
        let host = host().with_level(23);

        assert!(!GestureSynthesizer::default().tap_center(&host));
        assert!(host.gestures().is_empty());
    }

    #[test]
    fn test_declined_gesture_reports_false() {
        let host = host();
        host.set_gestures_accepted(false);

        assert!(!GestureSynthesizer::default().swipe(&host, Direction::Down));
    }

    #[test]
    fn test_custom_timing_is_used() {
        let host = host();
        let synth = GestureSynthesizer::new(GestureTiming {
            tap_duration_ms: 80,
            swipe_duration_ms: 400,
            swipe_fraction: 0.5,
        });

        synth.swipe(&host, Direction::Right);

        let stroke = host.gestures()[0];
        assert_eq!(stroke.to, Point::new(0, 400));
        assert_eq!(stroke.duration_ms, 400);
    }
}
