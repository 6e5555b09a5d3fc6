//! Directional scoring for D-pad style focus movement.
//!
//! Foreground apps rarely expose a "next widget to the left" relation, so the
//! engine approximates one from geometry alone.  Given the origin element and
//! a set of candidate rectangles, a candidate qualifies when its center lies
//! strictly on the requested side of the origin's center, and the qualifying
//! candidate with the lowest score wins:
//!
//! ```text
//! score = |primary-axis distance| + 3 × |cross-axis distance|
//! ```
//!
//! The primary axis is vertical for up/down and horizontal for left/right.
//! The 3× weight on the cross axis makes a slightly farther element straight
//! ahead beat a closer one off to the side.
//!
//! # Example
//!
//! Origin centered at (50, 50), moving up:
//!
//! | Candidate center | primary | cross | score |
//! |------------------|---------|-------|-------|
//! | (50, 10)         | 40      | 0     | 40    |
//! | (10, 10)         | 40      | 40    | 160   |
//! | (90, 10)         | 40      | 40    | 160   |

use super::geometry::{Direction, Point, Rect};

/// Weight applied to drift along the axis perpendicular to the movement.
pub const CROSS_AXIS_PENALTY: i64 = 3;

/// Scores `candidate` for movement from `origin` in `direction`.
///
/// Returns `None` when the candidate does not lie strictly in that direction.
pub fn directional_score(origin: Point, candidate: Point, direction: Direction) -> Option<i64> {
    if !candidate.lies_toward(origin, direction) {
        return None;
    }
    let dx = (i64::from(candidate.x) - i64::from(origin.x)).abs();
    let dy = (i64::from(candidate.y) - i64::from(origin.y)).abs();
    let (primary, cross) = if direction.is_vertical() { (dy, dx) } else { (dx, dy) };
    Some(primary + CROSS_AXIS_PENALTY * cross)
}

/// Picks the best candidate for moving from `origin` in `direction`.
///
/// Candidates whose center coincides with the origin's center are treated as
/// the origin itself and skipped.  On equal scores the earliest candidate (in
/// tree order) wins.  Returns the index into `candidates`.
pub fn best_candidate(origin: Rect, direction: Direction, candidates: &[Rect]) -> Option<usize> {
    let origin_center = origin.center();
    let mut best: Option<(usize, i64)> = None;

    for (index, rect) in candidates.iter().enumerate() {
        let center = rect.center();
        if center == origin_center {
            continue;
        }
        let Some(score) = directional_score(origin_center, center, direction) else {
            continue;
        };
        if best.map_or(true, |(_, best_score)| score < best_score) {
            best = Some((index, score));
        }
    }

    best.map(|(index, _)| index)
}
