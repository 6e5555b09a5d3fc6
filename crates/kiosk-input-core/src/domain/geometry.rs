//! Screen geometry: points, rectangles, and movement directions.
//!
//! All coordinates are integer pixels in screen space, origin at the top-left
//! corner, `y` growing downward.  Rectangles use exclusive right/bottom edges,
//! the same convention the host reports element bounds in.

use serde::{Deserialize, Serialize};

/// A direction of D-pad movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns `true` for up/down, whose primary axis is vertical.
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Returns `true` for up/left, which scroll content backward.
    pub fn is_backward(self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }
}

/// A pixel position on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `true` if `self` lies strictly on the `direction` side of `origin`.
    pub fn lies_toward(&self, origin: Point, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.y < origin.y,
            Direction::Down => self.y > origin.y,
            Direction::Left => self.x < origin.x,
            Direction::Right => self.x > origin.x,
        }
    }
}

/// An axis-aligned rectangle in screen space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    /// Exclusive.
    pub right: i32,
    /// Exclusive.
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds a rectangle of the given size centered on `center`.
    pub fn centered_at(center: Point, width: i32, height: i32) -> Self {
        let left = center.x - width / 2;
        let top = center.y - height / 2;
        Self::new(left, top, left + width, top + height)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Returns `true` if the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Center point, rounded toward the top-left like the host's own
    /// `centerX`/`centerY`.
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) >> 1,
            (self.top + self.bottom) >> 1,
        )
    }
}

/// Size of the physical display in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySize {
    pub width: u32,
    pub height: u32,
}

impl DisplaySize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

impl Default for DisplaySize {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}
