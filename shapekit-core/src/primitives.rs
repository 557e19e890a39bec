use vello::kurbo::{self, BezPath, Rect, RoundedRect};
use vello::kurbo::Shape as _;

use crate::shape::{InsettableShape, Shape};

/// Flattening tolerance when converting primitives to Bézier paths.
/// 0.1 is the kurbo-recommended accuracy for UI rendering.
const PATH_TOLERANCE: f64 = 0.1;

/// Shrink `rect` by the accumulated inset distance.
///
/// Over-insetting collapses the frame to a zero-size rectangle at its
/// center instead of turning it inside out.
fn frame(rect: Rect, inset: f64) -> Rect {
    let frame = rect.inflate(-inset, -inset);
    if frame.width() < 0.0 || frame.height() < 0.0 {
        Rect::from_center_size(frame.center(), (0.0, 0.0))
    } else {
        frame
    }
}

/// A shape filling its entire bounding rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rectangle {
    inset: f64,
}

impl Rectangle {
    /// Create a new rectangle shape.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Shape for Rectangle {
    fn path(&self, rect: Rect) -> BezPath {
        frame(rect, self.inset).to_path(PATH_TOLERANCE)
    }
}

impl InsettableShape for Rectangle {
    type Inset = Rectangle;

    fn inset(&self, amount: f64) -> Rectangle {
        Rectangle {
            inset: self.inset + amount,
        }
    }
}

/// The largest circle inscribed in the bounding rectangle.
///
/// Centered in the rectangle, with a radius of half the shorter side
/// (clamped at zero for degenerate rectangles).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Circle {
    inset: f64,
}

impl Circle {
    /// Create a new circle shape.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Shape for Circle {
    fn path(&self, rect: Rect) -> BezPath {
        let frame = frame(rect, self.inset);
        let radius = (frame.width().min(frame.height()) / 2.0).max(0.0);
        kurbo::Circle::new(frame.center(), radius).to_path(PATH_TOLERANCE)
    }
}

impl InsettableShape for Circle {
    type Inset = Circle;

    fn inset(&self, amount: f64) -> Circle {
        Circle {
            inset: self.inset + amount,
        }
    }
}

/// A rectangle with rounded corners filling its bounding rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoundedRectangle {
    corner_radius: f64,
    inset: f64,
}

impl RoundedRectangle {
    /// Create a new rounded rectangle with the given corner radius.
    ///
    /// Radii larger than half the shorter side of the bounding rectangle
    /// are clamped when the path is produced.
    pub fn new(corner_radius: f64) -> Self {
        Self {
            corner_radius,
            inset: 0.0,
        }
    }
}

impl Shape for RoundedRectangle {
    fn path(&self, rect: Rect) -> BezPath {
        let frame = frame(rect, self.inset);
        RoundedRect::from_rect(frame, self.corner_radius).to_path(PATH_TOLERANCE)
    }
}

impl InsettableShape for RoundedRectangle {
    type Inset = RoundedRectangle;

    fn inset(&self, amount: f64) -> RoundedRectangle {
        RoundedRectangle {
            corner_radius: self.corner_radius,
            inset: self.inset + amount,
        }
    }
}
