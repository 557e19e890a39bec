use vello::kurbo::{BezPath, Rect};

use crate::shape::{InsettableShape, Shape};

/// The shape that draws nothing.
///
/// Stands in for the untaken branch of an else-less conditional, so that
/// "drew something" and "drew nothing" share one type. Its path is the
/// canonical empty path for every rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyShape;

impl EmptyShape {
    /// Create a new empty shape.
    pub fn new() -> Self {
        Self
    }
}

impl Shape for EmptyShape {
    fn path(&self, _rect: Rect) -> BezPath {
        BezPath::new()
    }
}

impl InsettableShape for EmptyShape {
    type Inset = EmptyShape;

    // An empty region inset by any amount is still empty.
    fn inset(&self, _amount: f64) -> EmptyShape {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_empty_for_any_rect() {
        let empty = EmptyShape::new();

        assert_eq!(empty.path(Rect::new(0.0, 0.0, 30.0, 30.0)), BezPath::new());
        assert_eq!(empty.path(Rect::new(-5.0, 10.0, 200.0, 90.0)), BezPath::new());
        assert_eq!(empty.path(Rect::ZERO), BezPath::new());
    }

    #[test]
    fn test_inset_is_a_fixed_point() {
        let rect = Rect::new(0.0, 0.0, 30.0, 30.0);
        let empty = EmptyShape::new();

        assert_eq!(empty.inset(5.0), empty);
        assert_eq!(empty.inset(5.0).path(rect), empty.path(rect));
        assert_eq!(empty.inset(-120.0).inset(3.5).path(rect), empty.path(rect));
    }
}
