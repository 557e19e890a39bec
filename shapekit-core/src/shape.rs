use vello::kurbo::{BezPath, Rect};

/// A value that can produce vector geometry for a bounding rectangle.
///
/// Implementations must be pure: the same rectangle always yields the same
/// path, with no side effects and no hidden state. A degenerate rectangle
/// (zero or negative extent) must still produce a valid, possibly empty,
/// path rather than panic.
///
/// The trait is object safe, so heterogeneous shapes can be stored as
/// `Box<dyn Shape>` where static composition is not an option.
pub trait Shape {
    /// Produce the path describing this shape inside `rect`.
    fn path(&self, rect: Rect) -> BezPath;
}

/// A [Shape] that can produce an inset version of itself.
///
/// Insetting is a refinement capability: not every shape supports it, and a
/// shape that does may produce a different concrete type for the result.
pub trait InsettableShape: Shape {
    /// The shape type produced by [inset](InsettableShape::inset).
    type Inset: InsettableShape;

    /// Return a new shape whose geometry is shrunk by `amount` on every side.
    ///
    /// A negative `amount` grows the shape instead. The receiver is left
    /// untouched.
    fn inset(&self, amount: f64) -> Self::Inset;
}

impl<S: Shape + ?Sized> Shape for &S {
    fn path(&self, rect: Rect) -> BezPath {
        (**self).path(rect)
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn path(&self, rect: Rect) -> BezPath {
        (**self).path(rect)
    }
}
