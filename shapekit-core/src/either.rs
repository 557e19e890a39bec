use vello::kurbo::{BezPath, Rect};

use crate::shape::{InsettableShape, Shape};

/// One of two possible shapes, chosen at construction time.
///
/// The two branches of a conditional shape expression rarely share a
/// concrete type; wrapping each in one variant of this union gives the
/// whole expression a single type while only ever realizing the geometry
/// of the branch that was actually taken. Path production dispatches on
/// the tag and delegates unchanged; failures of the payload propagate
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EitherShape<First: Shape, Second: Shape> {
    /// The first (`if`) branch was taken.
    First(First),
    /// The second (`else`) branch was taken.
    Second(Second),
}

impl<First: Shape, Second: Shape> Shape for EitherShape<First, Second> {
    fn path(&self, rect: Rect) -> BezPath {
        match self {
            Self::First(first) => first.path(rect),
            Self::Second(second) => second.path(rect),
        }
    }
}

/// [EitherShape] for inset-capable payloads.
///
/// Insetting delegates to the held payload and re-wraps the result under
/// the same tag, so a value built from the first branch stays a first-branch
/// value through any number of inset calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EitherInsettableShape<First: InsettableShape, Second: InsettableShape> {
    /// The first (`if`) branch was taken.
    First(First),
    /// The second (`else`) branch was taken.
    Second(Second),
}

impl<First: InsettableShape, Second: InsettableShape> Shape
    for EitherInsettableShape<First, Second>
{
    fn path(&self, rect: Rect) -> BezPath {
        match self {
            Self::First(first) => first.path(rect),
            Self::Second(second) => second.path(rect),
        }
    }
}

impl<First: InsettableShape, Second: InsettableShape> InsettableShape
    for EitherInsettableShape<First, Second>
{
    type Inset = EitherInsettableShape<First::Inset, Second::Inset>;

    fn inset(&self, amount: f64) -> Self::Inset {
        match self {
            Self::First(first) => EitherInsettableShape::First(first.inset(amount)),
            Self::Second(second) => EitherInsettableShape::Second(second.inset(amount)),
        }
    }
}
