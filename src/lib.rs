#![warn(missing_docs)]

//! Compose conditional vector-shape expressions into a single uniform shape value.
//!
//! A shape is anything that can turn a bounding rectangle into a Bézier path
//! (see [`core::shape::Shape`]). Branching between two shapes normally produces
//! two different types; shapekit erases the branch into a two-variant tagged
//! union so the whole expression keeps one type, whichever branch was taken.
//!
//! ```rust
//! use shapekit::prelude::*;
//!
//! let is_circle = true;
//! let mask = shape! {
//!     if is_circle {
//!         Circle::new()
//!     } else {
//!         RoundedRectangle::new(10.0)
//!     }
//! };
//!
//! let frame = Rect::new(0.0, 0.0, 30.0, 30.0);
//! assert_eq!(mask.path(frame), Circle::new().path(frame));
//! ```

pub use vello::kurbo;

pub use shapekit_core as core;
#[cfg(feature = "macros")]
pub use shapekit_macros as macros;

/// A "prelude" for users of the shapekit crate.
///
/// Importing this module brings into scope the shape contract, the
/// composition builders and the primitive shapes.
///
/// ```rust
/// use shapekit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::builder::{InsettableShapeBuilder, ShapeBuilder};
    pub use crate::core::built::BuiltShape;
    pub use crate::core::either::{EitherInsettableShape, EitherShape};
    pub use crate::core::empty::EmptyShape;
    pub use crate::core::primitives::{Circle, Rectangle, RoundedRectangle};
    pub use crate::core::shape::{InsettableShape, Shape};
    pub use crate::kurbo::{BezPath, Rect};

    #[cfg(feature = "macros")]
    pub use crate::macros::{built_insettable_shape, built_shape, insettable_shape, shape};
}
