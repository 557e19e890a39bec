#![warn(missing_docs)]

//! Core library for shapekit => See the `shapekit` crate.
//!
//! Contains the shape contract and the conditional-composition adapters.

pub use vello as vg;

/// Contains the [Shape](shape::Shape) and [InsettableShape](shape::InsettableShape) contract traits.
pub mod shape;

/// Contains the [EmptyShape](empty::EmptyShape) that draws nothing.
pub mod empty;

/// Contains the two-variant tagged unions that erase a branch between two shapes.
pub mod either;

/// Contains the composition builders targeted by the rewriting macros.
pub mod builder;

/// Contains the [BuiltShape](built::BuiltShape) convenience trait.
pub mod built;

/// Contains primitive shapes sized to their bounding rectangle.
pub mod primitives;
