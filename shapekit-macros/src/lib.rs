#![warn(missing_docs)]

//! Macros for shapekit => See `shapekit` crate.
//!
//! Contains procedural macros.

mod builder;
mod built;

/// Compose a conditional shape expression into a single uniform shape value.
///
/// Rewrites the control flow of the given expression into calls against
/// `ShapeBuilder`: a lone expression passes through unchanged, an else-less
/// `if` (or `if let`) substitutes `EmptyShape` for the untaken branch, and an
/// `if`/`else` wraps the two branches into the two variants of `EitherShape`.
/// `else if` chains nest accordingly.
///
/// Example:
/// ```rust,ignore
/// let mask = shape! {
///     if is_circle {
///         Circle::new()
///     } else {
///         RoundedRectangle::new(10.0)
///     }
/// };
/// ```
#[proc_macro]
pub fn shape(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    proc_macro::TokenStream::from(builder::shape(proc_macro2::TokenStream::from(input)))
}

/// [shape!](macro@shape) for inset-capable branches.
///
/// Identical rewriting against `InsettableShapeBuilder`, so the composed
/// value keeps the `InsettableShape` capability. Every branch must produce
/// an `InsettableShape`.
#[proc_macro]
pub fn insettable_shape(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    proc_macro::TokenStream::from(builder::insettable_shape(proc_macro2::TokenStream::from(
        input,
    )))
}

/// Derive the `Shape` impl for a type from its `BuiltShape` impl.
///
/// Placed on an `impl BuiltShape for …` block; re-emits the block and
/// appends a `Shape` impl whose `path` delegates to the composed shape.
#[proc_macro_attribute]
pub fn built_shape(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    proc_macro::TokenStream::from(built::built_shape(
        proc_macro2::TokenStream::from(attr),
        proc_macro2::TokenStream::from(item),
    ))
}

/// [built_shape](macro@built_shape), additionally deriving `InsettableShape`.
///
/// The composed shape type must itself be an `InsettableShape`; `inset`
/// delegates to it and returns its inset result.
#[proc_macro_attribute]
pub fn built_insettable_shape(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    proc_macro::TokenStream::from(built::built_insettable_shape(
        proc_macro2::TokenStream::from(attr),
        proc_macro2::TokenStream::from(item),
    ))
}
