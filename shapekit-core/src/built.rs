use crate::shape::Shape;

/// A value whose geometry is described by a single composed shape
/// expression.
///
/// Implementors describe *what* to draw through [shape](BuiltShape::shape)
/// and get the [Shape] contract derived for them by the `#[built_shape]`
/// attribute (or `#[built_insettable_shape]` for inset-capable
/// compositions), which emits the impls delegating `path` and `inset` to
/// the composed value.
///
/// ```rust,ignore
/// struct FancyMask {
///     is_circle: bool,
/// }
///
/// #[built_shape]
/// impl BuiltShape for FancyMask {
///     type S = EitherShape<Circle, RoundedRectangle>;
///
///     fn shape(&self) -> Self::S {
///         shape! {
///             if self.is_circle {
///                 Circle::new()
///             } else {
///                 RoundedRectangle::new(10.0)
///             }
///         }
///     }
/// }
/// ```
pub trait BuiltShape {
    /// The composed shape type.
    type S: Shape;

    /// Build the composed shape describing this value's geometry.
    fn shape(&self) -> Self::S;
}
