use crate::either::{EitherInsettableShape, EitherShape};
use crate::empty::EmptyShape;
use crate::shape::{InsettableShape, Shape};

/// Builder functions mapping the branches of a conditional shape expression
/// onto a single [Shape]-conforming value.
///
/// The `shape!` macro rewrites control flow into calls against this type,
/// but the functions can just as well be called by hand:
///
/// - a lone expression is passed through [build_block](ShapeBuilder::build_block) unchanged;
/// - an else-less `if` becomes [build_optional](ShapeBuilder::build_optional),
///   with [EmptyShape] standing in for the untaken branch;
/// - an `if`/`else` becomes [build_either_first](ShapeBuilder::build_either_first)
///   in one arm and [build_either_second](ShapeBuilder::build_either_second)
///   in the other, so both arms share the [EitherShape] type.
///
/// Never constructed; it only namespaces the rewriting targets.
pub enum ShapeBuilder {}

impl ShapeBuilder {
    /// Pass a single-branch expression through unchanged.
    pub fn build_block<S: Shape>(component: S) -> S {
        component
    }

    /// Resolve an optional branch, substituting [EmptyShape] when it was
    /// not taken.
    pub fn build_optional<S: Shape>(component: Option<S>) -> EitherShape<S, EmptyShape> {
        match component {
            Some(component) => EitherShape::First(component),
            None => EitherShape::Second(EmptyShape),
        }
    }

    /// Wrap the value of a taken `if` branch.
    pub fn build_either_first<First: Shape, Second: Shape>(
        component: First,
    ) -> EitherShape<First, Second> {
        EitherShape::First(component)
    }

    /// Wrap the value of a taken `else` branch.
    pub fn build_either_second<First: Shape, Second: Shape>(
        component: Second,
    ) -> EitherShape<First, Second> {
        EitherShape::Second(component)
    }
}

/// [ShapeBuilder] for inset-capable branches, producing
/// [EitherInsettableShape] so the composed value keeps the
/// [InsettableShape] capability.
///
/// Never constructed; it only namespaces the rewriting targets.
pub enum InsettableShapeBuilder {}

impl InsettableShapeBuilder {
    /// Pass a single-branch expression through unchanged.
    pub fn build_block<S: InsettableShape>(component: S) -> S {
        component
    }

    /// Resolve an optional branch, substituting [EmptyShape] when it was
    /// not taken.
    pub fn build_optional<S: InsettableShape>(
        component: Option<S>,
    ) -> EitherInsettableShape<S, EmptyShape> {
        match component {
            Some(component) => EitherInsettableShape::First(component),
            None => EitherInsettableShape::Second(EmptyShape),
        }
    }

    /// Wrap the value of a taken `if` branch.
    pub fn build_either_first<First: InsettableShape, Second: InsettableShape>(
        component: First,
    ) -> EitherInsettableShape<First, Second> {
        EitherInsettableShape::First(component)
    }

    /// Wrap the value of a taken `else` branch.
    pub fn build_either_second<First: InsettableShape, Second: InsettableShape>(
        component: Second,
    ) -> EitherInsettableShape<First, Second> {
        EitherInsettableShape::Second(component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Circle, Rectangle};
    use vello::kurbo::Rect;

    const FRAME: Rect = Rect::new(0.0, 0.0, 30.0, 30.0);

    #[test]
    fn test_build_block_is_identity() {
        let built = ShapeBuilder::build_block(Circle::new());

        assert_eq!(built.path(FRAME), Circle::new().path(FRAME));
    }

    #[test]
    fn test_build_optional_taken() {
        let built = ShapeBuilder::build_optional(Some(Circle::new()));

        assert_eq!(built.path(FRAME), Circle::new().path(FRAME));
    }

    #[test]
    fn test_build_optional_not_taken() {
        let built = ShapeBuilder::build_optional::<Circle>(None);

        assert_eq!(built.path(FRAME), EmptyShape::new().path(FRAME));
    }

    #[test]
    fn test_build_either_takes_one_branch_only() {
        // Condition true: the circle's geometry, not the rectangle's.
        let condition = true;
        let built: EitherShape<Circle, Rectangle> = if condition {
            ShapeBuilder::build_either_first(Circle::new())
        } else {
            ShapeBuilder::build_either_second(Rectangle::new())
        };

        assert_eq!(built.path(FRAME), Circle::new().path(FRAME));
        assert_ne!(built.path(FRAME), Rectangle::new().path(FRAME));
    }

    #[test]
    fn test_build_either_second_branch() {
        let condition = false;
        let built: EitherShape<Circle, Rectangle> = if condition {
            ShapeBuilder::build_either_first(Circle::new())
        } else {
            ShapeBuilder::build_either_second(Rectangle::new())
        };

        assert_eq!(built.path(FRAME), Rectangle::new().path(FRAME));
    }

    #[test]
    fn test_insettable_either_keeps_inset_capability() {
        let built: EitherInsettableShape<Circle, Rectangle> =
            InsettableShapeBuilder::build_either_first(Circle::new());

        assert_eq!(built.inset(5.0).path(FRAME), Circle::new().inset(5.0).path(FRAME));
    }

    #[test]
    fn test_insettable_optional_not_taken_insets_to_empty() {
        let built = InsettableShapeBuilder::build_optional::<Circle>(None);

        assert_eq!(built.inset(5.0).path(FRAME), EmptyShape::new().path(FRAME));
    }
}
