use shapekit::prelude::*;

const FRAME: Rect = Rect::new(0.0, 0.0, 30.0, 30.0);

struct ConditionalMask {
    is_circle: bool,
}

#[built_shape]
impl BuiltShape for ConditionalMask {
    type S = EitherShape<Circle, Rectangle>;

    fn shape(&self) -> Self::S {
        shape! {
            if self.is_circle {
                Circle::new()
            } else {
                Rectangle::new()
            }
        }
    }
}

struct OptionalMask {
    value: Option<i32>,
}

#[built_shape]
impl BuiltShape for OptionalMask {
    type S = EitherShape<Circle, EmptyShape>;

    fn shape(&self) -> Self::S {
        shape! {
            if let Some(_) = self.value {
                Circle::new()
            }
        }
    }
}

#[test]
fn test_single_branch_is_identity() {
    let mask = shape! { Circle::new() };

    assert_eq!(mask.path(FRAME), Circle::new().path(FRAME));
}

#[test]
fn test_conditional_true() {
    let mask = ConditionalMask { is_circle: true };

    assert_eq!(mask.path(FRAME), Circle::new().path(FRAME));
    assert_ne!(mask.path(FRAME), Rectangle::new().path(FRAME));
}

#[test]
fn test_conditional_false() {
    let mask = ConditionalMask { is_circle: false };

    assert_eq!(mask.path(FRAME), Rectangle::new().path(FRAME));
}

#[test]
fn test_optional_exists() {
    let mask = OptionalMask { value: Some(1) };

    assert_eq!(mask.path(FRAME), Circle::new().path(FRAME));
}

#[test]
fn test_optional_nil() {
    let mask = OptionalMask { value: None };

    assert_eq!(mask.path(FRAME), BezPath::new());
}

#[test]
fn test_guarded_branch_not_taken() {
    let show_badge = false;
    let mask = shape! {
        if show_badge {
            Circle::new()
        }
    };

    assert_eq!(mask.path(FRAME), EmptyShape::new().path(FRAME));
}

#[test]
fn test_else_if_chain_nests_eithers() {
    let pick = |kind: u8| {
        shape! {
            if kind == 0 {
                Circle::new()
            } else if kind == 1 {
                Rectangle::new()
            } else {
                RoundedRectangle::new(8.0)
            }
        }
    };

    assert_eq!(pick(0).path(FRAME), Circle::new().path(FRAME));
    assert_eq!(pick(1).path(FRAME), Rectangle::new().path(FRAME));
    assert_eq!(pick(2).path(FRAME), RoundedRectangle::new(8.0).path(FRAME));
}

#[test]
fn test_branch_with_leading_statements() {
    let rounded = true;
    let mask = shape! {
        if rounded {
            let radius = 4.0;
            RoundedRectangle::new(radius)
        } else {
            Rectangle::new()
        }
    };

    assert_eq!(mask.path(FRAME), RoundedRectangle::new(4.0).path(FRAME));
}

#[test]
fn test_condition_is_evaluated_fresh_per_construction() {
    let build = |is_circle: bool| ConditionalMask { is_circle }.path(FRAME);

    assert_eq!(build(true), Circle::new().path(FRAME));
    assert_eq!(build(false), Rectangle::new().path(FRAME));
    assert_eq!(build(true), Circle::new().path(FRAME));
}
