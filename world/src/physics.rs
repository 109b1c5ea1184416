//! Physical support rules: which entity may rest directly on which.
//!
//! A drop is legal iff the held entity may rest on the current top of the
//! destination column. The floor (an empty column) supports anything.

use crate::object::{Form, ObjectDescription, Size};

/// The reason a drop is physically illegal.
///
/// Variants are checked in declaration order; the first match is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum SupportViolation {
    /// Small entities cannot support large ones.
    #[error("a small object cannot support a large one")]
    LargeOnSmall,
    /// Balls roll off anything but boxes or the floor.
    #[error("a ball must rest in a box or on the floor")]
    BallOffBox,
    /// Balls support nothing.
    #[error("a ball cannot support anything")]
    OnBall,
    /// Boxes cannot contain a same-size pyramid, plank, or box.
    #[error("a box cannot contain a pyramid, plank or box of the same size")]
    SameSizeInBox,
    /// Small bricks and pyramids cannot support boxes.
    #[error("a small brick or pyramid cannot support a box")]
    BoxOnSmallBrickOrPyramid,
    /// Pyramids cannot support a same-size box.
    #[error("a pyramid cannot support a box of the same size")]
    SameSizeBoxOnPyramid,
}

/// Check whether `held` may be placed directly on `top`.
///
/// `top == None` is the floor, which supports everything.
///
/// # Errors
///
/// Returns the first [`SupportViolation`] that applies.
pub fn check_support(
    held: &ObjectDescription,
    top: Option<&ObjectDescription>,
) -> Result<(), SupportViolation> {
    let Some(top) = top else {
        return Ok(());
    };

    if top.size == Size::Small && held.size == Size::Large {
        return Err(SupportViolation::LargeOnSmall);
    }
    if top.form != Form::Box && held.form == Form::Ball {
        return Err(SupportViolation::BallOffBox);
    }
    if top.form == Form::Ball {
        return Err(SupportViolation::OnBall);
    }
    if top.form == Form::Box
        && matches!(held.form, Form::Pyramid | Form::Plank | Form::Box)
        && top.size == held.size
    {
        return Err(SupportViolation::SameSizeInBox);
    }
    if top.size == Size::Small
        && matches!(top.form, Form::Brick | Form::Pyramid)
        && held.form == Form::Box
    {
        return Err(SupportViolation::BoxOnSmallBrickOrPyramid);
    }
    if top.form == Form::Pyramid && held.form == Form::Box && top.size == held.size {
        return Err(SupportViolation::SameSizeBoxOnPyramid);
    }
    Ok(())
}
