//! Size envelopes passed from parent to child during measurement.

use crate::error::{Axis, LayoutError};
use crate::geometry::IntSize;

/// Min/max bounds on both axes, in pixels.
///
/// Fields are public; policies call [`Constraints::validate`] before
/// measuring any child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Constraints {
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
}

impl Constraints {
    /// Marker for an unbounded maximum.
    pub const INFINITY: i32 = i32::MAX;

    pub fn new(
        min_width: i32,
        max_width: i32,
        min_height: i32,
        max_height: i32,
    ) -> Result<Self, LayoutError> {
        let constraints = Self {
            min_width,
            max_width,
            min_height,
            max_height,
        };
        constraints.validate()?;
        Ok(constraints)
    }

    /// Exactly `width` x `height`.
    pub fn fixed(width: i32, height: i32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Anything from zero up to the given maximums.
    pub fn loose(max_width: i32, max_height: i32) -> Self {
        Self {
            min_width: 0,
            max_width,
            min_height: 0,
            max_height,
        }
    }

    pub fn unbounded() -> Self {
        Self::loose(Self::INFINITY, Self::INFINITY)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        check_axis(Axis::Horizontal, self.min_width, self.max_width)?;
        check_axis(Axis::Vertical, self.min_height, self.max_height)
    }

    pub fn has_bounded_width(&self) -> bool {
        self.max_width != Self::INFINITY
    }

    pub fn has_bounded_height(&self) -> bool {
        self.max_height != Self::INFINITY
    }

    /// Clamps `width` into `[min_width, max_width]`.
    ///
    /// # Panics
    ///
    /// Panics if `min_width > max_width`; run [`Constraints::validate`] first
    /// on constraints built from raw fields.
    pub fn constrain_width(&self, width: i32) -> i32 {
        debug_assert!(
            self.min_width <= self.max_width,
            "inverted width bounds {}..{}",
            self.min_width,
            self.max_width
        );
        width.clamp(self.min_width, self.max_width)
    }

    /// Clamps `height` into `[min_height, max_height]`.
    ///
    /// # Panics
    ///
    /// Panics if `min_height > max_height`.
    pub fn constrain_height(&self, height: i32) -> i32 {
        debug_assert!(
            self.min_height <= self.max_height,
            "inverted height bounds {}..{}",
            self.min_height,
            self.max_height
        );
        height.clamp(self.min_height, self.max_height)
    }

    pub fn constrain(&self, size: IntSize) -> IntSize {
        IntSize {
            width: self.constrain_width(size.width),
            height: self.constrain_height(size.height),
        }
    }

    /// Drops the minimums, keeping the maximums.
    pub fn loosen(&self) -> Self {
        Self {
            min_width: 0,
            min_height: 0,
            ..*self
        }
    }

    /// Shrinks both bounds by the given amounts, flooring at zero.
    /// An unbounded maximum stays unbounded.
    pub fn offset(&self, horizontal: i32, vertical: i32) -> Self {
        Self {
            min_width: shrink(self.min_width, horizontal),
            max_width: shrink_max(self.max_width, horizontal),
            min_height: shrink(self.min_height, vertical),
            max_height: shrink_max(self.max_height, vertical),
        }
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

fn check_axis(axis: Axis, min: i32, max: i32) -> Result<(), LayoutError> {
    if min < 0 || max < 0 {
        return Err(LayoutError::NegativeBound { axis, min, max });
    }
    if min > max {
        return Err(LayoutError::InvertedBounds { axis, min, max });
    }
    Ok(())
}

fn shrink(value: i32, by: i32) -> i32 {
    value.saturating_sub(by).max(0)
}

fn shrink_max(value: i32, by: i32) -> i32 {
    if value == Constraints::INFINITY {
        value
    } else {
        shrink(value, by)
    }
}
