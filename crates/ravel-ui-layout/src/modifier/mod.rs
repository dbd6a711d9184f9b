//! Layout modifiers: single-child transforms applied between a parent and
//! the measurable it wraps.
//!
//! A modifier measures the wrapped child itself, decides its own size, and
//! positions the child inside that size. [`ModifiedMeasurable`] chains a
//! modifier onto any [`Measurable`] so the pair can be handed to a policy as
//! an ordinary child:
//!
//! ```rust,ignore
//! let chip = text
//!     .then(Padding::new(EdgeInsets::symmetric(8, 4)))
//!     .then(Padding::uniform(8));
//! ```

mod baseline;
mod padding;
mod size;

pub use baseline::*;
pub use padding::*;
pub use size::*;

use crate::constraints::Constraints;
use crate::error::LayoutError;
use crate::geometry::{IntOffset, IntSize};
use crate::measurable::{AlignmentLine, Measurable, Placeable};

/// A single-child layout transform.
pub trait LayoutModifier {
    fn measure(
        &self,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> Result<Box<dyn Placeable>, LayoutError>;
}

/// A measurable with a modifier applied on top of it.
#[derive(Debug, Clone)]
pub struct ModifiedMeasurable<M, L> {
    inner: M,
    modifier: L,
}

impl<M, L> ModifiedMeasurable<M, L> {
    pub fn new(inner: M, modifier: L) -> Self {
        Self { inner, modifier }
    }
}

impl<M, L> Measurable for ModifiedMeasurable<M, L>
where
    M: Measurable,
    L: LayoutModifier,
{
    fn measure(&self, constraints: Constraints) -> Result<Box<dyn Placeable>, LayoutError> {
        self.modifier.measure(&self.inner, constraints)
    }
}

pub trait MeasurableExt: Measurable + Sized {
    /// Wraps `self` in `modifier`. Later calls wrap the outside, so
    /// `a.then(x).then(y)` measures through `y` first.
    fn then<L: LayoutModifier>(self, modifier: L) -> ModifiedMeasurable<Self, L> {
        ModifiedMeasurable::new(self, modifier)
    }
}

impl<M: Measurable> MeasurableExt for M {}

/// A measured child positioned at a fixed offset inside a modifier's box.
pub(crate) struct OffsetPlaceable {
    inner: Box<dyn Placeable>,
    size: IntSize,
    offset: IntOffset,
}

impl OffsetPlaceable {
    pub(crate) fn new(inner: Box<dyn Placeable>, size: IntSize, offset: IntOffset) -> Self {
        Self {
            inner,
            size,
            offset,
        }
    }
}

impl Placeable for OffsetPlaceable {
    fn width(&self) -> i32 {
        self.size.width
    }

    fn height(&self) -> i32 {
        self.size.height
    }

    fn place(&self, x: i32, y: i32) {
        let at = IntOffset::new(x, y).translate(self.offset.x, self.offset.y);
        self.inner.place(at.x, at.y);
    }

    fn alignment_line(&self, line: AlignmentLine) -> Option<i32> {
        self.inner
            .alignment_line(line)
            .map(|value| value.saturating_add(self.offset.y))
    }
}
