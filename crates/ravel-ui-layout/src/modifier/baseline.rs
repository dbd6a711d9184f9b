use super::{LayoutModifier, OffsetPlaceable};
use crate::constraints::Constraints;
use crate::error::LayoutError;
use crate::geometry::{IntOffset, IntSize};
use crate::measurable::{AlignmentLine, Measurable, Placeable};

/// Positions the child so its first baseline sits `distance` pixels below the
/// top edge of the modified box.
///
/// The top offset is `distance - baseline`; the box is the child's height plus
/// that offset (clamped to the incoming constraints) and the child's width.
/// A child without a first baseline is an error, never a zero offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FirstBaselineToTop {
    distance: i32,
}

impl FirstBaselineToTop {
    pub fn new(distance: i32) -> Self {
        Self { distance }
    }
}

impl LayoutModifier for FirstBaselineToTop {
    fn measure(
        &self,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> Result<Box<dyn Placeable>, LayoutError> {
        if self.distance < 0 {
            return Err(LayoutError::NegativeBaselineDistance(self.distance));
        }
        constraints.validate()?;

        let placeable = measurable.measure(constraints)?;
        let offset = baseline_offset(&*placeable, self.distance)?;
        let height = constraints.constrain_height(placeable.height().saturating_add(offset));
        let size = IntSize::new(placeable.width(), height);
        log::trace!(
            "first baseline to top {}: offset {} -> {}x{}",
            self.distance,
            offset,
            size.width,
            size.height
        );
        Ok(Box::new(OffsetPlaceable::new(
            placeable,
            size,
            IntOffset::new(0, offset),
        )))
    }
}

/// Vertical offset that puts `placeable`'s first baseline `distance` pixels
/// from the top.
pub fn baseline_offset(placeable: &dyn Placeable, distance: i32) -> Result<i32, LayoutError> {
    let baseline = placeable
        .alignment_line(AlignmentLine::FirstBaseline)
        .ok_or(LayoutError::MissingAlignmentLine(AlignmentLine::FirstBaseline))?;
    Ok(distance.saturating_sub(baseline))
}
