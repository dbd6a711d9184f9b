use super::{LayoutModifier, OffsetPlaceable};
use crate::constraints::Constraints;
use crate::error::LayoutError;
use crate::geometry::{EdgeInsets, IntOffset, IntSize};
use crate::measurable::{Measurable, Placeable};

/// Adds space around the wrapped child.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Padding {
    insets: EdgeInsets,
}

impl Padding {
    pub fn new(insets: EdgeInsets) -> Self {
        Self { insets }
    }

    pub fn uniform(all: i32) -> Self {
        Self::new(EdgeInsets::uniform(all))
    }

    pub fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(EdgeInsets::symmetric(horizontal, vertical))
    }
}

impl LayoutModifier for Padding {
    fn measure(
        &self,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> Result<Box<dyn Placeable>, LayoutError> {
        constraints.validate()?;
        self.insets.validate()?;

        let horizontal = self.insets.horizontal_sum();
        let vertical = self.insets.vertical_sum();

        // Subtract padding from available space
        let inner = measurable.measure(constraints.offset(horizontal, vertical))?;

        let size = constraints.constrain(IntSize::new(
            inner.width().saturating_add(horizontal),
            inner.height().saturating_add(vertical),
        ));
        let offset = IntOffset::new(self.insets.left, self.insets.top);
        Ok(Box::new(OffsetPlaceable::new(inner, size, offset)))
    }
}
