use super::{LayoutModifier, OffsetPlaceable};
use crate::constraints::Constraints;
use crate::error::LayoutError;
use crate::geometry::{IntOffset, IntSize};
use crate::measurable::{Measurable, Placeable};

/// Pins one or both dimensions of the wrapped child.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizeModifier {
    width: Option<i32>,
    height: Option<i32>,
}

impl SizeModifier {
    pub fn size(width: i32, height: i32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    pub fn width(width: i32) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    pub fn height(height: i32) -> Self {
        Self {
            width: None,
            height: Some(height),
        }
    }
}

impl LayoutModifier for SizeModifier {
    fn measure(
        &self,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> Result<Box<dyn Placeable>, LayoutError> {
        constraints.validate()?;

        // Requested sizes still have to fit the incoming envelope.
        let width = self.width.map(|value| constraints.constrain_width(value));
        let height = self.height.map(|value| constraints.constrain_height(value));

        let inner_constraints = Constraints {
            min_width: width.unwrap_or(constraints.min_width),
            max_width: width.unwrap_or(constraints.max_width),
            min_height: height.unwrap_or(constraints.min_height),
            max_height: height.unwrap_or(constraints.max_height),
        };
        let inner = measurable.measure(inner_constraints)?;

        let size = IntSize::new(
            width.unwrap_or_else(|| inner.width()),
            height.unwrap_or_else(|| inner.height()),
        );
        Ok(Box::new(OffsetPlaceable::new(inner, size, IntOffset::ZERO)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Fixed;

    #[test]
    fn pins_both_dimensions() {
        let child = Fixed::new(10, 10);

        let placeable = SizeModifier::size(50, 50)
            .measure(&child, Constraints::unbounded())
            .unwrap();

        assert_eq!(placeable.size(), IntSize::new(50, 50));
        assert_eq!(child.last_constraints.get(), Some(Constraints::fixed(50, 50)));
    }

    #[test]
    fn width_only_passes_height_through() {
        let child = Fixed::new(3, 18);

        let placeable = SizeModifier::width(10)
            .measure(&child, Constraints::unbounded())
            .unwrap();

        assert_eq!(placeable.size(), IntSize::new(10, 18));
    }

    #[test]
    fn request_is_clamped_to_incoming_bounds() {
        let child = Fixed::new(0, 0);

        let placeable = SizeModifier::size(500, 5)
            .measure(&child, Constraints::new(0, 100, 10, 100).unwrap())
            .unwrap();

        assert_eq!(placeable.size(), IntSize::new(100, 10));
    }
}
