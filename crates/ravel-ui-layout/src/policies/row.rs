//! Horizontal layout with cross-axis alignment.

use crate::alignment::{LinearArrangement, VerticalAlignment};
use crate::constraints::Constraints;
use crate::error::LayoutError;
use crate::geometry::IntSize;
use crate::measurable::{Measurable, MeasurePolicy, MeasureResult, Placeable};

/// Specification for Row layout behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowSpec {
    pub horizontal_arrangement: LinearArrangement,
    pub vertical_alignment: VerticalAlignment,
}

impl RowSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horizontal_arrangement(mut self, arrangement: LinearArrangement) -> Self {
        self.horizontal_arrangement = arrangement;
        self
    }

    pub fn vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }
}

/// Places children left to right, aligned on the vertical axis inside the
/// row's height (the tallest child, clamped to the constraints).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowMeasurePolicy {
    spec: RowSpec,
}

impl RowMeasurePolicy {
    pub fn new(spec: RowSpec) -> Self {
        Self { spec }
    }
}

impl MeasurePolicy for RowMeasurePolicy {
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> Result<MeasureResult, LayoutError> {
        constraints.validate()?;
        self.spec.horizontal_arrangement.validate()?;

        let child_constraints = constraints.loosen();
        let placeables = measurables
            .iter()
            .map(|child| child.measure(child_constraints))
            .collect::<Result<Vec<Box<dyn Placeable>>, _>>()?;

        let content_width = placeables
            .iter()
            .fold(0i32, |total, p| total.saturating_add(p.width()));
        let content_height = placeables.iter().map(|p| p.height()).max().unwrap_or(0);
        let arrangement = self.spec.horizontal_arrangement;
        let size = constraints.constrain(IntSize::new(
            arrangement.total(content_width, placeables.len()),
            content_height,
        ));

        let mut x = 0i32;
        for placeable in &placeables {
            let y = self
                .spec
                .vertical_alignment
                .align(placeable.height(), size.height);
            placeable.place(x, y);
            x = x
                .saturating_add(placeable.width())
                .saturating_add(arrangement.spacing());
        }

        Ok(MeasureResult::new(size))
    }
}
