//! Vertical stacking layout.

use crate::alignment::{HorizontalAlignment, LinearArrangement};
use crate::constraints::Constraints;
use crate::error::LayoutError;
use crate::geometry::IntSize;
use crate::measurable::{Measurable, MeasurePolicy, MeasureResult, Placeable};

/// Specification for Column layout behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnSpec {
    pub vertical_arrangement: LinearArrangement,
    pub horizontal_alignment: HorizontalAlignment,
}

impl ColumnSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical_arrangement(mut self, arrangement: LinearArrangement) -> Self {
        self.vertical_arrangement = arrangement;
        self
    }

    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }
}

/// Places children top to bottom in input order.
///
/// Children are measured with the incoming constraints loosened. The column
/// is as wide as its widest child and as tall as its children plus gaps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnMeasurePolicy {
    spec: ColumnSpec,
}

impl ColumnMeasurePolicy {
    pub fn new(spec: ColumnSpec) -> Self {
        Self { spec }
    }
}

impl MeasurePolicy for ColumnMeasurePolicy {
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> Result<MeasureResult, LayoutError> {
        constraints.validate()?;
        self.spec.vertical_arrangement.validate()?;

        let child_constraints = constraints.loosen();
        let placeables = measurables
            .iter()
            .map(|child| child.measure(child_constraints))
            .collect::<Result<Vec<Box<dyn Placeable>>, _>>()?;

        let content_width = placeables.iter().map(|p| p.width()).max().unwrap_or(0);
        let content_height = placeables
            .iter()
            .fold(0i32, |total, p| total.saturating_add(p.height()));
        let arrangement = self.spec.vertical_arrangement;
        let size = constraints.constrain(IntSize::new(
            content_width,
            arrangement.total(content_height, placeables.len()),
        ));

        let mut y = 0i32;
        for placeable in &placeables {
            let x = self
                .spec
                .horizontal_alignment
                .align(placeable.width(), size.width);
            placeable.place(x, y);
            y = y
                .saturating_add(placeable.height())
                .saturating_add(arrangement.spacing());
        }

        Ok(MeasureResult::new(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::IntOffset;
    use crate::test_support::Fixed;
    use std::rc::Rc;

    fn boxed(children: &[Rc<Fixed>]) -> Vec<Box<dyn Measurable>> {
        children
            .iter()
            .map(|child| Box::new(Rc::clone(child)) as Box<dyn Measurable>)
            .collect()
    }

    #[test]
    fn stacks_children_vertically() {
        let children = vec![Rc::new(Fixed::new(40, 10)), Rc::new(Fixed::new(60, 15))];
        let policy = ColumnMeasurePolicy::default();

        let result = policy
            .measure(&boxed(&children), Constraints::unbounded())
            .unwrap();

        assert_eq!(result.size, IntSize::new(60, 25));
        assert_eq!(children[0].position(), Some(IntOffset::new(0, 0)));
        assert_eq!(children[1].position(), Some(IntOffset::new(0, 10)));
    }

    #[test]
    fn spacing_and_alignment_shift_children() {
        let children = vec![Rc::new(Fixed::new(20, 10)), Rc::new(Fixed::new(60, 10))];
        let policy = ColumnMeasurePolicy::new(
            ColumnSpec::new()
                .vertical_arrangement(LinearArrangement::SpacedBy(5))
                .horizontal_alignment(HorizontalAlignment::CenterHorizontally),
        );

        let result = policy
            .measure(&boxed(&children), Constraints::unbounded())
            .unwrap();

        assert_eq!(result.size, IntSize::new(60, 25));
        assert_eq!(children[0].position(), Some(IntOffset::new(20, 0)));
        assert_eq!(children[1].position(), Some(IntOffset::new(0, 15)));
    }

    #[test]
    fn children_see_loosened_constraints() {
        let children = vec![Rc::new(Fixed::new(5, 5))];
        let policy = ColumnMeasurePolicy::default();

        let result = policy
            .measure(&boxed(&children), Constraints::fixed(50, 50))
            .unwrap();

        assert_eq!(result.size, IntSize::new(50, 50));
        assert_eq!(
            children[0].last_constraints.get(),
            Some(Constraints::loose(50, 50))
        );
    }
}
