//! The measure/place contract between a layout and its children.

use std::rc::Rc;

use crate::constraints::Constraints;
use crate::error::LayoutError;
use crate::geometry::IntSize;

/// Horizontal reference lines a measured child may report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlignmentLine {
    FirstBaseline,
    LastBaseline,
}

/// A measured child, ready to be positioned by its parent.
pub trait Placeable {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    fn size(&self) -> IntSize {
        IntSize::new(self.width(), self.height())
    }

    /// Commits the child's position in the parent's coordinate space.
    fn place(&self, x: i32, y: i32);

    /// Distance from the child's top edge to `line`, if the child has one.
    fn alignment_line(&self, _line: AlignmentLine) -> Option<i32> {
        None
    }
}

/// An unmeasured child. Measuring must yield a size inside `constraints`.
pub trait Measurable {
    fn measure(&self, constraints: Constraints) -> Result<Box<dyn Placeable>, LayoutError>;
}

impl<T: Measurable + ?Sized> Measurable for Box<T> {
    fn measure(&self, constraints: Constraints) -> Result<Box<dyn Placeable>, LayoutError> {
        (**self).measure(constraints)
    }
}

impl<T: Measurable + ?Sized> Measurable for Rc<T> {
    fn measure(&self, constraints: Constraints) -> Result<Box<dyn Placeable>, LayoutError> {
        (**self).measure(constraints)
    }
}

impl<T: Measurable + ?Sized> Measurable for &T {
    fn measure(&self, constraints: Constraints) -> Result<Box<dyn Placeable>, LayoutError> {
        (**self).measure(constraints)
    }
}

/// Size reported by a layout pass. Child positions are committed through
/// [`Placeable::place`] and are not part of the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeasureResult {
    pub size: IntSize,
}

impl MeasureResult {
    pub fn new(size: IntSize) -> Self {
        Self { size }
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }
}

/// Measures a list of children, places them, and reports the container size.
pub trait MeasurePolicy {
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> Result<MeasureResult, LayoutError>;
}

impl<T: MeasurePolicy + ?Sized> MeasurePolicy for Box<T> {
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> Result<MeasureResult, LayoutError> {
        (**self).measure(measurables, constraints)
    }
}
