//! Minimal fixed-size children for unit tests inside this crate.
//! Integration tests use `ravel-testing` instead.

use std::cell::Cell;
use std::rc::Rc;

use crate::constraints::Constraints;
use crate::error::LayoutError;
use crate::geometry::{IntOffset, IntSize};
use crate::measurable::{AlignmentLine, Measurable, Placeable};

pub(crate) struct Fixed {
    size: IntSize,
    baseline: Option<i32>,
    pub(crate) measured: Rc<Cell<usize>>,
    pub(crate) last_constraints: Rc<Cell<Option<Constraints>>>,
    pub(crate) position: Rc<Cell<Option<IntOffset>>>,
}

impl Fixed {
    pub(crate) fn new(width: i32, height: i32) -> Self {
        Self {
            size: IntSize::new(width, height),
            baseline: None,
            measured: Rc::new(Cell::new(0)),
            last_constraints: Rc::new(Cell::new(None)),
            position: Rc::new(Cell::new(None)),
        }
    }

    pub(crate) fn with_baseline(mut self, baseline: i32) -> Self {
        self.baseline = Some(baseline);
        self
    }

    pub(crate) fn position(&self) -> Option<IntOffset> {
        self.position.get()
    }
}

struct FixedPlaceable {
    size: IntSize,
    baseline: Option<i32>,
    position: Rc<Cell<Option<IntOffset>>>,
}

impl Placeable for FixedPlaceable {
    fn width(&self) -> i32 {
        self.size.width
    }

    fn height(&self) -> i32 {
        self.size.height
    }

    fn place(&self, x: i32, y: i32) {
        self.position.set(Some(IntOffset::new(x, y)));
    }

    fn alignment_line(&self, _line: AlignmentLine) -> Option<i32> {
        self.baseline
    }
}

impl Measurable for Fixed {
    fn measure(&self, constraints: Constraints) -> Result<Box<dyn Placeable>, LayoutError> {
        self.measured.set(self.measured.get() + 1);
        self.last_constraints.set(Some(constraints));
        Ok(Box::new(FixedPlaceable {
            size: constraints.constrain(self.size),
            baseline: self.baseline,
            position: Rc::clone(&self.position),
        }))
    }
}
