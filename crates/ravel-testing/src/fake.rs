use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use ravel_ui_layout::{
    AlignmentLine, Constraints, IntOffset, IntSize, LayoutError, Measurable, Placeable,
};

#[derive(Debug, Default)]
struct ProbeState {
    measure_calls: Vec<Constraints>,
    measured_size: Option<IntSize>,
    placements: Vec<IntOffset>,
}

/// Shared view of what happened to a [`FakeMeasurable`] during layout.
#[derive(Clone, Default)]
pub struct FakeProbe {
    state: Rc<RefCell<ProbeState>>,
}

impl FakeProbe {
    pub fn measure_count(&self) -> usize {
        self.state.borrow().measure_calls.len()
    }

    pub fn place_count(&self) -> usize {
        self.state.borrow().placements.len()
    }

    /// Constraints of every measure call, oldest first.
    pub fn measure_constraints(&self) -> Vec<Constraints> {
        self.state.borrow().measure_calls.clone()
    }

    pub fn measured_size(&self) -> Option<IntSize> {
        self.state.borrow().measured_size
    }

    /// Most recent committed position.
    pub fn position(&self) -> Option<IntOffset> {
        self.state.borrow().placements.last().copied()
    }

    pub fn reset(&self) {
        *self.state.borrow_mut() = ProbeState::default();
    }
}

impl fmt::Debug for FakeProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("FakeProbe")
            .field("measure_count", &state.measure_calls.len())
            .field("measured_size", &state.measured_size)
            .field("position", &state.placements.last())
            .finish()
    }
}

/// A child with a preferred size and optional baselines.
///
/// Measuring clamps the preferred size into the given constraints, as any
/// well-behaved child does. Clones share the same [`FakeProbe`].
#[derive(Clone, Debug)]
pub struct FakeMeasurable {
    label: String,
    size: IntSize,
    first_baseline: Option<i32>,
    last_baseline: Option<i32>,
    failure: Option<LayoutError>,
    probe: FakeProbe,
}

impl FakeMeasurable {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            label: String::new(),
            size: IntSize::new(width, height),
            first_baseline: None,
            last_baseline: None,
            failure: None,
            probe: FakeProbe::default(),
        }
    }

    /// Reports `error` from every measure call.
    pub fn failing(error: LayoutError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new(0, 0)
        }
    }

    /// A single line of text: first and last baseline coincide.
    pub fn text_line(label: impl Into<String>, width: i32, height: i32, baseline: i32) -> Self {
        Self::new(width, height)
            .named(label)
            .with_baseline(baseline)
    }

    pub fn named(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_baseline(mut self, baseline: i32) -> Self {
        self.first_baseline = Some(baseline);
        self.last_baseline = Some(baseline);
        self
    }

    pub fn with_baselines(mut self, first: i32, last: i32) -> Self {
        self.first_baseline = Some(first);
        self.last_baseline = Some(last);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn probe(&self) -> FakeProbe {
        self.probe.clone()
    }
}

impl Measurable for FakeMeasurable {
    fn measure(&self, constraints: Constraints) -> Result<Box<dyn Placeable>, LayoutError> {
        let mut state = self.probe.state.borrow_mut();
        state.measure_calls.push(constraints);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        let size = constraints.constrain(self.size);
        state.measured_size = Some(size);
        Ok(Box::new(FakePlaceable {
            size,
            first_baseline: self.first_baseline,
            last_baseline: self.last_baseline,
            probe: self.probe.clone(),
        }))
    }
}

struct FakePlaceable {
    size: IntSize,
    first_baseline: Option<i32>,
    last_baseline: Option<i32>,
    probe: FakeProbe,
}

impl Placeable for FakePlaceable {
    fn width(&self) -> i32 {
        self.size.width
    }

    fn height(&self) -> i32 {
        self.size.height
    }

    fn place(&self, x: i32, y: i32) {
        self.probe
            .state
            .borrow_mut()
            .placements
            .push(IntOffset::new(x, y));
    }

    fn alignment_line(&self, line: AlignmentLine) -> Option<i32> {
        match line {
            AlignmentLine::FirstBaseline => self.first_baseline,
            AlignmentLine::LastBaseline => self.last_baseline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_clamps_and_records() {
        let child = FakeMeasurable::new(200, 5);
        let probe = child.probe();

        let placeable = child
            .measure(Constraints::new(0, 100, 10, 100).unwrap())
            .unwrap();
        placeable.place(3, 4);

        assert_eq!(placeable.size(), IntSize::new(100, 10));
        assert_eq!(probe.measure_count(), 1);
        assert_eq!(probe.position(), Some(IntOffset::new(3, 4)));
    }

    #[test]
    fn failing_child_still_counts_the_call() {
        let child = FakeMeasurable::failing(LayoutError::ZeroRows);

        assert!(child.measure(Constraints::unbounded()).is_err());
        assert_eq!(child.probe().measure_count(), 1);
        assert_eq!(child.probe().measured_size(), None);
    }

    #[test]
    fn clones_share_a_probe() {
        let child = FakeMeasurable::new(1, 1).named("a");
        let copy = child.clone();

        let _ = copy.measure(Constraints::unbounded());

        assert_eq!(child.probe().measure_count(), 1);
        assert_eq!(copy.label(), "a");
    }
}
