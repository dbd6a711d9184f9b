use ravel_ui_layout::{
    staggered_grid, Constraints, IntOffset, IntSize, LayoutError, Measurable, MeasurePolicy,
    MeasureResult,
};

use crate::fake::{FakeMeasurable, FakeProbe};

/// Owns a list of fake children and runs layouts over it.
///
/// ```rust,ignore
/// let rule = LayoutTestRule::with_sizes([(10, 20); 6]);
/// let result = rule.run_staggered(Constraints::unbounded(), 3)?;
/// rule.child(4).assert_placed_at(10, 20);
/// ```
#[derive(Debug, Default)]
pub struct LayoutTestRule {
    children: Vec<FakeMeasurable>,
}

impl LayoutTestRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sizes<I>(sizes: I) -> Self
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        let mut rule = Self::new();
        for (width, height) in sizes {
            rule.push(FakeMeasurable::new(width, height));
        }
        rule
    }

    pub fn push(&mut self, child: FakeMeasurable) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Boxed handles to the children, suitable for a [`MeasurePolicy`].
    pub fn measurables(&self) -> Vec<Box<dyn Measurable>> {
        self.children
            .iter()
            .map(|child| Box::new(child.clone()) as Box<dyn Measurable>)
            .collect()
    }

    pub fn run<P>(&self, policy: &P, constraints: Constraints) -> Result<MeasureResult, LayoutError>
    where
        P: MeasurePolicy + ?Sized,
    {
        policy.measure(&self.measurables(), constraints)
    }

    pub fn run_staggered(
        &self,
        constraints: Constraints,
        rows: usize,
    ) -> Result<MeasureResult, LayoutError> {
        staggered_grid(&self.children, constraints, rows)
    }

    pub fn child(&self, index: usize) -> TestChild<'_> {
        let child = self
            .children
            .get(index)
            .unwrap_or_else(|| panic!("no child #{} (rule has {})", index, self.children.len()));
        TestChild { index, child }
    }

    pub fn probes(&self) -> Vec<FakeProbe> {
        self.children.iter().map(FakeMeasurable::probe).collect()
    }

    /// Last committed position of every child, in input order.
    pub fn positions(&self) -> Vec<Option<IntOffset>> {
        self.children
            .iter()
            .map(|child| child.probe().position())
            .collect()
    }

    pub fn total_measure_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.probe().measure_count())
            .sum()
    }

    pub fn reset(&self) {
        for child in &self.children {
            child.probe().reset();
        }
    }
}

/// Assertions about one child of a [`LayoutTestRule`].
pub struct TestChild<'a> {
    index: usize,
    child: &'a FakeMeasurable,
}

impl<'a> TestChild<'a> {
    pub fn probe(&self) -> FakeProbe {
        self.child.probe()
    }

    pub fn position(&self) -> Option<IntOffset> {
        self.child.probe().position()
    }

    pub fn measured_size(&self) -> Option<IntSize> {
        self.child.probe().measured_size()
    }

    pub fn assert_placed_at(&self, x: i32, y: i32) {
        assert_eq!(
            self.position(),
            Some(IntOffset::new(x, y)),
            "child #{} ({:?}) placed at the wrong position",
            self.index,
            self.child.label()
        );
    }

    pub fn assert_not_placed(&self) {
        assert_eq!(
            self.child.probe().place_count(),
            0,
            "child #{} ({:?}) should not have been placed",
            self.index,
            self.child.label()
        );
    }

    pub fn assert_measured_once(&self) {
        assert_eq!(
            self.child.probe().measure_count(),
            1,
            "child #{} ({:?}) should be measured exactly once",
            self.index,
            self.child.label()
        );
    }

    pub fn assert_placed_once(&self) {
        assert_eq!(
            self.child.probe().place_count(),
            1,
            "child #{} ({:?}) should be placed exactly once",
            self.index,
            self.child.label()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_staggered_places_every_child() {
        let rule = LayoutTestRule::with_sizes([(10, 20); 4]);

        let result = rule.run_staggered(Constraints::unbounded(), 2).unwrap();

        assert_eq!(result.size, IntSize::new(20, 40));
        rule.child(3).assert_placed_at(10, 20);
        for index in 0..rule.len() {
            rule.child(index).assert_measured_once();
            rule.child(index).assert_placed_once();
        }
    }

    #[test]
    fn reset_clears_probes() {
        let rule = LayoutTestRule::with_sizes([(1, 1)]);
        rule.run_staggered(Constraints::unbounded(), 1).unwrap();

        rule.reset();

        assert_eq!(rule.total_measure_count(), 0);
        rule.child(0).assert_not_placed();
    }
}
