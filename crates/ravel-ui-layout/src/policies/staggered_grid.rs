//! Row-major staggered grid.
//!
//! Children are dealt into a fixed number of rows round-robin by input
//! order (child `i` lands in row `i % rows`). Each row lays its children out
//! left to right; rows stack top to bottom. The container is as wide as the
//! widest row and as tall as all rows together.
//!
//! Assignment never looks at accumulated widths: this is not a masonry
//! layout that picks the shortest row for the next child.

use smallvec::{smallvec, SmallVec};

use crate::constraints::Constraints;
use crate::error::LayoutError;
use crate::geometry::IntSize;
use crate::measurable::{Measurable, MeasurePolicy, MeasureResult, Placeable};

pub const DEFAULT_ROW_COUNT: usize = 3;

const INLINE_ROWS: usize = 8;

type RowVec = SmallVec<[i32; INLINE_ROWS]>;

/// Configuration for a staggered grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaggeredGridSpec {
    pub rows: usize,
}

impl StaggeredGridSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }
}

impl Default for StaggeredGridSpec {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROW_COUNT,
        }
    }
}

/// [`MeasurePolicy`] adapter over [`staggered_grid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaggeredGridMeasurePolicy {
    rows: usize,
}

impl StaggeredGridMeasurePolicy {
    pub fn new(spec: StaggeredGridSpec) -> Self {
        Self { rows: spec.rows }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}

impl Default for StaggeredGridMeasurePolicy {
    fn default() -> Self {
        Self::new(StaggeredGridSpec::default())
    }
}

impl MeasurePolicy for StaggeredGridMeasurePolicy {
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> Result<MeasureResult, LayoutError> {
        staggered_grid(measurables, constraints, self.rows)
    }
}

/// Row that child `index` is assigned to.
pub fn row_for(index: usize, rows: usize) -> usize {
    index % rows
}

/// Measures every child once against `constraints`, places every child once,
/// and returns the clamped container size.
///
/// Fails before measuring anything if `rows` is zero or `constraints` is
/// malformed. A child that fails to measure aborts the pass before any child
/// is placed.
pub fn staggered_grid<M>(
    children: &[M],
    constraints: Constraints,
    rows: usize,
) -> Result<MeasureResult, LayoutError>
where
    M: Measurable,
{
    if rows == 0 {
        return Err(LayoutError::ZeroRows);
    }
    constraints.validate()?;

    // Rows past the last child stay empty and add nothing.
    let used_rows = rows.min(children.len());
    let mut metrics = RowMetrics::new(used_rows);
    let mut placeables: Vec<Box<dyn Placeable>> = Vec::with_capacity(children.len());
    for (index, child) in children.iter().enumerate() {
        let placeable = child.measure(constraints)?;
        let row = row_for(index, rows);
        log::trace!(
            "staggered grid: child {} -> row {} ({}x{})",
            index,
            row,
            placeable.width(),
            placeable.height()
        );
        metrics.push(row, placeable.width(), placeable.height());
        placeables.push(placeable);
    }

    let widest = metrics.widest();
    let total_height = metrics.total_height();
    if total_height == i32::MAX && !constraints.has_bounded_height() {
        log::warn!("staggered grid: summed row heights saturated with an unbounded max height");
    }
    let size = IntSize::new(
        constraints.constrain_width(widest),
        constraints.constrain_height(total_height),
    );

    let origins = metrics.origins();
    let mut cursors: RowVec = smallvec![0; used_rows];
    for (index, placeable) in placeables.iter().enumerate() {
        let row = row_for(index, rows);
        placeable.place(cursors[row], origins[row]);
        cursors[row] = cursors[row].saturating_add(placeable.width());
    }

    log::debug!(
        "staggered grid: {} children in {} rows -> {}x{}",
        children.len(),
        rows,
        size.width,
        size.height
    );
    Ok(MeasureResult::new(size))
}

/// Per-row accumulated width and tallest child.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RowMetrics {
    widths: RowVec,
    heights: RowVec,
}

impl RowMetrics {
    fn new(rows: usize) -> Self {
        Self {
            widths: smallvec![0; rows],
            heights: smallvec![0; rows],
        }
    }

    fn push(&mut self, row: usize, width: i32, height: i32) {
        self.widths[row] = self.widths[row].saturating_add(width);
        self.heights[row] = self.heights[row].max(height);
    }

    fn widest(&self) -> i32 {
        self.widths.iter().copied().max().unwrap_or(0)
    }

    fn total_height(&self) -> i32 {
        self.heights
            .iter()
            .fold(0i32, |total, height| total.saturating_add(*height))
    }

    /// Top edge of each row: the running sum of the rows above it.
    fn origins(&self) -> RowVec {
        let mut origins = RowVec::with_capacity(self.heights.len());
        let mut y = 0i32;
        for height in &self.heights {
            origins.push(y);
            y = y.saturating_add(*height);
        }
        origins
    }
}
