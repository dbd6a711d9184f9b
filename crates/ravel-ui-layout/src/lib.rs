//! Layout contracts and policies for Ravel.
//!
//! A layout pass hands each child a [`Constraints`] envelope through
//! [`Measurable::measure`], gets back a sized [`Placeable`], and commits the
//! child's position with [`Placeable::place`]. [`MeasurePolicy`]
//! implementations decide how a list of children is measured and arranged;
//! [`LayoutModifier`] implementations transform a single child.
//!
//! The centerpiece is [`staggered_grid`], a row-major staggered grid that
//! deals children into rows round-robin.

mod alignment;
mod constraints;
mod error;
mod geometry;
mod measurable;
pub mod modifier;
mod node;
pub mod policies;

#[cfg(test)]
mod test_support;

pub use alignment::*;
pub use constraints::*;
pub use error::*;
pub use geometry::*;
pub use measurable::*;
pub use modifier::{
    baseline_offset, FirstBaselineToTop, LayoutModifier, MeasurableExt, ModifiedMeasurable,
    Padding, SizeModifier,
};
pub use node::*;
pub use policies::*;
