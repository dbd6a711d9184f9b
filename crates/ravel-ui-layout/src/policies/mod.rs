//! Measure policies: how a layout measures and places its children.

mod column;
mod row;
mod staggered_grid;

pub use column::*;
pub use row::*;
pub use staggered_grid::*;
