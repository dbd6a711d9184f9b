//! Testing utilities for Ravel layouts.
//!
//! [`FakeMeasurable`] is a fixed-size child that records every measure call
//! and placement; [`LayoutTestRule`] owns a list of them and runs policies
//! over the list.

mod fake;
mod test_rule;

pub use fake::*;
pub use test_rule::*;

pub mod prelude {
    pub use crate::fake::{FakeMeasurable, FakeProbe};
    pub use crate::test_rule::LayoutTestRule;
    pub use ravel_ui_layout::{Constraints, IntOffset, IntSize, LayoutError};
}
