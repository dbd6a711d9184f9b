use std::fmt;

use thiserror::Error;

use crate::geometry::EdgeInsets;
use crate::measurable::AlignmentLine;

/// Axis a constraint bound belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("width"),
            Axis::Vertical => f.write_str("height"),
        }
    }
}

/// Broad classification of a [`LayoutError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller handed in a configuration no layout can satisfy.
    InvalidConfiguration,
    /// A child did not report a metric the layout depends on.
    MissingMetric,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("row count must be at least 1")]
    ZeroRows,

    #[error("{axis} bounds must be non-negative (min {min}, max {max})")]
    NegativeBound { axis: Axis, min: i32, max: i32 },

    #[error("{axis} min {min} exceeds max {max}")]
    InvertedBounds { axis: Axis, min: i32, max: i32 },

    #[error("padding must be non-negative: {0:?}")]
    NegativePadding(EdgeInsets),

    #[error("spacing must be non-negative, got {0}")]
    NegativeSpacing(i32),

    #[error("baseline distance must be non-negative, got {0}")]
    NegativeBaselineDistance(i32),

    #[error("measured child reports no {0:?}")]
    MissingAlignmentLine(AlignmentLine),
}

impl LayoutError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LayoutError::MissingAlignmentLine(_) => ErrorKind::MissingMetric,
            LayoutError::ZeroRows
            | LayoutError::NegativeBound { .. }
            | LayoutError::InvertedBounds { .. }
            | LayoutError::NegativePadding(_)
            | LayoutError::NegativeSpacing(_)
            | LayoutError::NegativeBaselineDistance(_) => ErrorKind::InvalidConfiguration,
        }
    }

    pub fn is_invalid_configuration(&self) -> bool {
        self.kind() == ErrorKind::InvalidConfiguration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_baseline_is_a_missing_metric() {
        let err = LayoutError::MissingAlignmentLine(AlignmentLine::FirstBaseline);
        assert_eq!(err.kind(), ErrorKind::MissingMetric);
        assert!(!err.is_invalid_configuration());
    }

    #[test]
    fn bound_errors_name_the_axis() {
        let err = LayoutError::InvertedBounds {
            axis: Axis::Vertical,
            min: 10,
            max: 5,
        };
        assert_eq!(err.to_string(), "height min 10 exceeds max 5");
        assert!(err.is_invalid_configuration());
    }
}
