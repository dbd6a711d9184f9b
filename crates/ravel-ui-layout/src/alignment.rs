use crate::error::LayoutError;

/// Cross-axis placement of a child inside a [`Row`](crate::policies::RowMeasurePolicy).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    Top,
    #[default]
    CenterVertically,
    Bottom,
}

impl VerticalAlignment {
    /// Offset of an item of `size` inside `space`.
    pub fn align(&self, size: i32, space: i32) -> i32 {
        let free = space.saturating_sub(size);
        match self {
            VerticalAlignment::Top => 0,
            VerticalAlignment::CenterVertically => free / 2,
            VerticalAlignment::Bottom => free,
        }
    }
}

/// Cross-axis placement of a child inside a [`Column`](crate::policies::ColumnMeasurePolicy).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    #[default]
    Start,
    CenterHorizontally,
    End,
}

impl HorizontalAlignment {
    pub fn align(&self, size: i32, space: i32) -> i32 {
        let free = space.saturating_sub(size);
        match self {
            HorizontalAlignment::Start => 0,
            HorizontalAlignment::CenterHorizontally => free / 2,
            HorizontalAlignment::End => free,
        }
    }
}

/// Main-axis arrangement for linear layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LinearArrangement {
    #[default]
    Start,
    SpacedBy(i32),
}

impl LinearArrangement {
    pub fn spacing(&self) -> i32 {
        match self {
            LinearArrangement::Start => 0,
            LinearArrangement::SpacedBy(gap) => *gap,
        }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        match self {
            LinearArrangement::SpacedBy(gap) if *gap < 0 => {
                Err(LayoutError::NegativeSpacing(*gap))
            }
            _ => Ok(()),
        }
    }

    /// Total main-axis length of `count` items whose sizes sum to `content`.
    pub fn total(&self, content: i32, count: usize) -> i32 {
        let gaps = i32::try_from(count.saturating_sub(1)).unwrap_or(i32::MAX);
        content.saturating_add(self.spacing().saturating_mul(gaps))
    }
}
