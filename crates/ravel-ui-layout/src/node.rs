//! A policy bound to its children, usable as a child of another layout.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::constraints::Constraints;
use crate::error::LayoutError;
use crate::geometry::{IntOffset, IntSize};
use crate::measurable::{Measurable, MeasurePolicy, Placeable};

/// Measuring a node runs its policy over its children. Children are placed
/// during that measure pass relative to the node's own origin; the node's
/// position in its parent is recorded when the parent places it.
pub struct LayoutNode {
    policy: Box<dyn MeasurePolicy>,
    children: Vec<Box<dyn Measurable>>,
    size: Cell<Option<IntSize>>,
    position: Rc<Cell<Option<IntOffset>>>,
}

impl LayoutNode {
    pub fn new<P>(policy: P, children: Vec<Box<dyn Measurable>>) -> Self
    where
        P: MeasurePolicy + 'static,
    {
        Self {
            policy: Box::new(policy),
            children,
            size: Cell::new(None),
            position: Rc::new(Cell::new(None)),
        }
    }

    pub fn children(&self) -> &[Box<dyn Measurable>] {
        &self.children
    }

    /// Size from the most recent measure pass.
    pub fn size(&self) -> Option<IntSize> {
        self.size.get()
    }

    /// Position committed by the parent, if placed.
    pub fn position(&self) -> Option<IntOffset> {
        self.position.get()
    }

    /// Lays the node out as a root: measures it against `constraints` and
    /// places it at the origin.
    pub fn layout_root(&self, constraints: Constraints) -> Result<IntSize, LayoutError> {
        let placeable = self.measure(constraints)?;
        placeable.place(0, 0);
        Ok(placeable.size())
    }
}

impl fmt::Debug for LayoutNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutNode")
            .field("children", &self.children.len())
            .field("size", &self.size.get())
            .field("position", &self.position.get())
            .finish()
    }
}

impl Measurable for LayoutNode {
    fn measure(&self, constraints: Constraints) -> Result<Box<dyn Placeable>, LayoutError> {
        let result = self.policy.measure(&self.children, constraints)?;
        self.size.set(Some(result.size));
        Ok(Box::new(NodePlaceable {
            size: result.size,
            position: Rc::clone(&self.position),
        }))
    }
}

struct NodePlaceable {
    size: IntSize,
    position: Rc<Cell<Option<IntOffset>>>,
}

impl Placeable for NodePlaceable {
    fn width(&self) -> i32 {
        self.size.width
    }

    fn height(&self) -> i32 {
        self.size.height
    }

    fn place(&self, x: i32, y: i32) {
        self.position.set(Some(IntOffset::new(x, y)));
    }
}
