//! Grid-seeded layout with per-node drag overrides.
//!
//! A node's position is derived from its logical `(column, row)` cell
//! until the user drags it; from then on the explicit pinned position
//! wins for the rest of the session. `reset` drops every pin, restoring
//! the seeded grid.

use crate::id::NodeId;
use crate::model::{Diagram, DiagramNode};
use std::collections::HashMap;

/// Constants of the seeded grid: padding, cell gaps, and the fixed node
/// box size used for anchors and hit-testing.
#[derive(Debug, Clone, Copy)]
pub struct GridSpec {
    pub pad_x: f64,
    pub pad_y: f64,
    pub col_gap: f64,
    pub row_gap: f64,
    pub node_width: f64,
    pub node_height: f64,
}

impl GridSpec {
    /// Left-to-right lineage layout: compact boxes in stage columns.
    pub fn pipeline() -> Self {
        Self {
            pad_x: 80.0,
            pad_y: 60.0,
            col_gap: 240.0,
            row_gap: 90.0,
            node_width: 170.0,
            node_height: 64.0,
        }
    }

    /// Entity-relationship layout: wide cards on a loose grid.
    pub fn schema() -> Self {
        Self {
            pad_x: 40.0,
            pad_y: 40.0,
            col_gap: 320.0,
            row_gap: 300.0,
            node_width: 280.0,
            node_height: 160.0,
        }
    }

    /// The grid-derived position for a node's logical cell.
    pub fn seeded(&self, node: &DiagramNode) -> (f64, f64) {
        (
            self.pad_x + f64::from(node.column) * self.col_gap,
            self.pad_y + node.row * self.row_gap,
        )
    }
}

/// Axis-aligned node box in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ResolvedBounds {
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Edge anchor on the left side, vertically centered.
    pub fn left_center(&self) -> (f64, f64) {
        (self.x, self.y + self.height / 2.0)
    }

    /// Edge anchor on the right side, vertically centered.
    pub fn right_center(&self) -> (f64, f64) {
        (self.x + self.width, self.y + self.height / 2.0)
    }
}

/// The session's drag overrides: node id → pinned canvas position.
/// Everything not in the map keeps its seeded grid position.
#[derive(Debug, Clone, Default)]
pub struct LayoutState {
    pinned: HashMap<NodeId, (f64, f64)>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a node at an explicit canvas position. Coordinates are clamped
    /// to ≥ (0, 0) so a node can't be dragged permanently off-canvas.
    pub fn pin(&mut self, id: NodeId, x: f64, y: f64) {
        self.pinned.insert(id, (x.max(0.0), y.max(0.0)));
    }

    pub fn is_pinned(&self, id: NodeId) -> bool {
        self.pinned.contains_key(&id)
    }

    pub fn pin_count(&self) -> usize {
        self.pinned.len()
    }

    /// Resolve one node: pinned position if present, else the grid seed.
    pub fn position(&self, node: &DiagramNode, grid: &GridSpec) -> (f64, f64) {
        self.pinned
            .get(&node.id)
            .copied()
            .unwrap_or_else(|| grid.seeded(node))
    }

    /// Drop all pins, restoring every node to its seeded position.
    pub fn reset(&mut self) {
        self.pinned.clear();
    }
}

/// Resolve the full diagram to canvas-space node boxes.
pub fn resolve_layout(
    diagram: &Diagram,
    layout: &LayoutState,
    grid: &GridSpec,
) -> HashMap<NodeId, ResolvedBounds> {
    diagram
        .nodes()
        .map(|node| {
            let (x, y) = layout.position(node, grid);
            (
                node.id,
                ResolvedBounds {
                    x,
                    y,
                    width: grid.node_width,
                    height: grid.node_height,
                },
            )
        })
        .collect()
}
