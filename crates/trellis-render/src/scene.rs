//! Display-list types: what the canvas hands to an embedder (or the SVG
//! exporter) each time state changes.
//!
//! A frame is already resolved — positions, colors, emphasis — so the
//! embedder only draws. Z-order is encoded in list order: edges under
//! nodes, the selected node last.

use kurbo::{Affine, BezPath};
use trellis_core::{CategoryStyle, Color, NodeId, NodeStatus, ResolvedBounds};

/// Visual emphasis of an element under the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    Normal,
    /// Part of the selection's highlight closure.
    Highlighted,
    /// Outside the closure while a selection is active. Still clickable.
    Dimmed,
}

impl Emphasis {
    /// Render opacity. Dimmed content de-emphasizes without vanishing.
    pub fn opacity(&self) -> f64 {
        match self {
            Emphasis::Normal | Emphasis::Highlighted => 1.0,
            Emphasis::Dimmed => 0.3,
        }
    }
}

/// One node, ready to paint.
#[derive(Debug, Clone)]
pub struct NodePaint {
    pub id: NodeId,
    pub bounds: ResolvedBounds,
    pub label: String,
    /// Metadata line under the label; `None` while the labels toggle is off.
    pub detail: Option<String>,
    pub badge: Option<String>,
    pub category: CategoryStyle,
    pub status: NodeStatus,
    pub selected: bool,
    pub emphasis: Emphasis,
}

/// One routed edge, ready to paint.
#[derive(Debug, Clone)]
pub struct EdgePaint {
    pub from: NodeId,
    pub to: NodeId,
    pub path: BezPath,
    pub stroke: Color,
    /// Dashed when the source node is failing.
    pub dashed: bool,
    pub emphasis: Emphasis,
}

/// A full frame: the render-group transform plus paint lists in z-order.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Single pan+zoom transform applied to the whole group; elements are
    /// authored in canvas space.
    pub transform: Affine,
    pub edges: Vec<EdgePaint>,
    pub nodes: Vec<NodePaint>,
}
