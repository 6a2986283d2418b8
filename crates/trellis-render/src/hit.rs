//! Canvas-space hit testing.
//!
//! Dispatch order is explicit rather than renderer-dependent: callers
//! pass node boxes in paint order (bottom first) and the topmost hit
//! wins. A miss means the background was pressed.

use trellis_core::{NodeId, ResolvedBounds};

/// Find the topmost node at canvas position `(px, py)`, or `None` for
/// the background. Dimmed nodes are passed in like any other — they stay
/// clickable.
pub fn hit_test(px: f64, py: f64, paint_order: &[(NodeId, ResolvedBounds)]) -> Option<NodeId> {
    paint_order
        .iter()
        .rev()
        .find(|(_, bounds)| bounds.contains(px, py))
        .map(|&(id, _)| id)
}
