//! Category and text filtering.
//!
//! Filtering decides what is *rendered*, never what is *stored*: hidden
//! nodes and edges stay in the diagram and come back when the filter is
//! relaxed. An edge is visible only while both endpoints are.

use crate::id::{CategoryId, NodeId};
use crate::model::{Diagram, DiagramNode};
use std::collections::HashSet;

/// The active filter. `category: None` means "all categories"; `query`
/// is a case-insensitive substring match on node labels; `show_edges`
/// is the global relationships toggle.
#[derive(Debug, Clone)]
pub struct FilterState {
    pub category: Option<CategoryId>,
    pub query: String,
    pub show_edges: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: None,
            query: String::new(),
            show_edges: true,
        }
    }
}

impl FilterState {
    /// Whether a single node passes the filter. Category and text
    /// predicates AND together.
    pub fn matches(&self, node: &DiagramNode) -> bool {
        if let Some(category) = self.category
            && node.category != category
        {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }
        node.label
            .to_lowercase()
            .contains(&self.query.to_lowercase())
    }

    /// Ids of all nodes that pass the filter.
    pub fn visible_nodes(&self, diagram: &Diagram) -> HashSet<NodeId> {
        diagram
            .nodes()
            .filter(|n| self.matches(n))
            .map(|n| n.id)
            .collect()
    }

    /// Edges with both endpoints visible, in model order. Empty while the
    /// relationships toggle is off.
    pub fn visible_edges(&self, diagram: &Diagram) -> Vec<(NodeId, NodeId)> {
        if !self.show_edges {
            return Vec::new();
        }
        let visible = self.visible_nodes(diagram);
        diagram
            .edges()
            .filter(|(from, to)| visible.contains(from) && visible.contains(to))
            .collect()
    }
}
