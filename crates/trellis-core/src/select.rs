//! Selection and one-hop neighborhood highlighting.
//!
//! Selecting a node lifts it and its immediate upstream/downstream
//! neighbors out of the crowd; everything else dims. Dimmed nodes stay
//! clickable, so clicking one re-centers the selection on it.

use crate::id::NodeId;
use crate::model::Diagram;
use std::collections::HashSet;

/// The current selection: at most one node. Clicking the selected node
/// again clears it; clicking the background clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selection {
    current: Option<NodeId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.current
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Select `id`, or clear if it is already selected.
    pub fn toggle(&mut self, id: NodeId) {
        self.current = if self.current == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The highlight closure around the selected node, or `None` when
    /// nothing is selected.
    pub fn neighborhood(&self, diagram: &Diagram) -> Option<Neighborhood> {
        self.current.map(|focus| Neighborhood::around(diagram, focus))
    }
}

/// Highlight closure of a selection: the focus node, every edge incident
/// to it, and every node those edges touch.
#[derive(Debug, Clone)]
pub struct Neighborhood {
    pub focus: NodeId,
    pub nodes: HashSet<NodeId>,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl Neighborhood {
    fn around(diagram: &Diagram, focus: NodeId) -> Self {
        let edges: Vec<(NodeId, NodeId)> = diagram
            .edges()
            .filter(|&(from, to)| from == focus || to == focus)
            .collect();

        let mut nodes = HashSet::with_capacity(edges.len() + 1);
        nodes.insert(focus);
        for &(from, to) in &edges {
            nodes.insert(from);
            nodes.insert(to);
        }

        Self { focus, nodes, edges }
    }

    /// Whether `id` should render de-emphasized under this selection.
    pub fn dims(&self, id: NodeId) -> bool {
        !self.nodes.contains(&id)
    }

    /// Whether the edge `(from, to)` is part of the highlight.
    pub fn highlights_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edges.iter().any(|&e| e == (from, to))
    }
}
