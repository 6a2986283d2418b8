//! Diagram data model.
//!
//! A diagram is a directed graph of typed nodes. Nodes and edges arrive
//! once from an external data source as a [`DiagramSpec`]; after
//! construction the engine treats the graph as read-mostly input. Edges
//! are stored directed (from → to) and rendered in that direction.

use crate::id::{CategoryId, NodeId};
use petgraph::Direction;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;

// ─── Colors ──────────────────────────────────────────────────────────────

/// Opaque RGB color, stored as 3 × u8. Category palettes and status
/// accents are authored as hex strings; alpha is applied separately as
/// an opacity at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RGB` or `#RRGGBB` hex string. The `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let bytes = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
                let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
                let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Emit as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ─── Categories ──────────────────────────────────────────────────────────

/// Style descriptor for one node category. A fixed lookup entry, not
/// user-editable at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStyle {
    pub id: CategoryId,
    /// Human-facing label ("Sources", "Staging", …).
    pub label: String,
    pub fill: Color,
    pub border: Color,
    pub accent: Color,
}

impl CategoryStyle {
    pub fn new(key: &str, label: &str, fill: &str, border: &str, accent: &str) -> Self {
        Self {
            id: CategoryId::intern(key),
            label: label.to_string(),
            fill: Color::from_hex(fill).unwrap_or(Color::rgb(0x18, 0x18, 0x1b)),
            border: Color::from_hex(border).unwrap_or(Color::rgb(0x27, 0x27, 0x2a)),
            accent: Color::from_hex(accent).unwrap_or(Color::rgb(0xa1, 0xa1, 0xaa)),
        }
    }
}

/// Ordered, read-only category table. Order matters: it drives filter
/// chips and per-column header labels, so a `Vec` with linear lookup is
/// deliberate (the set is always small).
#[derive(Debug, Clone, Default)]
pub struct CategoryTable {
    entries: Vec<CategoryStyle>,
}

impl CategoryTable {
    pub fn new(entries: Vec<CategoryStyle>) -> Self {
        Self { entries }
    }

    /// The five pipeline-lineage stages, upstream to downstream.
    pub fn pipeline() -> Self {
        Self::new(vec![
            CategoryStyle::new("source", "Sources", "#1e1b4b", "#4338ca", "#818cf8"),
            CategoryStyle::new("staging", "Staging", "#172554", "#2563eb", "#60a5fa"),
            CategoryStyle::new("intermediate", "Intermediate", "#1a2e05", "#4d7c0f", "#84cc16"),
            CategoryStyle::new("mart", "Marts", "#431407", "#c2410c", "#fb923c"),
            CategoryStyle::new("exposure", "Exposures", "#3b0764", "#9333ea", "#c084fc"),
        ])
    }

    /// Single-category table for entity-relationship diagrams.
    pub fn schema() -> Self {
        Self::new(vec![CategoryStyle::new(
            "entity", "Entities", "#ffffff", "#e2e8f0", "#2563eb",
        )])
    }

    pub fn get(&self, id: CategoryId) -> Option<&CategoryStyle> {
        self.entries.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryStyle> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ─── Node status ─────────────────────────────────────────────────────────

/// Health of the thing a node represents. Drives the status dot, the
/// dashed-edge style for failing sources, and the footer summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    #[default]
    Healthy,
    Warning,
    Error,
}

impl NodeStatus {
    pub fn color(&self) -> Color {
        match self {
            NodeStatus::Healthy => Color::rgb(0x22, 0xc5, 0x5e),
            NodeStatus::Warning => Color::rgb(0xea, 0xb3, 0x08),
            NodeStatus::Error => Color::rgb(0xef, 0x44, 0x44),
        }
    }
}

/// Node counts per status, for the canvas footer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub healthy: usize,
    pub warning: usize,
    pub error: usize,
}

// ─── Attributes ──────────────────────────────────────────────────────────

/// Flags on an entity attribute (ERD column).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttrFlags {
    pub primary_key: bool,
    pub foreign_key: bool,
    pub nullable: bool,
}

/// One attribute of a node, for detail display (name, declared type,
/// key/null flags). The canvas itself only renders counts; the inspector
/// collaborator renders the full list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(flatten)]
    pub flags: AttrFlags,
}

// ─── Data-source specs ───────────────────────────────────────────────────

/// Wire shape of a node as supplied by the data-loading collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    pub label: String,
    pub category: String,
    pub column: u32,
    /// May be fractional to stagger nodes between rows.
    pub row: f64,
    #[serde(default)]
    pub status: NodeStatus,
    /// Free-form metadata line ("1.2M rows", "Sent Mon 9am").
    #[serde(default)]
    pub detail: Option<String>,
    /// Short badge text ("SF", "TB").
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// Wire shape of an edge: a directed pair of node ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
}

/// The full payload handed to [`Diagram::from_spec`] at mount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramSpec {
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
}

// ─── Nodes ───────────────────────────────────────────────────────────────

/// A node in the diagram. Position is *derived* from `(column, row)` by
/// the layout module unless the user drags the node (see
/// `layout::LayoutState`).
#[derive(Debug, Clone)]
pub struct DiagramNode {
    pub id: NodeId,
    pub label: String,
    pub category: CategoryId,
    pub status: NodeStatus,
    pub column: u32,
    pub row: f64,
    pub detail: Option<String>,
    pub badge: Option<String>,
    pub attributes: SmallVec<[Attribute; 8]>,
}

impl DiagramNode {
    fn from_spec(spec: NodeSpec) -> Self {
        Self {
            id: NodeId::intern(&spec.id),
            label: spec.label,
            category: CategoryId::intern(&spec.category),
            status: spec.status,
            column: spec.column,
            row: spec.row,
            detail: spec.detail,
            badge: spec.badge,
            attributes: spec.attributes.into(),
        }
    }

    pub fn attr_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn primary_key_count(&self) -> usize {
        self.attributes.iter().filter(|a| a.flags.primary_key).count()
    }

    pub fn foreign_key_count(&self) -> usize {
        self.attributes.iter().filter(|a| a.flags.foreign_key).count()
    }
}

// ─── Diagram ─────────────────────────────────────────────────────────────

/// The complete diagram: nodes, directed edges, and the category table.
///
/// Backed by a petgraph `StableDiGraph` so node indices stay valid across
/// the diagram's lifetime, plus an id → index map for O(1) lookup by the
/// external ids everything downstream speaks in.
#[derive(Debug, Clone)]
pub struct Diagram {
    graph: StableDiGraph<DiagramNode, ()>,
    id_index: HashMap<NodeId, NodeIndex>,
    categories: CategoryTable,
}

impl Diagram {
    /// Build a diagram from data-source specs.
    ///
    /// Nodes referencing a category missing from `categories`, and
    /// duplicate node ids, are rejected. Edges whose endpoints don't
    /// exist are a data-integrity issue in the upstream collaborator:
    /// they are skipped with a warning rather than surfaced as an error.
    pub fn from_spec(spec: DiagramSpec, categories: CategoryTable) -> Result<Self, String> {
        let mut graph = StableDiGraph::with_capacity(spec.nodes.len(), spec.edges.len());
        let mut id_index = HashMap::with_capacity(spec.nodes.len());

        for node_spec in spec.nodes {
            let node = DiagramNode::from_spec(node_spec);
            if !categories.contains(node.category) {
                return Err(format!(
                    "node {}: unknown category {}",
                    node.id, node.category
                ));
            }
            if id_index.contains_key(&node.id) {
                return Err(format!("duplicate node id {}", node.id));
            }
            let id = node.id;
            let idx = graph.add_node(node);
            id_index.insert(id, idx);
        }

        for edge in &spec.edges {
            let from = NodeId::intern(&edge.from);
            let to = NodeId::intern(&edge.to);
            match (id_index.get(&from), id_index.get(&to)) {
                (Some(&f), Some(&t)) => {
                    graph.add_edge(f, t, ());
                }
                _ => {
                    log::warn!("skipping edge {} -> {}: unknown endpoint", edge.from, edge.to);
                }
            }
        }

        Ok(Self {
            graph,
            id_index,
            categories,
        })
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&DiagramNode> {
        self.id_index.get(&id).map(|&idx| &self.graph[idx])
    }

    /// All nodes, in data-source order.
    pub fn nodes(&self) -> impl Iterator<Item = &DiagramNode> {
        self.graph.node_weights()
    }

    /// All edges as (from, to) id pairs.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.graph.edge_indices().filter_map(|e| {
            let (f, t) = self.graph.edge_endpoints(e)?;
            Some((self.graph[f].id, self.graph[t].id))
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes with an edge *into* `id` (its dependencies).
    pub fn upstream(&self, id: NodeId) -> Vec<&DiagramNode> {
        self.neighbors(id, Direction::Incoming)
    }

    /// Nodes with an edge *out of* `id` (its dependents).
    pub fn downstream(&self, id: NodeId) -> Vec<&DiagramNode> {
        self.neighbors(id, Direction::Outgoing)
    }

    fn neighbors(&self, id: NodeId, dir: Direction) -> Vec<&DiagramNode> {
        let Some(&idx) = self.id_index.get(&id) else {
            return Vec::new();
        };
        let mut out: Vec<&DiagramNode> = self
            .graph
            .neighbors_directed(idx, dir)
            .map(|n| &self.graph[n])
            .collect();
        // petgraph yields most-recent-first; flip back to insertion order.
        out.reverse();
        out
    }

    pub fn status_summary(&self) -> StatusSummary {
        let mut summary = StatusSummary::default();
        for node in self.nodes() {
            match node.status {
                NodeStatus::Healthy => summary.healthy += 1,
                NodeStatus::Warning => summary.warning += 1,
                NodeStatus::Error => summary.error += 1,
            }
        }
        summary
    }
}
