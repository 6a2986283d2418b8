//! The diagram canvas: composition root.
//!
//! Owns every piece of mutable canvas state — viewport, drag overrides,
//! filter, selection — and is the only writer of any of it. Pointer
//! events come in through [`DiagramCanvas::handle_input`]; user-facing
//! controls (zoom buttons, filter chips, search box, toggles) map 1:1 to
//! methods; the inspector collaborator reads selection and the one-hop
//! queries.

use crate::controller::{DragController, DragOutcome, PanController};
use crate::input::InputEvent;
use crate::viewport::ViewportTransform;
use kurbo::Point;
use std::collections::HashMap;
use trellis_core::{
    CategoryId, Diagram, DiagramNode, FilterState, GridSpec, LayoutState, NodeId, NodeStatus,
    ResolvedBounds, Selection, StatusSummary, resolve_layout,
};
use trellis_render::{
    EdgePaint, Emphasis, Frame, LayoutDirection, NodePaint, hit_test, route_edge,
};

/// Stroke of an edge outside any highlight.
const EDGE_STROKE: trellis_core::Color = trellis_core::Color::rgb(0x27, 0x27, 0x2a);
/// Stroke of a dimmed edge.
const EDGE_STROKE_DIM: trellis_core::Color = trellis_core::Color::rgb(0x18, 0x18, 0x1b);

/// Static parameters of one canvas instance: the seeded grid plus the
/// direction flag that picks anchors and edge shapes.
#[derive(Debug, Clone, Copy)]
pub struct CanvasConfig {
    pub grid: GridSpec,
    pub direction: LayoutDirection,
}

impl CanvasConfig {
    /// Pipeline-lineage flavor: stage columns, curved edges.
    pub fn pipeline() -> Self {
        Self {
            grid: GridSpec::pipeline(),
            direction: LayoutDirection::LeftToRight,
        }
    }

    /// Entity-relationship flavor: loose grid, straight edges.
    pub fn schema() -> Self {
        Self {
            grid: GridSpec::schema(),
            direction: LayoutDirection::Free,
        }
    }
}

/// One interactive diagram canvas.
pub struct DiagramCanvas {
    diagram: Diagram,
    config: CanvasConfig,
    viewport: ViewportTransform,
    layout: LayoutState,
    filter: FilterState,
    selection: Selection,
    pan: PanController,
    drag: DragController,
    show_labels: bool,
}

impl DiagramCanvas {
    pub fn new(diagram: Diagram, config: CanvasConfig) -> Self {
        Self {
            diagram,
            config,
            viewport: ViewportTransform::new(),
            layout: LayoutState::new(),
            filter: FilterState::default(),
            selection: Selection::new(),
            pan: PanController::new(),
            drag: DragController::new(),
            show_labels: true,
        }
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    // ─── Pointer input ───────────────────────────────────────────────────

    /// Feed one normalized input event through the gesture state machines.
    /// All transitions happen synchronously; the caller re-renders from
    /// [`Self::frame`] afterwards.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(Point::new(x, y)),
            InputEvent::PointerMove { x, y } => self.pointer_move(Point::new(x, y)),
            InputEvent::PointerUp { .. } => self.pointer_up(),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::Wheel { x, y, delta } => {
                if delta != 0.0 {
                    let factor = if delta > 0.0 { 1.1 } else { 0.9 };
                    self.viewport.zoom_about(Point::new(x, y), factor);
                }
            }
        }
    }

    fn pointer_down(&mut self, screen: Point) {
        let canvas_pt = self.viewport.to_canvas(screen);
        // Explicit dispatch order: topmost node body, else background.
        match self.hit_node(canvas_pt) {
            Some(id) => {
                log::trace!("pointer down on node {id}");
                let bounds = resolve_layout(&self.diagram, &self.layout, &self.config.grid);
                if let Some(b) = bounds.get(&id) {
                    self.drag.begin(id, screen, Point::new(b.x, b.y), &self.viewport);
                }
            }
            None => {
                // Background press: deselect, start panning.
                self.selection.clear();
                self.pan.begin(screen, &self.viewport);
            }
        }
    }

    fn pointer_move(&mut self, screen: Point) {
        if let Some(pan) = self.pan.update(screen) {
            self.viewport.set_pan(pan);
        } else if let Some((id, pos)) = self.drag.update(screen, &self.viewport) {
            // Pin clamps to ≥ (0,0) so the node stays reachable.
            self.layout.pin(id, pos.x, pos.y);
        }
    }

    fn pointer_up(&mut self) {
        self.pan.end();
        match self.drag.end() {
            DragOutcome::Click(id) => self.selection.toggle(id),
            DragOutcome::Dragged(id) => log::debug!("node {id} pinned"),
            DragOutcome::Idle => {}
        }
    }

    fn pointer_leave(&mut self) {
        self.pan.end();
        self.drag.abort();
    }

    fn hit_node(&self, canvas_pt: Point) -> Option<NodeId> {
        let bounds = resolve_layout(&self.diagram, &self.layout, &self.config.grid);
        let order = self.paint_order(&bounds);
        hit_test(canvas_pt.x, canvas_pt.y, &order)
    }

    /// Visible nodes bottom-to-top: data order, with the selected node
    /// lifted to the top.
    fn paint_order(
        &self,
        bounds: &HashMap<NodeId, ResolvedBounds>,
    ) -> Vec<(NodeId, ResolvedBounds)> {
        let visible = self.filter.visible_nodes(&self.diagram);
        let mut order: Vec<(NodeId, ResolvedBounds)> = self
            .diagram
            .nodes()
            .filter(|n| visible.contains(&n.id))
            .filter_map(|n| bounds.get(&n.id).map(|b| (n.id, *b)))
            .collect();
        if let Some(selected) = self.selection.selected()
            && let Some(pos) = order.iter().position(|&(id, _)| id == selected)
        {
            let lifted = order.remove(pos);
            order.push(lifted);
        }
        order
    }

    // ─── Controls ────────────────────────────────────────────────────────

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    /// Reset pan and zoom to identity.
    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// Zoom out to the fit preset.
    pub fn fit_view(&mut self) {
        self.viewport.fit();
    }

    /// Drop every drag override, restoring the seeded grid.
    pub fn reset_layout(&mut self) {
        log::debug!("reset layout ({} pins)", self.layout.pin_count());
        self.layout.reset();
    }

    pub fn toggle_relationships(&mut self) {
        self.filter.show_edges = !self.filter.show_edges;
    }

    pub fn toggle_labels(&mut self) {
        self.show_labels = !self.show_labels;
    }

    /// `None` shows all categories.
    pub fn set_category_filter(&mut self, category: Option<CategoryId>) {
        self.filter.category = category;
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter.query = query.to_string();
    }

    // ─── Inspector surface ───────────────────────────────────────────────

    pub fn selected_node(&self) -> Option<&DiagramNode> {
        self.selection.selected().and_then(|id| self.diagram.node(id))
    }

    pub fn upstream(&self, id: NodeId) -> Vec<&DiagramNode> {
        self.diagram.upstream(id)
    }

    pub fn downstream(&self, id: NodeId) -> Vec<&DiagramNode> {
        self.diagram.downstream(id)
    }

    /// Callback for the inspector's close button.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn status_summary(&self) -> StatusSummary {
        self.diagram.status_summary()
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    /// Build the display list for the current state.
    pub fn frame(&self) -> Frame {
        let bounds = resolve_layout(&self.diagram, &self.layout, &self.config.grid);
        let hood = self.selection.neighborhood(&self.diagram);

        let mut edges = Vec::new();
        for (from, to) in self.filter.visible_edges(&self.diagram) {
            let (Some(from_bounds), Some(to_bounds)) = (bounds.get(&from), bounds.get(&to)) else {
                continue;
            };
            let from_status = self
                .diagram
                .node(from)
                .map(|n| n.status)
                .unwrap_or_default();
            let (emphasis, stroke) = match &hood {
                Some(h) if h.highlights_edge(from, to) => {
                    (Emphasis::Highlighted, from_status.color())
                }
                Some(_) => (Emphasis::Dimmed, EDGE_STROKE_DIM),
                None => (Emphasis::Normal, EDGE_STROKE),
            };
            edges.push(EdgePaint {
                from,
                to,
                path: route_edge(from_bounds, to_bounds, self.config.direction),
                stroke,
                dashed: from_status == NodeStatus::Error,
                emphasis,
            });
        }

        let mut nodes = Vec::new();
        for (id, node_bounds) in self.paint_order(&bounds) {
            let Some(node) = self.diagram.node(id) else {
                continue;
            };
            let Some(category) = self.diagram.categories().get(node.category) else {
                continue;
            };
            let selected = self.selection.selected() == Some(id);
            let emphasis = match &hood {
                Some(h) if h.dims(id) => Emphasis::Dimmed,
                Some(_) => Emphasis::Highlighted,
                None => Emphasis::Normal,
            };
            nodes.push(NodePaint {
                id,
                bounds: node_bounds,
                label: node.label.clone(),
                detail: if self.show_labels {
                    node.detail.clone()
                } else {
                    None
                },
                badge: node.badge.clone(),
                category: category.clone(),
                status: node.status,
                selected,
                emphasis,
            });
        }

        Frame {
            transform: self.viewport.as_affine(),
            edges,
            nodes,
        }
    }
}
