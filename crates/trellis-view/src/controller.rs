//! Pan and drag gesture controllers.
//!
//! Each controller is a small state machine fed by the canvas from
//! pointer events: `Idle → active → Idle`. Pointer-up or pointer-leave
//! unconditionally ends a gesture, and ending an already-ended gesture
//! is a no-op.

use crate::viewport::ViewportTransform;
use kurbo::{Point, Vec2};
use trellis_core::NodeId;

/// Screen-space distance below which a press-release on a node counts as
/// a click (selection) rather than a drag.
pub const CLICK_DRAG_THRESHOLD: f64 = 4.0;

// ─── Pan ─────────────────────────────────────────────────────────────────

/// Background drag → viewport pan. Holds the grab offset
/// `screen - pan` so the move handler is a single subtraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanController {
    grab: Option<Vec2>,
}

impl PanController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.grab.is_some()
    }

    pub fn begin(&mut self, screen: Point, viewport: &ViewportTransform) {
        self.grab = Some(screen.to_vec2() - viewport.pan());
    }

    /// New pan offset for the current pointer position, unclamped —
    /// panning has no bounds. `None` while idle.
    pub fn update(&self, screen: Point) -> Option<Vec2> {
        self.grab.map(|grab| screen.to_vec2() - grab)
    }

    pub fn end(&mut self) {
        self.grab = None;
    }
}

// ─── Drag ────────────────────────────────────────────────────────────────

/// What a finished node gesture turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// No gesture was active.
    Idle,
    /// The pointer never cleared the click threshold: treat as a click.
    Click(NodeId),
    /// The node was actually dragged.
    Dragged(NodeId),
}

#[derive(Debug, Clone, Copy)]
struct DragGesture {
    node: NodeId,
    /// Canvas-space offset from the node origin to the grab point.
    grab: Vec2,
    /// Screen position of the press, for the click threshold.
    origin: Point,
    moved: bool,
}

/// Node drag → position override. One node at a time; node-vs-background
/// target resolution upstream makes a concurrent pan impossible.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragController {
    gesture: Option<DragGesture>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Start a gesture on `node`. The grab offset is computed through the
    /// *current* viewport so it stays correct at any zoom level.
    pub fn begin(
        &mut self,
        node: NodeId,
        screen: Point,
        node_pos: Point,
        viewport: &ViewportTransform,
    ) {
        let grab = viewport.to_canvas(screen) - node_pos;
        self.gesture = Some(DragGesture {
            node,
            grab,
            origin: screen,
            moved: false,
        });
    }

    /// New canvas position for the dragged node, or `None` while idle or
    /// still inside the click threshold. Once the threshold is cleared
    /// the gesture stays a drag.
    pub fn update(&mut self, screen: Point, viewport: &ViewportTransform) -> Option<(NodeId, Point)> {
        let gesture = self.gesture.as_mut()?;
        if !gesture.moved {
            if (screen - gesture.origin).hypot() < CLICK_DRAG_THRESHOLD {
                return None;
            }
            gesture.moved = true;
        }
        let pos = viewport.to_canvas(screen) - gesture.grab;
        Some((gesture.node, pos.to_point()))
    }

    /// Finish the gesture on pointer-up.
    pub fn end(&mut self) -> DragOutcome {
        match self.gesture.take() {
            None => DragOutcome::Idle,
            Some(g) if g.moved => DragOutcome::Dragged(g.node),
            Some(g) => DragOutcome::Click(g.node),
        }
    }

    /// Abandon the gesture without an outcome (pointer left the canvas).
    pub fn abort(&mut self) {
        self.gesture = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pan_tracks_pointer_delta() {
        let mut viewport = ViewportTransform::new();
        let mut pan = PanController::new();

        pan.begin(Point::new(200.0, 150.0), &viewport);
        let moved = pan.update(Point::new(230.0, 110.0)).unwrap();
        assert_eq!(moved, Vec2::new(30.0, -40.0));
        viewport.set_pan(moved);

        // Restarting from the new pan keeps the motion continuous.
        pan.end();
        pan.begin(Point::new(230.0, 110.0), &viewport);
        let moved = pan.update(Point::new(230.0, 100.0)).unwrap();
        assert_eq!(moved, Vec2::new(30.0, -50.0));
    }

    #[test]
    fn pan_is_unbounded() {
        let viewport = ViewportTransform::new();
        let mut pan = PanController::new();
        pan.begin(Point::new(0.0, 0.0), &viewport);
        let moved = pan.update(Point::new(-5000.0, -5000.0)).unwrap();
        assert_eq!(moved, Vec2::new(-5000.0, -5000.0));
    }

    #[test]
    fn ending_an_ended_pan_is_a_no_op() {
        let viewport = ViewportTransform::new();
        let mut pan = PanController::new();
        pan.begin(Point::new(10.0, 10.0), &viewport);
        pan.end();
        pan.end();
        assert!(!pan.is_active());
        assert_eq!(pan.update(Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn drag_grab_offset_is_zoom_correct() {
        let mut viewport = ViewportTransform::new();
        // zoom 2.0
        for _ in 0..10 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.zoom(), 2.0);

        let node = NodeId::intern("dragged");
        let mut drag = DragController::new();
        // Node at canvas (100, 100); grab at its center, screen (220, 220).
        drag.begin(node, Point::new(220.0, 220.0), Point::new(100.0, 100.0), &viewport);

        // A 40-px screen move is a 20-px canvas move at zoom 2.
        let (id, pos) = drag.update(Point::new(260.0, 220.0), &viewport).unwrap();
        assert_eq!(id, node);
        assert!((pos.x - 120.0).abs() < 1e-9);
        assert!((pos.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn sub_threshold_release_is_a_click() {
        let viewport = ViewportTransform::new();
        let node = NodeId::intern("clicked");
        let mut drag = DragController::new();

        drag.begin(node, Point::new(100.0, 100.0), Point::new(80.0, 60.0), &viewport);
        // Two jittery moves inside the threshold: no position updates.
        assert_eq!(drag.update(Point::new(101.0, 101.0), &viewport), None);
        assert_eq!(drag.update(Point::new(99.0, 102.0), &viewport), None);
        assert_eq!(drag.end(), DragOutcome::Click(node));
    }

    #[test]
    fn crossing_the_threshold_commits_to_a_drag() {
        let viewport = ViewportTransform::new();
        let node = NodeId::intern("moved");
        let mut drag = DragController::new();

        drag.begin(node, Point::new(100.0, 100.0), Point::new(80.0, 60.0), &viewport);
        assert!(drag.update(Point::new(110.0, 100.0), &viewport).is_some());
        // Even back at the press point, the gesture stays a drag.
        assert!(drag.update(Point::new(100.0, 100.0), &viewport).is_some());
        assert_eq!(drag.end(), DragOutcome::Dragged(node));
    }

    #[test]
    fn end_and_abort_are_idempotent() {
        let mut drag = DragController::new();
        assert_eq!(drag.end(), DragOutcome::Idle);
        drag.abort();
        assert_eq!(drag.end(), DragOutcome::Idle);
    }
}
