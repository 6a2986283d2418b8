//! Viewport transform: the pan+zoom mapping between canvas space and
//! screen space.
//!
//! Rendering applies `as_affine()` to the whole render group, so nodes
//! and edges are authored in canvas space and projected in one step;
//! `to_canvas` is the inverse used on incoming pointer positions.

use kurbo::{Affine, Point, Vec2};

pub const ZOOM_MIN: f64 = 0.4;
pub const ZOOM_MAX: f64 = 2.0;
/// Step applied by the zoom buttons.
pub const ZOOM_STEP: f64 = 0.15;
/// Zoom level of the "fit" action.
pub const FIT_ZOOM: f64 = 0.8;

/// Pan offset and zoom scale of one canvas. Zoom is always clamped to
/// `[ZOOM_MIN, ZOOM_MAX]`, so the transform is always invertible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    pan: Vec2,
    zoom: f64,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl ViewportTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Panning has no bounds; any offset is valid.
    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
    }

    /// Screen → canvas: `(screen - pan) / zoom`.
    pub fn to_canvas(&self, screen: Point) -> Point {
        ((screen.to_vec2() - self.pan) / self.zoom).to_point()
    }

    /// Canvas → screen: inverse of [`Self::to_canvas`].
    pub fn to_screen(&self, canvas: Point) -> Point {
        (canvas.to_vec2() * self.zoom + self.pan).to_point()
    }

    /// The render-group projection: `translate(pan) * scale(zoom)`.
    pub fn as_affine(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }

    /// Button zoom, anchored at the canvas origin. Pan is deliberately
    /// left alone here; see `zoom_about` for the cursor-anchored path.
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Multiply zoom by `factor`, adjusting pan so the canvas point under
    /// `anchor` stays fixed on screen. Used by wheel/pinch input.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) {
        let new_zoom = (self.zoom * factor).clamp(ZOOM_MIN, ZOOM_MAX);
        if (new_zoom - self.zoom).abs() < 1e-9 {
            return;
        }
        let fixed = self.to_canvas(anchor);
        self.zoom = new_zoom;
        self.pan = anchor.to_vec2() - fixed.to_vec2() * new_zoom;
    }

    /// Back to identity: pan (0,0), zoom 1.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The "fit all" preset: origin pan at a zoomed-out scale.
    pub fn fit(&mut self) {
        self.pan = Vec2::ZERO;
        self.zoom = FIT_ZOOM;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_anchored_zoom_projection() {
        let mut vp = ViewportTransform::new();
        vp.zoom_in(); // 1.0 → 1.15

        // A node at canvas (100, 0) renders at screen x = 100 * 1.15.
        let screen = vp.to_screen(Point::new(100.0, 0.0));
        assert!((screen.x - 115.0).abs() < 1e-9);
        assert!((screen.y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn to_canvas_inverts_to_screen() {
        let mut vp = ViewportTransform::new();
        vp.set_pan(Vec2::new(-37.5, 120.0));
        vp.zoom_in();
        vp.zoom_in();

        let canvas = Point::new(412.0, 96.5);
        let roundtrip = vp.to_canvas(vp.to_screen(canvas));
        assert!((roundtrip.x - canvas.x).abs() < 1e-9);
        assert!((roundtrip.y - canvas.y).abs() < 1e-9);

        // And the affine agrees with to_screen.
        let projected = vp.as_affine() * canvas;
        let direct = vp.to_screen(canvas);
        assert!((projected.x - direct.x).abs() < 1e-9);
        assert!((projected.y - direct.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_clamps_at_both_ends() {
        let mut vp = ViewportTransform::new();
        for _ in 0..20 {
            vp.zoom_in();
        }
        assert_eq!(vp.zoom(), ZOOM_MAX);
        for _ in 0..40 {
            vp.zoom_out();
        }
        assert_eq!(vp.zoom(), ZOOM_MIN);
        assert!(vp.zoom() > 0.0);
    }

    #[test]
    fn zoom_about_keeps_anchor_fixed() {
        let mut vp = ViewportTransform::new();
        vp.set_pan(Vec2::new(40.0, -20.0));

        let anchor = Point::new(300.0, 200.0);
        let before = vp.to_canvas(anchor);
        vp.zoom_about(anchor, 1.25);
        let after = vp.to_canvas(anchor);

        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);
        assert!((vp.zoom() - 1.25).abs() < 1e-9);
    }

    #[test]
    fn zoom_about_at_the_clamp_is_a_no_op() {
        let mut vp = ViewportTransform::new();
        let pan_before = vp.pan();
        for _ in 0..10 {
            vp.zoom_about(Point::new(100.0, 100.0), 2.0);
        }
        assert_eq!(vp.zoom(), ZOOM_MAX);
        let pan_at_max = vp.pan();
        // Further zooming in moves neither zoom nor pan.
        vp.zoom_about(Point::new(100.0, 100.0), 2.0);
        assert_eq!(vp.pan(), pan_at_max);
        assert_ne!(pan_before, pan_at_max);
    }

    #[test]
    fn reset_and_fit() {
        let mut vp = ViewportTransform::new();
        vp.set_pan(Vec2::new(99.0, 99.0));
        vp.zoom_in();

        vp.fit();
        assert_eq!(vp.pan(), Vec2::ZERO);
        assert_eq!(vp.zoom(), FIT_ZOOM);

        vp.reset();
        assert_eq!(vp.pan(), Vec2::ZERO);
        assert_eq!(vp.zoom(), 1.0);
    }
}
