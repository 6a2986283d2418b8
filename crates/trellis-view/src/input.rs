//! Input abstraction layer.
//!
//! Normalizes host pointer events (mouse, touch, wheel) into a unified
//! `InputEvent` enum consumed by the canvas. Coordinates are screen-space
//! pixels relative to the canvas origin.

use kurbo::Point;

/// A normalized input event from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start).
    PointerDown { x: f64, y: f64 },

    /// Pointer moved. Only the latest position matters; hosts may drop
    /// intermediate moves freely.
    PointerMove { x: f64, y: f64 },

    /// Pointer released.
    PointerUp { x: f64, y: f64 },

    /// Pointer left the canvas bounds. Ends any active gesture.
    PointerLeave,

    /// Wheel / pinch. Positive `delta` zooms in, anchored at `(x, y)`.
    Wheel { x: f64, y: f64, delta: f64 },
}

impl InputEvent {
    /// Extract the screen position, if this event carries one.
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::PointerDown { x, y }
            | Self::PointerMove { x, y }
            | Self::PointerUp { x, y }
            | Self::Wheel { x, y, .. } => Some(Point::new(x, y)),
            Self::PointerLeave => None,
        }
    }
}
