//! Edge routing: node boxes → kurbo paths in canvas space.
//!
//! The viewport transform is applied to the whole render group, so paths
//! are authored untransformed.

use kurbo::{BezPath, Point};
use trellis_core::ResolvedBounds;

/// How node anchors and edge shapes are chosen for a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    /// Left-to-right stage columns: edges leave the source box's
    /// right-center and enter the target box's left-center as a
    /// horizontal cubic S-curve.
    #[default]
    LeftToRight,
    /// Freely dragged grid: straight center-to-center segments.
    Free,
}

/// Route one edge between two resolved node boxes.
///
/// The `LeftToRight` curve is `M x1,y1 C mx,y1 mx,y2 x2,y2` with
/// `mx = (x1+x2)/2` — visually stable under any vertical offset between
/// the endpoints.
pub fn route_edge(
    from: &ResolvedBounds,
    to: &ResolvedBounds,
    direction: LayoutDirection,
) -> BezPath {
    let mut path = BezPath::new();
    match direction {
        LayoutDirection::LeftToRight => {
            let (x1, y1) = from.right_center();
            let (x2, y2) = to.left_center();
            let mx = (x1 + x2) / 2.0;
            path.move_to(Point::new(x1, y1));
            path.curve_to(
                Point::new(mx, y1),
                Point::new(mx, y2),
                Point::new(x2, y2),
            );
        }
        LayoutDirection::Free => {
            let (x1, y1) = from.center();
            let (x2, y2) = to.center();
            path.move_to(Point::new(x1, y1));
            path.line_to(Point::new(x2, y2));
        }
    }
    path
}
