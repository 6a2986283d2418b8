pub mod hit;
pub mod route;
pub mod scene;
pub mod svg;

pub use hit::hit_test;
pub use route::{LayoutDirection, route_edge};
pub use scene::{EdgePaint, Emphasis, Frame, NodePaint};
pub use svg::render_svg;
