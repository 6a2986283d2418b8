pub mod filter;
pub mod id;
pub mod layout;
pub mod model;
pub mod select;

pub use filter::FilterState;
pub use id::{CategoryId, NodeId};
pub use layout::{GridSpec, LayoutState, ResolvedBounds, resolve_layout};
pub use model::*;
pub use select::{Neighborhood, Selection};
