pub mod canvas;
pub mod controller;
pub mod input;
pub mod viewport;

pub use canvas::{CanvasConfig, DiagramCanvas};
pub use controller::{CLICK_DRAG_THRESHOLD, DragController, DragOutcome, PanController};
pub use input::InputEvent;
pub use viewport::ViewportTransform;
