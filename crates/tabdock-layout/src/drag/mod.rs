//! Tab and separator dragging.

mod controller;
mod drop;
mod types;

pub use controller::DragController;
pub use drop::{DropLocation, DropTarget};
pub use types::*;
