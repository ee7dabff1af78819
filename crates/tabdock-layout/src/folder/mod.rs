//! Folders: the tabbed leaves of the layout tree.

mod bounds;
mod operations;
mod rows;
mod types;

pub use rows::pack_rows;
pub use types::*;
