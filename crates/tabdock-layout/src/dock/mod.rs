//! The dock: a layout tree driven by host calls and pointer input.

mod api;
mod input;
mod layout_compute;
mod types;

pub use types::*;
