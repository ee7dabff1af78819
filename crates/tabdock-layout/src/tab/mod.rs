//! Tabs: a label plus an opaque content handle, measured once at creation.

mod types;

pub use types::*;
