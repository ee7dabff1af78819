pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, DockError, LayoutError};
pub use id::{new_id, TabId};
pub use types::{Orientation, Point, Rect, Size};

pub type Result<T> = std::result::Result<T, DockError>;
