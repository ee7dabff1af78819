//! Dockable tab layout engine.
//!
//! A [`TabDock`] owns a tree of split [`Group`]s whose leaves are tabbed
//! [`Folder`]s. The host supplies tab contents through [`TabHost`], feeds in
//! bounds and pointer events, and gets back [`DockEvent`]s.

pub mod blueprint;
pub mod dock;
pub mod drag;
pub mod element;
pub mod folder;
pub mod group;
pub mod headless;
pub mod hover;
pub mod merge;
pub mod metrics;
pub mod snapshot;
pub mod tab;
pub mod visit;

pub use blueprint::{BlueprintNode, LayoutBlueprint};
pub use dock::{DockEvent, TabDock};
pub use drag::{Drag, DragController, DragState, DropLocation, DropTarget, Release};
pub use element::{Element, ElementPath, UNSIZED};
pub use folder::{pack_rows, Folder};
pub use group::Group;
pub use headless::{HeadlessContent, HeadlessHost};
pub use hit_test::HitContext;
pub use hover::Hover;
pub use merge::MergeState;
pub use metrics::DockMetrics;
pub use snapshot::LayoutSnapshot;
pub use tab::{Tab, TabContent, TabHost, TabInfo};
pub use visit::Visitor;
