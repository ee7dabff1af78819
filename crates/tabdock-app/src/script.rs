//! Replayable scripts of pointer gestures and dock operations.

use std::path::Path;

use serde::Deserialize;
use tabdock_common::{DockError, Point, Rect, TabId};
use tabdock_layout::{DockEvent, ElementPath, TabDock, TabHost, TabInfo};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One scripted action. Coordinates are container pixels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Resize { width: i32, height: i32 },
    Down { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Up { x: i32, y: i32 },
    Show { tab: TabId },
    Dispose { tab: TabId },
    AddFirst { id: TabId, label: String },
    AddLargest { id: TabId, label: String },
    Maximize { path: Vec<usize> },
}

impl Script {
    pub fn load(path: &Path) -> Result<Self, DockError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, DockError> {
        toml::from_str(content).map_err(|e| DockError::Script(format!("failed to parse: {e}")))
    }

    /// Apply every step in order. Returns a line per host notification.
    pub fn run<H: TabHost>(&self, dock: &mut TabDock<H>) -> Result<Vec<String>, DockError> {
        let mut log = Vec::new();
        for (n, step) in self.steps.iter().enumerate() {
            debug!(step = n, ?step, "running step");
            if let Some(event) = apply(dock, step)? {
                let line = describe(&event);
                info!("{line}");
                log.push(line);
            }
        }
        Ok(log)
    }
}

fn apply<H: TabHost>(dock: &mut TabDock<H>, step: &Step) -> Result<Option<DockEvent>, DockError> {
    let event = match step {
        Step::Resize { width, height } => {
            dock.set_bounds(Rect::new(0, 0, *width, *height));
            None
        }
        Step::Down { x, y } => dock.on_mouse_down(Point::new(*x, *y)),
        Step::Move { x, y } => {
            dock.on_mouse_move(Point::new(*x, *y));
            None
        }
        Step::Up { x, y } => dock.on_mouse_up(Point::new(*x, *y)),
        Step::Show { tab } => {
            if !dock.show_tab(tab) {
                return Err(DockError::Script(format!("no such tab: {tab}")));
            }
            None
        }
        Step::Dispose { tab } => {
            if !dock.dispose_tab(tab) {
                return Err(DockError::Script(format!("no such tab: {tab}")));
            }
            None
        }
        Step::AddFirst { id, label } => {
            dock.add_tab_to_first_folder(TabInfo::new(id.clone(), label.as_str()))?;
            None
        }
        Step::AddLargest { id, label } => {
            dock.add_tab_to_largest_folder(TabInfo::new(id.clone(), label.as_str()))?;
            None
        }
        Step::Maximize { path } => {
            let path = ElementPath::from(path.clone());
            let maximized = dock
                .toggle_maximize(&path)
                .ok_or_else(|| DockError::Script(format!("no folder at {path:?}")))?;
            Some(DockEvent::MaximizeToggled { maximized })
        }
    };
    Ok(event)
}

fn describe(event: &DockEvent) -> String {
    match event {
        DockEvent::TabShown(id) => format!("shown {id}"),
        DockEvent::TabMoved(id) => format!("moved {id}"),
        DockEvent::CloseRequested(id) => format!("close requested {id}"),
        DockEvent::MaximizeToggled { maximized } => format!("maximized {maximized}"),
    }
}
