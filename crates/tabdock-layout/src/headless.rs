//! A host without a windowing system. Titles are measured with a fixed
//! glyph width and content only records what the engine tells it. Used by
//! the command-line driver and by tests.

use std::cell::RefCell;
use std::rc::Rc;

use tabdock_common::{Rect, Size, TabId};

use crate::tab::{TabContent, TabHost, TabInfo};

/// Content that remembers its last bounds and visibility.
#[derive(Debug)]
pub struct HeadlessContent {
    id: TabId,
    bounds: Option<Rect>,
    visible: bool,
    disposed: Rc<RefCell<Vec<TabId>>>,
}

impl HeadlessContent {
    pub fn id(&self) -> &TabId {
        &self.id
    }

    /// Bounds from the last layout pass, if any.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl TabContent for HeadlessContent {
    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn dispose(self) {
        self.disposed.borrow_mut().push(self.id);
    }
}

#[derive(Debug)]
pub struct HeadlessHost {
    pub glyph_width: i32,
    pub line_height: i32,
    created: Vec<TabId>,
    disposed: Rc<RefCell<Vec<TabId>>>,
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new(8, 14)
    }
}

impl HeadlessHost {
    pub fn new(glyph_width: i32, line_height: i32) -> Self {
        Self {
            glyph_width,
            line_height,
            created: Vec::new(),
            disposed: Rc::default(),
        }
    }

    /// Ids of every tab whose content was created, in creation order.
    pub fn created(&self) -> &[TabId] {
        &self.created
    }

    /// Ids of every tab whose content was disposed, in disposal order.
    pub fn disposed(&self) -> Vec<TabId> {
        self.disposed.borrow().clone()
    }
}

impl TabHost for HeadlessHost {
    type Content = HeadlessContent;

    fn create_content(&mut self, info: &TabInfo) -> HeadlessContent {
        self.created.push(info.id.clone());
        HeadlessContent {
            id: info.id.clone(),
            bounds: None,
            visible: false,
            disposed: Rc::clone(&self.disposed),
        }
    }

    fn measure_title(&self, label: &str, _selected: bool) -> Size {
        Size::new(label.chars().count() as i32 * self.glyph_width, self.line_height)
    }
}
