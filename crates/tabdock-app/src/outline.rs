//! Indented text rendering of a dock tree.

use tabdock_common::Orientation;
use tabdock_layout::{TabInfo, Visitor};

/// Visitor that writes one line per group, folder and tab.
#[derive(Debug, Default)]
pub struct OutlinePrinter {
    depth: usize,
    out: String,
}

impl OutlinePrinter {
    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }
}

fn weight_label(weight: i32) -> String {
    if weight < 0 {
        "unsized".to_string()
    } else {
        weight.to_string()
    }
}

impl Visitor for OutlinePrinter {
    fn enter_group(&mut self, orientation: Orientation, weight: i32) {
        let axis = match orientation {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        };
        self.line(&format!("group {axis} [{}]", weight_label(weight)));
        self.depth += 1;
    }

    fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn enter_folder(&mut self, weight: i32) {
        self.line(&format!("folder [{}]", weight_label(weight)));
        self.depth += 1;
    }

    fn tab(&mut self, info: &TabInfo) {
        self.line(&format!("{} \"{}\"", info.id, info.label));
    }

    fn leave_folder(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
