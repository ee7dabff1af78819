//! Serializable description of a layout tree: the initial arrangement a
//! host loads, and what a snapshot of a live tree produces.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tabdock_common::{LayoutError, Orientation};

use crate::element::UNSIZED;
use crate::group::Group;
use crate::tab::{Tab, TabHost, TabInfo};

fn default_weight() -> i32 {
    UNSIZED
}

/// The root of a layout. Nested groups alternate orientation, so only the
/// root names one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutBlueprint {
    pub orientation: Orientation,
    #[serde(default)]
    pub children: Vec<BlueprintNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlueprintNode {
    Group {
        #[serde(default = "default_weight")]
        weight: i32,
        #[serde(default)]
        children: Vec<BlueprintNode>,
    },
    Folder {
        #[serde(default = "default_weight")]
        weight: i32,
        #[serde(default)]
        tabs: Vec<TabInfo>,
    },
}

impl LayoutBlueprint {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            children: Vec::new(),
        }
    }

    /// Check that every tab id is non-empty and unique.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen = HashSet::new();
        let mut pending: Vec<&BlueprintNode> = self.children.iter().collect();
        while let Some(node) = pending.pop() {
            match node {
                BlueprintNode::Group { children, .. } => pending.extend(children),
                BlueprintNode::Folder { tabs, .. } => {
                    for info in tabs {
                        if info.id.as_str().is_empty() {
                            return Err(LayoutError::InvalidBlueprint(format!(
                                "tab \"{}\" has an empty id",
                                info.label
                            )));
                        }
                        if !seen.insert(&info.id) {
                            return Err(LayoutError::DuplicateTab(info.id.clone()));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Number of tabs in the blueprint.
    pub fn tab_count(&self) -> usize {
        fn count(nodes: &[BlueprintNode]) -> usize {
            nodes
                .iter()
                .map(|n| match n {
                    BlueprintNode::Group { children, .. } => count(children),
                    BlueprintNode::Folder { tabs, .. } => tabs.len(),
                })
                .sum()
        }
        count(&self.children)
    }

    /// Instantiate the tree, creating every tab's content through `host`.
    /// The result is not merged.
    pub fn build<H: TabHost>(&self, host: &mut H) -> Group<H::Content> {
        let mut root = Group::new(self.orientation, 1);
        build_children(&mut root, &self.children, host);
        root
    }
}

fn build_children<H: TabHost>(group: &mut Group<H::Content>, nodes: &[BlueprintNode], host: &mut H) {
    for node in nodes {
        match node {
            BlueprintNode::Folder { weight, tabs } => {
                let index = group.push_folder(*weight);
                if let Some(folder) = group.folder_at_mut(&[index]) {
                    for info in tabs {
                        folder.add_tab(Tab::create(info.clone(), host));
                    }
                }
            }
            BlueprintNode::Group { weight, children } => {
                let index = group.push_group(*weight);
                if let Some(inner) = group.group_at_mut(&[index]) {
                    build_children(inner, children, host);
                }
            }
        }
    }
}
