//! Tree simplification after structural changes.
//!
//! Empty folders and groups are removed, groups left with a single child
//! are replaced by that child, and groups running the same way as their
//! parent are spliced into it.

use tracing::debug;

use crate::element::Element;
use crate::folder::Folder;
use crate::group::Group;

/// What a node asks of its parent after merging its own subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeState {
    Keep,
    Remove,
    /// A group with exactly one child, to be replaced by that child.
    Collapse,
}

impl<C> Folder<C> {
    pub fn merge(&self) -> MergeState {
        if self.tabs.is_empty() {
            MergeState::Remove
        } else {
            MergeState::Keep
        }
    }
}

impl<C> Element<C> {
    pub fn merge(&mut self) -> MergeState {
        match self {
            Element::Group(g) => g.merge(),
            Element::Folder(f) => f.merge(),
        }
    }
}

impl<C> Group<C> {
    /// Simplify this subtree. The returned state is for the parent to act
    /// on; the root ignores it and may keep a single child.
    pub fn merge(&mut self) -> MergeState {
        let children = std::mem::take(&mut self.children);
        for mut child in children {
            match (child.merge(), child) {
                (MergeState::Remove, _) => {
                    debug!("merge: removed empty element");
                }
                (MergeState::Collapse, Element::Group(mut group)) => {
                    if let Some(mut only) = group.children.pop() {
                        debug!(weight = group.weight, "merge: collapsed single-child group");
                        only.set_weight(group.weight);
                        self.adopt(only);
                    }
                }
                (_, child) => self.adopt(child),
            }
        }

        match self.children.len() {
            0 => MergeState::Remove,
            1 => MergeState::Collapse,
            _ => MergeState::Keep,
        }
    }

    /// Append a surviving child, splicing in the children of a group that
    /// runs the same way as this one.
    fn adopt(&mut self, child: Element<C>) {
        match child {
            Element::Group(group) if group.orientation == self.orientation => {
                let weights = spliced_weights(&group.children, group.weight);
                debug!(
                    count = group.children.len(),
                    weight = group.weight,
                    "merge: flattened same-orientation group"
                );
                for (mut grandchild, weight) in group.children.into_iter().zip(weights) {
                    grandchild.set_weight(weight);
                    self.children.push(grandchild);
                }
            }
            other => self.children.push(other),
        }
    }
}

/// Rescale `children` to share `slot` in proportion to their weights. If any
/// of them is unsized, `slot` is split equally instead.
fn spliced_weights<C>(children: &[Element<C>], slot: i32) -> Vec<i32> {
    let sum: i64 = children.iter().map(|c| i64::from(c.weight())).sum();
    if sum <= 0 || children.iter().any(|c| c.weight() <= 0) {
        let n = children.len().max(1) as i32;
        return vec![slot / n; children.len()];
    }
    children
        .iter()
        .map(|c| (i64::from(c.weight()) * i64::from(slot) / sum) as i32)
        .collect()
}
