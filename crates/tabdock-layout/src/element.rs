//! The closed sum of tree nodes, and paths that address them.

use tabdock_common::Rect;

use crate::folder::Folder;
use crate::group::Group;
use crate::metrics::DockMetrics;
use crate::tab::TabContent;

/// Weight of an element that has never been sized. Groups containing one
/// split their space equally on the next layout pass.
pub const UNSIZED: i32 = -1;

/// A child of a group: either a nested split or a leaf folder.
#[derive(Debug)]
pub enum Element<C> {
    Group(Group<C>),
    Folder(Folder<C>),
}

impl<C> Element<C> {
    pub fn weight(&self) -> i32 {
        match self {
            Element::Group(g) => g.weight,
            Element::Folder(f) => f.weight,
        }
    }

    pub fn set_weight(&mut self, weight: i32) {
        match self {
            Element::Group(g) => g.weight = weight,
            Element::Folder(f) => f.weight = weight,
        }
    }

    /// Bounds assigned by the last layout pass.
    pub fn bounds(&self) -> Rect {
        match self {
            Element::Group(g) => g.bounds,
            Element::Folder(f) => f.bounds,
        }
    }

    pub fn as_group(&self) -> Option<&Group<C>> {
        match self {
            Element::Group(g) => Some(g),
            Element::Folder(_) => None,
        }
    }

    pub fn as_folder(&self) -> Option<&Folder<C>> {
        match self {
            Element::Folder(f) => Some(f),
            Element::Group(_) => None,
        }
    }
}

impl<C: TabContent> Element<C> {
    pub fn set_bounds(&mut self, rect: Rect, metrics: &DockMetrics) {
        match self {
            Element::Group(g) => g.set_bounds(rect, metrics),
            Element::Folder(f) => f.set_bounds(rect, metrics),
        }
    }
}

/// Child indices from the root group down to an element. The empty path is
/// the root itself. Paths are only valid until the next structural change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ElementPath(Vec<usize>);

impl ElementPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// The parent's path and this element's index in it. `None` for the root.
    pub fn split_last(&self) -> Option<(ElementPath, usize)> {
        let (last, rest) = self.0.split_last()?;
        Some((Self(rest.to_vec()), *last))
    }

    /// Append a path relative to this one.
    pub fn join(&self, relative: &[usize]) -> Self {
        let mut indices = self.0.clone();
        indices.extend_from_slice(relative);
        Self(indices)
    }
}

impl From<Vec<usize>> for ElementPath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path() {
        let root = ElementPath::root();
        assert!(root.is_root());
        assert!(root.split_last().is_none());
    }

    #[test]
    fn child_and_split_last() {
        let path = ElementPath::root().child(2).child(0);
        assert_eq!(path.indices(), &[2, 0]);
        let (parent, index) = path.split_last().unwrap();
        assert_eq!(parent, ElementPath::from(vec![2]));
        assert_eq!(index, 0);
    }

    #[test]
    fn join_appends_relative_indices() {
        let path = ElementPath::from(vec![1]).join(&[3, 0]);
        assert_eq!(path.indices(), &[1, 3, 0]);
    }

    #[test]
    fn element_weight_accessors() {
        let mut folder: Element<()> = Element::Folder(Folder::new(40));
        assert_eq!(folder.weight(), 40);
        folder.set_weight(UNSIZED);
        assert_eq!(folder.weight(), UNSIZED);
        assert!(folder.as_folder().is_some());
        assert!(folder.as_group().is_none());
    }
}
