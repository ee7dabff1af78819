//! Core types for groups: the split containers of the layout tree.

use tabdock_common::{Orientation, Rect, TabId};

use crate::element::{Element, ElementPath};
use crate::folder::Folder;

/// A split container. Children are laid out along `orientation`; nested
/// groups always run the opposite way.
#[derive(Debug)]
pub struct Group<C> {
    pub(crate) orientation: Orientation,
    pub(crate) weight: i32,
    pub(crate) bounds: Rect,
    pub(crate) children: Vec<Element<C>>,
}

impl<C> Group<C> {
    pub fn new(orientation: Orientation, weight: i32) -> Self {
        Self {
            orientation,
            weight,
            bounds: Rect::default(),
            children: Vec::new(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn children(&self) -> &[Element<C>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append an empty folder. Returns its index.
    pub fn push_folder(&mut self, weight: i32) -> usize {
        self.children.push(Element::Folder(Folder::new(weight)));
        self.children.len() - 1
    }

    /// Append an empty group running across this one. Returns its index.
    pub fn push_group(&mut self, weight: i32) -> usize {
        self.children
            .push(Element::Group(Group::new(self.orientation.opposite(), weight)));
        self.children.len() - 1
    }

    pub fn element_at(&self, path: &[usize]) -> Option<&Element<C>> {
        let (&last, parent) = path.split_last()?;
        self.group_at(parent)?.children.get(last)
    }

    pub fn element_at_mut(&mut self, path: &[usize]) -> Option<&mut Element<C>> {
        let (&last, parent) = path.split_last()?;
        self.group_at_mut(parent)?.children.get_mut(last)
    }

    /// The group at `path`; the empty path is `self`.
    pub fn group_at(&self, path: &[usize]) -> Option<&Group<C>> {
        let mut group = self;
        for &index in path {
            group = group.children.get(index)?.as_group()?;
        }
        Some(group)
    }

    pub fn group_at_mut(&mut self, path: &[usize]) -> Option<&mut Group<C>> {
        let mut group = self;
        for &index in path {
            group = match group.children.get_mut(index)? {
                Element::Group(g) => g,
                Element::Folder(_) => return None,
            };
        }
        Some(group)
    }

    pub fn folder_at(&self, path: &[usize]) -> Option<&Folder<C>> {
        self.element_at(path)?.as_folder()
    }

    pub fn folder_at_mut(&mut self, path: &[usize]) -> Option<&mut Folder<C>> {
        match self.element_at_mut(path)? {
            Element::Folder(f) => Some(f),
            Element::Group(_) => None,
        }
    }

    /// Path of the first folder, in pre-order, matching `pred`.
    pub fn find_folder<P>(&self, pred: P) -> Option<ElementPath>
    where
        P: Fn(&Folder<C>) -> bool,
    {
        self.find_folder_from(&ElementPath::root(), &pred)
    }

    fn find_folder_from<P>(&self, path: &ElementPath, pred: &P) -> Option<ElementPath>
    where
        P: Fn(&Folder<C>) -> bool,
    {
        self.children
            .iter()
            .enumerate()
            .find_map(|(i, child)| match child {
                Element::Folder(f) if pred(f) => Some(path.child(i)),
                Element::Folder(_) => None,
                Element::Group(g) => g.find_folder_from(&path.child(i), pred),
            })
    }

    /// Path of the folder holding `id`.
    pub fn find_tab(&self, id: &TabId) -> Option<ElementPath> {
        self.find_folder(|f| f.contains(id))
    }

    /// Call `f` on every folder, in pre-order.
    pub fn for_each_folder_mut(&mut self, f: &mut impl FnMut(&mut Folder<C>)) {
        for child in &mut self.children {
            match child {
                Element::Folder(folder) => f(folder),
                Element::Group(g) => g.for_each_folder_mut(f),
            }
        }
    }

    /// Number of folders in this subtree.
    pub fn folder_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| match c {
                Element::Folder(_) => 1,
                Element::Group(g) => g.folder_count(),
            })
            .sum()
    }
}
