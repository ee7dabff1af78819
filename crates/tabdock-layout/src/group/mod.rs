//! Groups: the split containers of the layout tree.

mod bounds;
mod operations;
mod types;

pub use bounds::{equal_shares, proportional_shares};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::DropLocation;
    use crate::element::{Element, UNSIZED};
    use crate::metrics::DockMetrics;
    use crate::tab::{Tab, TabContent, TabInfo};
    use tabdock_common::{Orientation, Point, Rect, Size, TabId};

    #[derive(Debug, Default)]
    struct Probe;

    impl TabContent for Probe {
        fn set_bounds(&mut self, _bounds: Rect) {}
        fn set_visible(&mut self, _visible: bool) {}
    }

    fn tab(id: &str) -> Tab<Probe> {
        let size = Size::new(30, 14);
        Tab::new(TabInfo::new(id, id), Probe, size, size)
    }

    fn no_margin() -> DockMetrics {
        DockMetrics {
            folder_margin: 0,
            ..DockMetrics::default()
        }
    }

    /// A group of single-tab folders with the given weights.
    fn group_of(orientation: Orientation, weights: &[i32]) -> Group<Probe> {
        let mut group = Group::new(orientation, 1);
        for (i, &w) in weights.iter().enumerate() {
            let index = group.push_folder(w);
            group
                .folder_at_mut(&[index])
                .unwrap()
                .add_tab(tab(&format!("t{i}")));
        }
        group
    }

    fn widths(group: &Group<Probe>) -> Vec<i32> {
        group.children().iter().map(|c| c.bounds().width).collect()
    }

    fn weights(group: &Group<Probe>) -> Vec<i32> {
        group.children().iter().map(|c| c.weight()).collect()
    }

    #[test]
    fn equal_shares_hand_remainder_to_earliest() {
        assert_eq!(equal_shares(100, 3), (vec![34, 33, 33], 33));
        assert_eq!(equal_shares(7, 2), (vec![4, 3], 3));
        assert_eq!(equal_shares(0, 2), (vec![0, 0], 0));
    }

    #[test]
    fn proportional_shares_keep_exact_sums() {
        let (w, sizes) = proportional_shares(&[1, 1, 1], 100);
        assert_eq!(w, vec![33, 33, 33]);
        assert_eq!(sizes, vec![34, 33, 33]);
        let (w, sizes) = proportional_shares(&[30, 70], 100);
        assert_eq!(w, vec![30, 70]);
        assert_eq!(sizes, vec![30, 70]);
    }

    #[test]
    fn tiny_shares_keep_a_positive_weight() {
        let (w, sizes) = proportional_shares(&[1, 1000], 100);
        assert_eq!(w, vec![1, 99]);
        assert_eq!(sizes, vec![1, 99]);
    }

    #[test]
    fn repeated_layout_is_stable() {
        let mut group = group_of(Orientation::Horizontal, &[1, 1000]);
        let rect = Rect::new(0, 0, 105, 80);
        group.set_bounds(rect, &DockMetrics::default());
        let first = widths(&group);
        group.set_bounds(rect, &DockMetrics::default());
        assert_eq!(widths(&group), first);
        assert_eq!(first, vec![1, 99]);
    }

    #[test]
    fn zero_extent_keeps_weights() {
        let mut group = group_of(Orientation::Horizontal, &[100, 300]);
        group.set_bounds(Rect::new(0, 0, 0, 0), &DockMetrics::default());
        assert_eq!(weights(&group), vec![100, 300]);
        assert_eq!(widths(&group), vec![0, 0]);
        group.set_bounds(Rect::new(0, 0, 405, 300), &DockMetrics::default());
        assert_eq!(widths(&group), vec![100, 300]);
    }

    #[test]
    fn proportional_split() {
        let mut group = group_of(Orientation::Horizontal, &[10, 20, 30]);
        group.set_bounds(Rect::new(0, 0, 120, 80), &no_margin());
        assert_eq!(widths(&group), vec![20, 40, 60]);
        assert_eq!(weights(&group), vec![20, 40, 60]);
        let xs: Vec<i32> = group.children().iter().map(|c| c.bounds().x).collect();
        assert_eq!(xs, vec![0, 20, 60]);
    }

    #[test]
    fn equal_share_fallback() {
        let mut group = group_of(Orientation::Horizontal, &[UNSIZED, UNSIZED, UNSIZED]);
        group.set_bounds(Rect::new(0, 0, 100, 80), &no_margin());
        assert_eq!(widths(&group), vec![34, 33, 33]);
        assert_eq!(weights(&group), vec![33, 33, 33]);
    }

    #[test]
    fn one_unsized_child_resets_all() {
        let mut group = group_of(Orientation::Vertical, &[70, 0]);
        group.set_bounds(Rect::new(0, 0, 80, 100), &no_margin());
        let heights: Vec<i32> = group.children().iter().map(|c| c.bounds().height).collect();
        assert_eq!(heights, vec![50, 50]);
    }

    #[test]
    fn margins_separate_children() {
        let mut group = group_of(Orientation::Horizontal, &[UNSIZED, UNSIZED, UNSIZED]);
        group.set_bounds(Rect::new(0, 0, 110, 80), &DockMetrics::default());
        let xs: Vec<i32> = group.children().iter().map(|c| c.bounds().x).collect();
        assert_eq!(xs, vec![0, 39, 77]);
        assert_eq!(widths(&group), vec![34, 33, 33]);
    }

    #[test]
    fn single_child_fills_group() {
        let mut group = group_of(Orientation::Horizontal, &[5]);
        let rect = Rect::new(3, 4, 200, 100);
        group.set_bounds(rect, &DockMetrics::default());
        assert_eq!(group.children()[0].bounds(), rect);
        assert_eq!(group.children()[0].weight(), 5);
    }

    #[test]
    fn nested_group_runs_across() {
        let mut group = group_of(Orientation::Horizontal, &[100]);
        let g = group.push_group(100);
        let inner = group.group_at_mut(&[g]).unwrap();
        assert_eq!(inner.orientation(), Orientation::Vertical);
        inner.push_folder(UNSIZED);
        inner.push_folder(UNSIZED);
        group.set_bounds(Rect::new(0, 0, 200, 100), &no_margin());
        let top = group.element_at(&[1, 0]).unwrap().bounds();
        let bottom = group.element_at(&[1, 1]).unwrap().bounds();
        assert_eq!(top, Rect::new(100, 0, 100, 50));
        assert_eq!(bottom, Rect::new(100, 50, 100, 50));
    }

    #[test]
    fn path_lookups() {
        let mut group = group_of(Orientation::Horizontal, &[1, 1]);
        let g = group.push_group(1);
        group.group_at_mut(&[g]).unwrap().push_folder(1);
        assert!(group.group_at(&[]).is_some());
        assert!(group.group_at(&[0]).is_none());
        assert!(group.group_at(&[2]).is_some());
        assert!(group.folder_at(&[2, 0]).is_some());
        assert!(group.folder_at(&[2]).is_none());
        assert!(group.element_at(&[]).is_none());
        assert!(group.element_at(&[9]).is_none());
        assert_eq!(group.folder_count(), 3);
    }

    #[test]
    fn find_tab_and_take_tab() {
        let mut group = group_of(Orientation::Horizontal, &[1, 1]);
        assert_eq!(group.find_tab(&TabId::from("t1")).unwrap().indices(), &[1]);
        assert!(group.find_tab(&TabId::from("nope")).is_none());

        let taken = group.take_tab(&TabId::from("t1")).unwrap();
        assert_eq!(taken.id().as_str(), "t1");
        assert!(group.folder_at(&[1]).unwrap().is_empty());
        assert!(group.take_tab(&TabId::from("t1")).is_none());
    }

    #[test]
    fn show_tab_searches_subtree() {
        let mut group = group_of(Orientation::Horizontal, &[1]);
        group.folder_at_mut(&[0]).unwrap().add_tab(tab("x"));
        assert!(group.show_tab(&TabId::from("x")));
        assert_eq!(
            group.folder_at(&[0]).unwrap().current(),
            Some(&TabId::from("x"))
        );
        assert!(!group.show_tab(&TabId::from("nope")));
    }

    #[test]
    fn sub_folder_along_axis_halves_weight() {
        let mut group = group_of(Orientation::Horizontal, &[100, 60]);
        assert_eq!(group.new_sub_folder(DropLocation::Left, 0), Some(vec![0]));
        assert_eq!(weights(&group), vec![50, 50, 60]);
        assert!(group.folder_at(&[0]).unwrap().is_empty());

        assert_eq!(group.new_sub_folder(DropLocation::Right, 2), Some(vec![3]));
        assert_eq!(weights(&group), vec![50, 50, 30, 30]);
        assert!(group.folder_at(&[3]).unwrap().is_empty());
    }

    #[test]
    fn sub_folder_across_axis_wraps_child() {
        let mut group = group_of(Orientation::Horizontal, &[100, 60]);
        assert_eq!(group.new_sub_folder(DropLocation::Top, 1), Some(vec![1, 0]));
        let wrapper = group.group_at(&[1]).unwrap();
        assert_eq!(wrapper.orientation(), Orientation::Vertical);
        assert_eq!(wrapper.weight(), 60);
        assert_eq!(weights(wrapper), vec![60, 60]);
        assert!(group.folder_at(&[1, 0]).unwrap().is_empty());
        assert!(group.folder_at(&[1, 1]).unwrap().contains(&TabId::from("t1")));

        assert_eq!(group.new_sub_folder(DropLocation::Bottom, 0), Some(vec![0, 1]));
        assert!(group.folder_at(&[0, 0]).unwrap().contains(&TabId::from("t0")));
        assert!(group.folder_at(&[0, 1]).unwrap().is_empty());
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn sub_folder_out_of_range() {
        let mut group = group_of(Orientation::Vertical, &[100]);
        assert!(group.new_sub_folder(DropLocation::Top, 3).is_none());
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn first_folder_reused_or_inserted() {
        let mut group = group_of(Orientation::Horizontal, &[100]);
        group.add_tab_to_first_folder(tab("a"));
        assert_eq!(group.folder_at(&[0]).unwrap().len(), 2);

        let mut group: Group<Probe> = Group::new(Orientation::Horizontal, 1);
        let g = group.push_group(100);
        group.group_at_mut(&[g]).unwrap().push_folder(1);
        group.add_tab_to_first_folder(tab("a"));
        assert_eq!(weights(&group), vec![50, 50]);
        assert!(group.folder_at(&[0]).unwrap().contains(&TabId::from("a")));
    }

    #[test]
    fn first_folder_in_empty_group() {
        let mut group: Group<Probe> = Group::new(Orientation::Horizontal, 1);
        group.add_tab_to_first_folder(tab("a"));
        assert_eq!(group.len(), 1);
        assert_eq!(group.children()[0].weight(), UNSIZED);
    }

    #[test]
    fn largest_folder_descends_by_weight() {
        let mut group = group_of(Orientation::Horizontal, &[50]);
        let g = group.push_group(80);
        let inner = group.group_at_mut(&[g]).unwrap();
        inner.push_folder(10);
        inner.push_folder(30);
        group.add_tab_to_largest_folder(tab("a"));
        assert!(group.folder_at(&[1, 1]).unwrap().contains(&TabId::from("a")));
    }

    #[test]
    fn largest_folder_ties_go_first() {
        let mut group = group_of(Orientation::Horizontal, &[40, 40]);
        group.add_tab_to_largest_folder(tab("a"));
        assert!(group.folder_at(&[0]).unwrap().contains(&TabId::from("a")));
    }

    #[test]
    fn separator_moves_within_limits() {
        let metrics = DockMetrics::default();
        let mut group = group_of(Orientation::Horizontal, &[UNSIZED, UNSIZED]);
        group.set_bounds(Rect::new(0, 0, 205, 100), &metrics);
        assert_eq!(widths(&group), vec![100, 100]);

        assert!(group.move_separator(1, Point::new(150, 50), &metrics));
        assert_eq!(weights(&group), vec![148, 52]);
        group.set_bounds(Rect::new(0, 0, 205, 100), &metrics);
        assert_eq!(widths(&group), vec![148, 52]);
        assert_eq!(group.children()[1].bounds().x, 153);

        assert!(!group.move_separator(1, Point::new(170, 50), &metrics));
        assert_eq!(weights(&group), vec![148, 52]);
        assert!(!group.move_separator(0, Point::new(100, 50), &metrics));
        assert!(!group.move_separator(2, Point::new(100, 50), &metrics));
    }

    #[test]
    fn vertical_separator_uses_min_height() {
        let metrics = DockMetrics::default();
        let mut group = group_of(Orientation::Vertical, &[UNSIZED, UNSIZED]);
        group.set_bounds(Rect::new(0, 0, 100, 205), &metrics);
        // 60 pixels above the gap is below the 75 pixel minimum.
        assert!(!group.move_separator(1, Point::new(50, 62), &metrics));
        assert!(group.move_separator(1, Point::new(50, 80), &metrics));
        assert_eq!(weights(&group), vec![78, 122]);
    }

    #[test]
    fn element_children_are_typed() {
        let group = group_of(Orientation::Horizontal, &[1]);
        assert!(matches!(group.children()[0], Element::Folder(_)));
    }
}
