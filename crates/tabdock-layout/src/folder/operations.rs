//! Mutating operations on Folder: insertion, reordering, removal, selection.
//!
//! None of these repack the bar; the owner relays out after mutating.

use tabdock_common::TabId;

use crate::tab::Tab;

use super::Folder;

impl<C> Folder<C> {
    /// Append a tab. The first tab added to an empty folder is selected.
    pub fn add_tab(&mut self, tab: Tab<C>) {
        if self.current.is_none() {
            self.current = Some(tab.id().clone());
        }
        self.tabs.push(tab);
    }

    /// Insert a tab at the start of the row after `row`, or append when that
    /// position is the end of the list.
    pub fn add_tab_at_row(&mut self, tab: Tab<C>, row: usize) {
        match self.row_ends.get(row) {
            Some(&end) if end < self.tabs.len() => {
                self.tabs.insert(end, tab);
                if self.current.is_none() {
                    self.current = Some(self.tabs[end].id().clone());
                }
            }
            _ => self.add_tab(tab),
        }
    }

    /// Insert a tab in front of `before`, or append if `before` is absent.
    pub fn add_tab_before(&mut self, tab: Tab<C>, before: &TabId) {
        match self.position(before) {
            Some(index) => {
                if self.current.is_none() {
                    self.current = Some(tab.id().clone());
                }
                self.tabs.insert(index, tab);
            }
            None => self.add_tab(tab),
        }
    }

    /// Move `id` in front of the first tab of the row after `row`, or to the
    /// end when the row reaches the end of the list.
    pub fn move_tab_to_row(&mut self, id: &TabId, row: usize) -> bool {
        let Some(&end) = self.row_ends.get(row) else {
            return false;
        };
        if end < self.tabs.len() {
            let before = self.tabs[end].id().clone();
            if &before == id {
                return self.contains(id);
            }
            self.move_tab_before(id, &before)
        } else {
            match self.position(id) {
                Some(index) => {
                    let tab = self.tabs.remove(index);
                    self.tabs.push(tab);
                    true
                }
                None => false,
            }
        }
    }

    /// Move `id` in front of `before`, or to the end if `before` is absent.
    pub fn move_tab_before(&mut self, id: &TabId, before: &TabId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let tab = self.tabs.remove(index);
        match self.position(before) {
            Some(dst) => self.tabs.insert(dst, tab),
            None => self.tabs.push(tab),
        }
        true
    }

    /// Detach a tab. If it was selected, the first remaining tab becomes
    /// selected.
    pub fn remove_tab(&mut self, id: &TabId) -> Option<Tab<C>> {
        let index = self.position(id)?;
        let tab = self.tabs.remove(index);
        if self.current.as_ref() == Some(id) {
            self.current = self.tabs.first().map(|t| t.id().clone());
        }
        Some(tab)
    }

    /// Select `id`. Returns `true` if the selection changed.
    pub fn update_current(&mut self, id: &TabId) -> bool {
        if self.is_current(id) || !self.contains(id) {
            return false;
        }
        self.current = Some(id.clone());
        true
    }

    /// Select `id` if this folder holds it. Returns whether it was found.
    pub fn show_tab(&mut self, id: &TabId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.update_current(id);
        true
    }

    /// Open or close the overflow dropdown. Opening requires more than one
    /// row. Returns `true` if the state changed.
    pub fn set_dropdown_open(&mut self, open: bool) -> bool {
        let open = open && self.has_dropdown();
        if self.dropdown_open == open {
            return false;
        }
        self.dropdown_open = open;
        true
    }
}
