//! Selection manager.
//!
//! This module provides [`SelectionManager`], which tracks the selected rows
//! of the currently visible page. Selection is keyed by page-relative index,
//! so it is only meaningful for the page it was made on: the owner must
//! [`clear`](SelectionManager::clear) it (or call
//! [`set_page_len`](SelectionManager::set_page_len)) whenever the page's
//! contents change.
//!
//! # Example
//!
//! ```
//! use horizon_dataview::model::SelectionManager;
//!
//! let page = ["A", "B", "C"];
//! let mut selection = SelectionManager::new();
//! selection.set_page_len(page.len());
//!
//! selection.toggle(0);
//! selection.toggle(2);
//! assert_eq!(selection.resolve(&page), vec!["A", "C"]);
//!
//! selection.select_all(true);
//! assert_eq!(selection.resolve(&page), vec!["A", "B", "C"]);
//! ```

use std::collections::BTreeSet;

use horizon_dataview_core::logging::targets;

/// State of a header "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckState {
    /// No row on the page is selected.
    #[default]
    Unchecked,
    /// Some, but not all, rows are selected.
    PartiallyChecked,
    /// Every row on the page is selected.
    Checked,
}

impl CheckState {
    /// Returns `true` if fully or partially checked.
    pub fn is_checked(&self) -> bool {
        !matches!(self, CheckState::Unchecked)
    }
}

/// Page-relative row selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    selected: BTreeSet<usize>,
    page_len: usize,
}

impl SelectionManager {
    /// Creates an empty selection over an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of rows on the visible page and clears the selection.
    pub fn set_page_len(&mut self, page_len: usize) {
        self.page_len = page_len;
        self.selected.clear();
    }

    /// Number of rows on the visible page.
    pub fn page_len(&self) -> usize {
        self.page_len
    }

    /// Flips the selection of row `index`.
    ///
    /// Returns `false` (and changes nothing) if `index` is not on the page.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.page_len {
            tracing::debug!(
                target: targets::SELECTION,
                index,
                page_len = self.page_len,
                "ignoring toggle outside the visible page"
            );
            return false;
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
        tracing::trace!(target: targets::SELECTION, index, count = self.selected.len(), "toggled row");
        true
    }

    /// Selects every row on the page, or clears the selection.
    pub fn select_all(&mut self, all: bool) {
        if all {
            self.selected = (0..self.page_len).collect();
        } else {
            self.selected.clear();
        }
        tracing::trace!(target: targets::SELECTION, all, count = self.selected.len(), "select all");
    }

    /// Clears the selection. Returns `true` if anything was selected.
    pub fn clear(&mut self) -> bool {
        let had_selection = !self.selected.is_empty();
        self.selected.clear();
        had_selection
    }

    /// Returns `true` if row `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Selected row indices, ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    /// Number of selected rows.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Header checkbox state for the current page.
    pub fn check_state(&self) -> CheckState {
        match self.selected.len() {
            0 => CheckState::Unchecked,
            n if n >= self.page_len => CheckState::Checked,
            _ => CheckState::PartiallyChecked,
        }
    }

    /// Maps the selected indices onto `visible`, in index order.
    ///
    /// Indices that do not resolve to a row of `visible` are dropped.
    pub fn resolve<T: Clone>(&self, visible: &[T]) -> Vec<T> {
        self.selected
            .iter()
            .filter_map(|&i| visible.get(i).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(page_len: usize) -> SelectionManager {
        let mut selection = SelectionManager::new();
        selection.set_page_len(page_len);
        selection
    }

    #[test]
    fn test_toggle_and_resolve_in_index_order() {
        let page = ["A", "B", "C"];
        let mut selection = manager(3);
        assert!(selection.toggle(2));
        assert!(selection.toggle(0));
        assert_eq!(selection.resolve(&page), vec!["A", "C"]);
        assert_eq!(selection.selected_indices(), vec![0, 2]);
    }

    #[test]
    fn test_toggle_twice_deselects() {
        let mut selection = manager(3);
        selection.toggle(1);
        selection.toggle(1);
        assert!(selection.is_empty());
        assert!(!selection.is_selected(1));
    }

    #[test]
    fn test_toggle_out_of_range_ignored() {
        let mut selection = manager(2);
        assert!(!selection.toggle(2));
        assert_eq!(selection.selected_count(), 0);
    }

    #[test]
    fn test_select_all_and_none() {
        let page = ["A", "B", "C"];
        let mut selection = manager(3);
        selection.select_all(true);
        assert_eq!(selection.resolve(&page), vec!["A", "B", "C"]);
        selection.select_all(false);
        assert!(selection.resolve(&page).is_empty());
    }

    #[test]
    fn test_resolve_drops_stale_indices() {
        let mut selection = manager(3);
        selection.select_all(true);
        // Resolved against a shorter slice than the one selected on.
        assert_eq!(selection.resolve(&["A"]), vec!["A"]);
        assert!(selection.resolve::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_set_page_len_clears() {
        let mut selection = manager(3);
        selection.toggle(0);
        selection.set_page_len(5);
        assert!(selection.is_empty());
        assert_eq!(selection.page_len(), 5);
    }

    #[test]
    fn test_clear_reports_change() {
        let mut selection = manager(3);
        assert!(!selection.clear());
        selection.toggle(1);
        assert!(selection.clear());
    }

    #[test]
    fn test_check_state() {
        let mut selection = manager(3);
        assert_eq!(selection.check_state(), CheckState::Unchecked);
        selection.toggle(0);
        assert_eq!(selection.check_state(), CheckState::PartiallyChecked);
        assert!(selection.check_state().is_checked());
        selection.select_all(true);
        assert_eq!(selection.check_state(), CheckState::Checked);

        let empty = manager(0);
        assert_eq!(empty.check_state(), CheckState::Unchecked);
    }
}
