//! View controller.
//!
//! [`DataView`] owns a record collection and the directive state of one
//! rendered table (sort directive, search term, current page, selection) and
//! keeps the pipeline `raw -> sorted -> filtered -> page` up to date after
//! every event.
//!
//! The intermediate stages are index vectors into the raw collection, so a
//! sort or search never clones records. Each event recomputes only the
//! stages downstream of the directive it changed:
//!
//! | Event                    | Recomputes              | Page      | Selection |
//! |--------------------------|-------------------------|-----------|-----------|
//! | sort                     | sorted, filtered, page  | reset     | cleared   |
//! | search                   | filtered, page          | reset     | cleared   |
//! | page                     | page                    | clamped   | cleared   |
//! | page size                | page                    | reset     | cleared   |
//! | records replaced         | sorted, filtered, page  | clamped   | cleared   |
//! | toggle / select all      | nothing                 | unchanged | updated   |
//!
//! # Example
//!
//! ```
//! use horizon_dataview::model::{Column, ColumnRegistry, DataView};
//! use serde_json::json;
//!
//! let columns = ColumnRegistry::new(vec![
//!     Column::new("name", "Name").sortable(true),
//!     Column::new("city", "City"),
//! ])
//! .unwrap();
//! let records = vec![
//!     json!({"name": "Lena", "city": "Oslo"}),
//!     json!({"name": "Ari", "city": "Turku"}),
//! ];
//!
//! let mut view = DataView::new(records, columns);
//! view.sort_by("name");
//! view.set_search("o");
//!
//! let snapshot = view.snapshot();
//! assert_eq!(snapshot.visible.len(), 1);
//! assert_eq!(snapshot.visible[0]["name"], "Lena");
//! ```

use horizon_dataview_core::logging::{span_names, targets};
use horizon_dataview_core::{PerfSpan, Signal};
use serde::{Deserialize, Serialize};

use super::column::{ColumnRegistry, HeaderInfo};
use super::filter::{SearchQuery, filter_order};
use super::paginator::{page_range, page_window_with, total_pages};
use super::record::Record;
use super::selection::{CheckState, SelectionManager};
use super::sort::{Collator, SortDirective, sorted_order};
use crate::config::DataViewConfig;

/// The caller-visible state of a view, excluding selection.
///
/// Serializable so a list can be restored after navigating away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    /// Active sort, `None` for source order.
    pub sort: Option<SortDirective>,
    /// Raw search input.
    pub search: String,
    /// Current page, 1-based.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sort: None,
            search: String::new(),
            page: 1,
            page_size: crate::config::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Everything a renderer needs besides the visible rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSummary {
    /// Current page, 1-based.
    pub page: usize,
    /// Total pages, at least 1.
    pub total_pages: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Number of records in the collection.
    pub total_count: usize,
    /// Number of records matching the search.
    pub filtered_count: usize,
    /// Page numbers to show as navigation buttons.
    pub page_window: Vec<usize>,
    /// 1-based row numbers of the first and last visible row within the
    /// filtered collection, `None` when the page is empty.
    pub range: Option<(usize, usize)>,
    /// Active sort.
    pub sort: Option<SortDirective>,
    /// Raw search input.
    pub search: String,
    /// Selected page-relative indices, ascending.
    pub selected: Vec<usize>,
    /// Number of selected rows.
    pub selected_count: usize,
    /// `true` when nothing matches.
    pub is_empty: bool,
    /// `true` when a previous page exists.
    pub has_previous: bool,
    /// `true` when a next page exists.
    pub has_next: bool,
}

/// The visible page and its summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot<'a, R> {
    /// Records on the current page, in display order.
    pub visible: Vec<&'a R>,
    /// Page, sort, search and selection state.
    pub summary: ViewSummary,
}

/// A sorted, searched, paginated and selectable view over a collection.
pub struct DataView<R> {
    records: Vec<R>,
    columns: ColumnRegistry<R>,
    collator: Collator,

    sort: Option<SortDirective>,
    search: String,
    query: SearchQuery,
    min_search_len: usize,
    page: usize,
    page_size: usize,
    page_window: usize,

    /// Raw indices in sort order.
    sorted: Vec<usize>,
    /// Raw indices in sort order that match the search.
    filtered: Vec<usize>,
    selection: SelectionManager,

    /// Emitted with the resolved records whenever the selection changes.
    pub selection_changed: Signal<Vec<R>>,
    /// Emitted with the record of a clicked row.
    pub row_clicked: Signal<R>,
    /// Emitted after every event that changed the view.
    pub view_changed: Signal<ViewSummary>,
}

impl<R> std::fmt::Debug for DataView<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataView")
            .field("records", &self.records.len())
            .field("columns", &self.columns.len())
            .field("sort", &self.sort)
            .field("search", &self.search)
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("filtered", &self.filtered.len())
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl<R: Record + Clone> DataView<R> {
    /// Creates a view with the default configuration.
    pub fn new(records: Vec<R>, columns: ColumnRegistry<R>) -> Self {
        Self::with_config(records, columns, &DataViewConfig::default())
    }

    /// Creates a view from a configuration.
    ///
    /// Out-of-range values are clamped rather than rejected; call
    /// [`DataViewConfig::validate`] first to catch them. An initial sort on
    /// a column that is not sortable is ignored.
    pub fn with_config(records: Vec<R>, columns: ColumnRegistry<R>, config: &DataViewConfig) -> Self {
        let collator = match &config.locale {
            Some(locale) => Collator::with_locale(locale),
            None => Collator::new(),
        };
        let mut view = Self {
            records,
            columns,
            collator,
            sort: None,
            search: String::new(),
            query: SearchQuery::default(),
            min_search_len: config.min_search_len,
            page: 1,
            page_size: config.page_size.max(1),
            page_window: config.page_window.max(1),
            sorted: Vec::new(),
            filtered: Vec::new(),
            selection: SelectionManager::new(),
            selection_changed: Signal::new(),
            row_clicked: Signal::new(),
            view_changed: Signal::new(),
        };
        view.sort = config
            .initial_sort
            .clone()
            .filter(|directive| view.accepts_sort(directive));
        view.rebuild_sorted();
        view.refresh_page();

        tracing::debug!(
            target: targets::CONTROLLER,
            records = view.records.len(),
            columns = view.columns.len(),
            locale = view.collator.locale(),
            "created data view"
        );
        view
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Handles a click on the header of column `key`.
    ///
    /// Sorts ascending by a new column, or flips the direction of the current
    /// one. Returns `false` (and changes nothing) if the column is not
    /// sortable.
    pub fn sort_by(&mut self, key: &str) -> bool {
        if !self.columns.is_sortable(key) {
            tracing::debug!(target: targets::CONTROLLER, key, "ignoring sort on non-sortable column");
            return false;
        }
        self.sort = Some(SortDirective::toggled(self.sort.as_ref(), key));
        self.apply_sort_change("sort");
        true
    }

    /// Applies a sort directive directly; `None` restores source order.
    ///
    /// Returns `false` (and changes nothing) if the directive names a column
    /// that is not sortable.
    pub fn set_sort(&mut self, sort: Option<SortDirective>) -> bool {
        if let Some(directive) = &sort
            && !self.accepts_sort(directive)
        {
            return false;
        }
        self.sort = sort;
        self.apply_sort_change("set_sort");
        true
    }

    /// Restores source order.
    pub fn reset_sort(&mut self) {
        self.sort = None;
        self.apply_sort_change("reset_sort");
    }

    /// Handles new search input.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.query = SearchQuery::with_min_len(&self.search, self.min_search_len);
        self.rebuild_filtered();
        self.page = 1;
        self.refresh_page();
        self.finish("search");
    }

    /// Moves to `page`, clamped into `[1, total_pages]`. Returns the page
    /// actually shown.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page = page.clamp(1, self.total_pages());
        self.refresh_page();
        self.finish("page");
        self.page
    }

    /// Moves to the next page, if any.
    pub fn next_page(&mut self) -> usize {
        self.set_page(self.page.saturating_add(1))
    }

    /// Moves to the previous page, if any.
    pub fn previous_page(&mut self) -> usize {
        self.set_page(self.page.saturating_sub(1))
    }

    /// Moves to the first page.
    pub fn first_page(&mut self) -> usize {
        self.set_page(1)
    }

    /// Moves to the last page.
    pub fn last_page(&mut self) -> usize {
        self.set_page(self.total_pages())
    }

    /// Changes the number of rows per page (at least 1) and returns to the
    /// first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
        self.refresh_page();
        self.finish("page_size");
    }

    /// Replaces the collection, keeping sort, search and (clamped) page.
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.rebuild_sorted();
        self.page = self.page.clamp(1, self.total_pages());
        self.refresh_page();
        self.finish("records");
    }

    /// Restores a previously saved [`ViewState`].
    ///
    /// A sort on a column that is no longer sortable is dropped; the page is
    /// clamped to the restored result.
    pub fn restore(&mut self, state: ViewState) {
        self.sort = state.sort.filter(|directive| self.accepts_sort(directive));
        self.search = state.search;
        self.query = SearchQuery::with_min_len(&self.search, self.min_search_len);
        self.page_size = state.page_size.max(1);
        self.rebuild_sorted();
        self.page = state.page.clamp(1, self.total_pages());
        self.refresh_page();
        self.finish("restore");
    }

    /// Toggles the selection of visible row `index`.
    ///
    /// Returns `false` if `index` is not on the current page.
    pub fn toggle_row(&mut self, index: usize) -> bool {
        if !self.selection.toggle(index) {
            return false;
        }
        self.emit_selection();
        true
    }

    /// Selects every visible row, or none.
    pub fn select_all(&mut self, all: bool) {
        self.selection.select_all(all);
        self.emit_selection();
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.emit_selection();
    }

    /// Handles a click on visible row `index`, emitting [`row_clicked`].
    ///
    /// Returns `false` if `index` is not on the current page.
    ///
    /// [`row_clicked`]: DataView::row_clicked
    pub fn click_row(&self, index: usize) -> bool {
        let Some(record) = self.visible_index(index).map(|i| &self.records[i]) else {
            return false;
        };
        tracing::debug!(target: targets::CONTROLLER, index, "row clicked");
        self.row_clicked.emit(record.clone());
        true
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The full collection in source order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// The column registry.
    pub fn columns(&self) -> &ColumnRegistry<R> {
        &self.columns
    }

    /// The collator used for string columns.
    pub fn collator(&self) -> &Collator {
        &self.collator
    }

    /// The active sort directive.
    pub fn sort(&self) -> Option<&SortDirective> {
        self.sort.as_ref()
    }

    /// The raw search input.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total pages, at least 1.
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.page_size)
    }

    /// Number of records matching the search.
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Page numbers to show as navigation buttons.
    pub fn page_window(&self) -> Vec<usize> {
        page_window_with(self.page, self.total_pages(), self.page_window)
    }

    /// Records on the current page.
    pub fn visible(&self) -> Vec<&R> {
        self.visible_indices()
            .iter()
            .map(|&i| &self.records[i])
            .collect()
    }

    /// All records matching the search, in sort order.
    pub fn filtered_records(&self) -> Vec<&R> {
        self.filtered.iter().map(|&i| &self.records[i]).collect()
    }

    /// The selection of the current page.
    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    /// Selected records of the current page, in row order.
    pub fn selected_records(&self) -> Vec<R> {
        self.selection
            .resolve(self.visible_indices())
            .into_iter()
            .map(|i| self.records[i].clone())
            .collect()
    }

    /// State of the header "select all" checkbox.
    pub fn select_all_state(&self) -> CheckState {
        self.selection.check_state()
    }

    /// Header row with sort indicators.
    pub fn headers(&self) -> Vec<HeaderInfo> {
        self.columns.headers(self.sort.as_ref())
    }

    /// Renders the cell of column `key` for `record`, or `None` for an
    /// unknown column.
    pub fn render_cell(&self, key: &str, record: &R) -> Option<String> {
        self.columns.get(key).map(|column| column.render_cell(record))
    }

    /// The state to hand to [`restore`](DataView::restore) later.
    pub fn state(&self) -> ViewState {
        ViewState {
            sort: self.sort.clone(),
            search: self.search.clone(),
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// Page, sort, search and selection state.
    pub fn summary(&self) -> ViewSummary {
        let total_pages = self.total_pages();
        let shown = self.visible_indices().len();
        let first = (self.page - 1) * self.page_size + 1;
        ViewSummary {
            page: self.page,
            total_pages,
            page_size: self.page_size,
            total_count: self.records.len(),
            filtered_count: self.filtered.len(),
            page_window: self.page_window(),
            range: (shown > 0).then(|| (first, first + shown - 1)),
            sort: self.sort.clone(),
            search: self.search.clone(),
            selected: self.selection.selected_indices(),
            selected_count: self.selection.selected_count(),
            is_empty: self.filtered.is_empty(),
            has_previous: self.page > 1,
            has_next: self.page < total_pages,
        }
    }

    /// The visible page and its summary.
    pub fn snapshot(&self) -> ViewSnapshot<'_, R> {
        ViewSnapshot {
            visible: self.visible(),
            summary: self.summary(),
        }
    }

    // =========================================================================
    // Pipeline
    // =========================================================================

    fn accepts_sort(&self, directive: &SortDirective) -> bool {
        let sortable = self.columns.is_sortable(&directive.key);
        if !sortable {
            tracing::warn!(
                target: targets::CONTROLLER,
                key = %directive.key,
                "ignoring sort on non-sortable column"
            );
        }
        sortable
    }

    fn apply_sort_change(&mut self, event: &'static str) {
        self.rebuild_sorted();
        self.page = 1;
        self.refresh_page();
        self.finish(event);
    }

    /// Recomputes the sorted and filtered stages.
    fn rebuild_sorted(&mut self) {
        let _span = PerfSpan::new(span_names::REBUILD);
        {
            let _sort = PerfSpan::new(span_names::SORT);
            self.sorted = sorted_order(&self.records, self.sort.as_ref(), &self.collator);
        }
        self.rebuild_filtered();
    }

    /// Recomputes the filtered stage from the sorted one.
    fn rebuild_filtered(&mut self) {
        let _span = PerfSpan::new(span_names::FILTER);
        self.filtered = filter_order(&self.records, &self.sorted, &self.query);
        tracing::trace!(
            target: targets::CONTROLLER,
            sorted = self.sorted.len(),
            filtered = self.filtered.len(),
            "rebuilt pipeline"
        );
    }

    /// Points the selection at the current page, dropping what was selected.
    fn refresh_page(&mut self) {
        let had_selection = !self.selection.is_empty();
        self.selection.set_page_len(self.visible_indices().len());
        if had_selection {
            self.selection_changed.emit(Vec::new());
        }
    }

    fn visible_indices(&self) -> &[usize] {
        &self.filtered[page_range(self.filtered.len(), self.page, self.page_size)]
    }

    fn visible_index(&self, row: usize) -> Option<usize> {
        self.visible_indices().get(row).copied()
    }

    fn emit_selection(&self) {
        let selected = self.selected_records();
        tracing::debug!(target: targets::SELECTION, count = selected.len(), "selection changed");
        self.selection_changed.emit(selected);
    }

    fn finish(&self, event: &'static str) {
        tracing::debug!(
            target: targets::CONTROLLER,
            event,
            page = self.page,
            total_pages = self.total_pages(),
            filtered = self.filtered.len(),
            "view updated"
        );
        self.view_changed.emit(self.summary());
    }
}
