//! The data-view engine.
//!
//! This module turns an arbitrary in-memory collection of records into a
//! sorted, searched, paginated and selectable view. It is split into small
//! pure stages composed by a controller:
//!
//! - [`CellValue`] and [`Record`]: how the engine reads fields without
//!   knowing the record's concrete type
//! - [`ColumnRegistry`]: the declared columns, labels and render hooks
//! - [`sort`] / [`sorted_order`]: stable, null-aware, locale-aware sorting
//! - [`filter`] / [`SearchQuery`]: case-insensitive substring search over
//!   scalar fields
//! - [`paginate`] / [`page_window`]: page slicing and navigation buttons
//! - [`SelectionManager`]: page-relative row selection
//! - [`DataView`]: owns the state and re-runs the pipeline on every event
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────┐   ┌────────┐   ┌──────────┐   ┌───────────┐
//! │   raw   │──>│ sorted │──>│ filtered │──>│   page    │
//! │ records │   │ (idx)  │   │  (idx)   │   │  (slice)  │
//! └─────────┘   └────────┘   └──────────┘   └───────────┘
//!                   ▲             ▲               │
//!              sort directive  search term   SelectionManager
//! ```
//!
//! Events flow into [`DataView`]; results flow out through its signals and
//! [`DataView::snapshot`].

mod column;
mod controller;
mod filter;
mod paginator;
mod record;
pub mod selection;
mod sort;
mod value;

pub use column::{
    Column, ColumnRegistry, ColumnWidth, HeaderInfo, HorizontalAlignment, RenderFn, SortIndicator,
};
pub use controller::{DataView, ViewSnapshot, ViewState, ViewSummary};
pub use filter::{SearchQuery, filter, filter_order};
pub use paginator::{
    DEFAULT_PAGE_WINDOW, Page, page_range, page_window, page_window_with, paginate, total_pages,
};
pub use record::Record;
pub use selection::{CheckState, SelectionManager};
pub use sort::{
    Collator, SortDirection, SortDirective, compare_values, sort, sorted_order, system_locale,
};
pub use value::CellValue;
