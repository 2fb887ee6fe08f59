//! Horizon Dataview - a generic tabular data-view engine.
//!
//! Takes an in-memory collection of records and a declared set of columns
//! and produces a sorted, searched, paginated and selectable view of it for
//! display. Rendering is left to the caller.
//!
//! # Example
//!
//! ```
//! use horizon_dataview::prelude::*;
//! use serde_json::json;
//!
//! let columns = ColumnRegistry::new(vec![
//!     Column::new("name", "Name").sortable(true),
//!     Column::new("email", "Email"),
//! ])?;
//! let records = vec![
//!     json!({"name": "Mia", "email": "mia@example.com"}),
//!     json!({"name": "Jon", "email": "jon@example.org"}),
//! ];
//!
//! let mut view = DataView::new(records, columns);
//! view.selection_changed.connect(|rows| println!("{} selected", rows.len()));
//!
//! view.sort_by("name");
//! view.toggle_row(0);
//! assert_eq!(view.selected_records()[0]["name"], "Jon");
//! # Ok::<(), horizon_dataview::DataviewError>(())
//! ```

pub use horizon_dataview_core::*;

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod prelude;

pub use config::{ConfigFormat, DataViewConfig};
pub use error::{ColumnError, ConfigError, DataviewError, ExportError, Result};
pub use export::{CsvExportOptions, ExportScope};
pub use model::{DataView, ViewState};
