//! Prelude module for Horizon Dataview.
//!
//! ```ignore
//! use horizon_dataview::prelude::*;
//! ```
//!
//! This provides access to:
//! - The view controller (`DataView`) and its state types
//! - Column and record contracts (`Column`, `ColumnRegistry`, `Record`, `CellValue`)
//! - Sorting and selection types
//! - Configuration, export and error types

// ============================================================================
// View Controller
// ============================================================================

pub use crate::model::{DataView, ViewSnapshot, ViewState, ViewSummary};

// ============================================================================
// Records and Columns
// ============================================================================

pub use crate::model::{
    CellValue, Column, ColumnRegistry, ColumnWidth, HeaderInfo, HorizontalAlignment, Record,
    SortIndicator,
};

// ============================================================================
// Sorting, Search and Selection
// ============================================================================

pub use crate::model::{CheckState, Collator, SearchQuery, SortDirection, SortDirective};

// ============================================================================
// Configuration, Export and Errors
// ============================================================================

pub use crate::config::DataViewConfig;
pub use crate::error::{ColumnError, ConfigError, DataviewError, ExportError};
pub use crate::export::{CsvExportOptions, ExportScope};

// ============================================================================
// Signals
// ============================================================================

pub use horizon_dataview_core::{ConnectionId, Signal};
