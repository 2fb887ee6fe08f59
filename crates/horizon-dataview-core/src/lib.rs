//! Core systems for Horizon Dataview.
//!
//! This crate provides the foundational pieces shared by the data-view engine:
//!
//! - **Signal/Slot System**: Type-safe, synchronous event notification
//! - **Logging**: `tracing` targets, span names and a warning macro
//! - **Errors**: Error types shared across the workspace
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_dataview_core::Signal;
//!
//! let selection_changed = Signal::<Vec<String>>::new();
//!
//! let conn_id = selection_changed.connect(|names| {
//!     println!("{} rows selected", names.len());
//! });
//!
//! selection_changed.emit(vec!["alice".to_string()]);
//! selection_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{Result, SignalError};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
