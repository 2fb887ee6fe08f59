//! Logging facilities for Horizon Dataview.
//!
//! Horizon Dataview uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! tracing_subscriber::fmt()
//!     .with_env_filter(EnvFilter::new("horizon_dataview=debug"))
//!     .init();
//! ```
//!
//! Every subsystem logs under its own target (see [`targets`]) so a single
//! stage of the pipeline can be traced in isolation, e.g.
//! `RUST_LOG=horizon_dataview::selection=trace`.

/// Span names used throughout Horizon Dataview for tracing.
pub mod span_names {
    /// Full pipeline rebuild (sort, filter, paginate).
    pub const REBUILD: &str = "horizon_dataview::rebuild";
    /// Sort pass.
    pub const SORT: &str = "horizon_dataview::sort";
    /// Filter pass.
    pub const FILTER: &str = "horizon_dataview::filter";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_dataview_core::signal";
    /// View controller state transitions.
    pub const CONTROLLER: &str = "horizon_dataview::controller";
    /// Sort engine target.
    pub const SORT: &str = "horizon_dataview::sort";
    /// Search/filter engine target.
    pub const FILTER: &str = "horizon_dataview::filter";
    /// Selection manager target.
    pub const SELECTION: &str = "horizon_dataview::selection";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_dataview::config";
    /// CSV export target.
    pub const EXPORT: &str = "horizon_dataview::export";
    /// Performance spans target.
    pub const PERF: &str = "horizon_dataview::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for measuring the duration of a pipeline pass.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_dataview::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Logs a warning under the crate-wide `horizon_dataview` target.
#[macro_export]
macro_rules! dataview_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "horizon_dataview", $($arg)*)
    };
}
