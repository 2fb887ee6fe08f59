//! CSV export of a data view.
//!
//! Rows are written with the column labels as the header line and each cell
//! rendered through its column, so the file matches what the table shows.

use std::io::Write;

use horizon_dataview_core::logging::targets;

use crate::error::ExportError;
use crate::model::{ColumnRegistry, DataView, Record};

/// Which rows of a view to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportScope {
    /// The current page.
    #[default]
    VisiblePage,
    /// Every record matching the search, in sort order.
    Filtered,
    /// The selected rows of the current page.
    Selection,
}

/// Options for CSV output.
#[derive(Debug, Clone)]
pub struct CsvExportOptions {
    delimiter: u8,
    include_headers: bool,
}

impl Default for CsvExportOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
        }
    }
}

impl CsvExportOptions {
    /// Creates default options (comma-separated, with a header line).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to write the header line.
    pub fn include_headers(mut self, include_headers: bool) -> Self {
        self.include_headers = include_headers;
        self
    }

    fn writer_builder(&self) -> csv::WriterBuilder {
        let mut builder = csv::WriterBuilder::new();
        builder.delimiter(self.delimiter);
        builder
    }
}

/// Writes `rows` as CSV through `columns`. Returns the number of data rows.
pub fn write_csv<'a, R, I, W>(
    columns: &ColumnRegistry<R>,
    rows: I,
    writer: W,
    options: &CsvExportOptions,
) -> Result<usize, ExportError>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
    W: Write,
{
    let mut csv = options.writer_builder().from_writer(writer);
    if options.include_headers {
        csv.write_record(columns.iter().map(|c| c.label()))?;
    }
    let mut count = 0;
    for record in rows {
        csv.write_record(columns.iter().map(|c| c.render_cell(record)))?;
        count += 1;
    }
    csv.flush()?;
    Ok(count)
}

impl<R: Record + Clone> DataView<R> {
    /// Writes the rows in `scope` as comma-separated CSV with a header line.
    ///
    /// Returns the number of data rows written.
    pub fn export_csv<W: Write>(&self, writer: W, scope: ExportScope) -> Result<usize, ExportError> {
        self.export_csv_with(writer, scope, &CsvExportOptions::default())
    }

    /// Writes the rows in `scope` as CSV using `options`.
    pub fn export_csv_with<W: Write>(
        &self,
        writer: W,
        scope: ExportScope,
        options: &CsvExportOptions,
    ) -> Result<usize, ExportError> {
        let count = match scope {
            ExportScope::VisiblePage => write_csv(self.columns(), self.visible(), writer, options)?,
            ExportScope::Filtered => {
                write_csv(self.columns(), self.filtered_records(), writer, options)?
            }
            ExportScope::Selection => {
                let selected = self.selected_records();
                write_csv(self.columns(), &selected, writer, options)?
            }
        };
        tracing::debug!(target: targets::EXPORT, ?scope, rows = count, "exported csv");
        Ok(count)
    }
}
