//! Column registry.
//!
//! A [`ColumnRegistry`] is the caller-supplied, immutable description of a
//! table's columns: which record fields exist, how each is labeled, whether
//! it participates in sorting, and how its value is rendered. The render
//! hook only affects presentation, never sorting or filtering.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use super::record::Record;
use super::sort::{SortDirection, SortDirective};
use super::value::CellValue;
use crate::error::ColumnError;

/// Type alias for a cell render hook.
///
/// Receives the field value and the whole record, returns the displayable text.
pub type RenderFn<R> = Arc<dyn Fn(&CellValue, &R) -> String + Send + Sync>;

/// Horizontal alignment of a column's cells and header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// Align to the left edge.
    #[default]
    Left,
    /// Align to the center.
    Center,
    /// Align to the right edge (typical for numbers and money).
    Right,
}

/// Preferred column width hint for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnWidth {
    /// Fixed width in pixels.
    Pixels(u32),
    /// Percentage of the table width.
    Percent(u8),
}

/// Sort state shown in a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortIndicator {
    /// Column is not the active sort key.
    #[default]
    None,
    /// Column is sorted ascending.
    Ascending,
    /// Column is sorted descending.
    Descending,
}

/// Describes one column of a data view.
///
/// # Example
///
/// ```
/// use horizon_dataview::model::{Column, HorizontalAlignment};
/// use serde_json::Value;
///
/// let column: Column<Value> = Column::new("total", "Total")
///     .sortable(true)
///     .align(HorizontalAlignment::Right)
///     .render(|value, _record| format!("{value} EUR"));
/// assert!(column.is_sortable());
/// ```
pub struct Column<R> {
    key: String,
    label: String,
    sortable: bool,
    align: HorizontalAlignment,
    width: Option<ColumnWidth>,
    render: Option<RenderFn<R>>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            align: self.align,
            width: self.width,
            render: self.render.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("width", &self.width)
            .field("render", &self.render.is_some())
            .finish()
    }
}

impl<R> Column<R> {
    /// Creates a non-sortable, left-aligned column with default rendering.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            align: HorizontalAlignment::Left,
            width: None,
            render: None,
        }
    }

    /// Sets whether clicking the header sorts by this column.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets the alignment.
    pub fn align(mut self, align: HorizontalAlignment) -> Self {
        self.align = align;
        self
    }

    /// Sets the width hint.
    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the render hook.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellValue, &R) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// The record field this column reads.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The header label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the column participates in sorting.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// The cell alignment.
    pub fn alignment(&self) -> HorizontalAlignment {
        self.align
    }

    /// The width hint, if any.
    pub fn width_hint(&self) -> Option<ColumnWidth> {
        self.width
    }

    /// Whether the column has a custom render hook.
    pub fn has_render(&self) -> bool {
        self.render.is_some()
    }
}

impl<R: Record> Column<R> {
    /// Renders this column's cell for `record`.
    ///
    /// Uses the render hook when set, otherwise the value's display form.
    pub fn render_cell(&self, record: &R) -> String {
        let value = record.field(&self.key);
        match &self.render {
            Some(render) => render(&value, record),
            None => value.to_string(),
        }
    }
}

/// Header description handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Column key.
    pub key: String,
    /// Header label.
    pub label: String,
    /// Alignment.
    pub align: HorizontalAlignment,
    /// Width hint.
    pub width: Option<ColumnWidth>,
    /// Whether clicking the header sorts.
    pub sortable: bool,
    /// Current sort state of this column.
    pub indicator: SortIndicator,
}

/// The immutable set of columns of one data view.
pub struct ColumnRegistry<R> {
    columns: Vec<Column<R>>,
}

impl<R> Clone for ColumnRegistry<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<R> fmt::Debug for ColumnRegistry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.columns.iter()).finish()
    }
}

impl<R> ColumnRegistry<R> {
    /// Creates a registry, rejecting empty or duplicate keys.
    pub fn new(columns: Vec<Column<R>>) -> Result<Self, ColumnError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if column.key.trim().is_empty() {
                return Err(ColumnError::EmptyKey);
            }
            if !seen.insert(column.key.as_str()) {
                return Err(ColumnError::DuplicateKey(column.key.clone()));
            }
        }
        Ok(Self { columns })
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Looks up a column by key.
    pub fn get(&self, key: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Iterates over the columns in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Column<R>> {
        self.columns.iter()
    }

    /// Returns `true` if `key` names a sortable column.
    pub fn is_sortable(&self, key: &str) -> bool {
        self.get(key).is_some_and(Column::is_sortable)
    }

    /// Builds the header row for the given sort state.
    pub fn headers(&self, sort: Option<&SortDirective>) -> Vec<HeaderInfo> {
        self.columns
            .iter()
            .map(|column| {
                let indicator = match sort {
                    Some(directive) if directive.key == column.key => match directive.direction {
                        SortDirection::Ascending => SortIndicator::Ascending,
                        SortDirection::Descending => SortIndicator::Descending,
                    },
                    _ => SortIndicator::None,
                };
                HeaderInfo {
                    key: column.key.clone(),
                    label: column.label.clone(),
                    align: column.align,
                    width: column.width,
                    sortable: column.sortable,
                    indicator,
                }
            })
            .collect()
    }
}

impl<'a, R> IntoIterator for &'a ColumnRegistry<R> {
    type Item = &'a Column<R>;
    type IntoIter = std::slice::Iter<'a, Column<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn registry() -> ColumnRegistry<Value> {
        ColumnRegistry::new(vec![
            Column::new("name", "Name").sortable(true),
            Column::new("balance", "Balance")
                .sortable(true)
                .align(HorizontalAlignment::Right)
                .width(ColumnWidth::Pixels(120))
                .render(|value, _| format!("${value}")),
            Column::new("notes", "Notes"),
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = ColumnRegistry::<Value>::new(vec![
            Column::new("id", "ID"),
            Column::new("id", "Identifier"),
        ]);
        assert_eq!(result.unwrap_err(), ColumnError::DuplicateKey("id".into()));
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = ColumnRegistry::<Value>::new(vec![Column::new("  ", "Blank")]);
        assert_eq!(result.unwrap_err(), ColumnError::EmptyKey);
    }

    #[test]
    fn test_sortable_lookup() {
        let columns = registry();
        assert!(columns.is_sortable("name"));
        assert!(!columns.is_sortable("notes"));
        assert!(!columns.is_sortable("unknown"));
        assert_eq!(columns.len(), 3);
    }

    #[test]
    fn test_render_cell_hook_and_default() {
        let columns = registry();
        let record = json!({"name": "Dana", "balance": 12.5, "notes": null});
        assert_eq!(columns.get("balance").unwrap().render_cell(&record), "$12.5");
        assert_eq!(columns.get("name").unwrap().render_cell(&record), "Dana");
        assert_eq!(columns.get("notes").unwrap().render_cell(&record), "");
    }

    #[test]
    fn test_headers_indicator() {
        let columns = registry();
        let sort = SortDirective::descending("balance");
        let headers = columns.headers(Some(&sort));
        assert_eq!(headers[0].indicator, SortIndicator::None);
        assert_eq!(headers[1].indicator, SortIndicator::Descending);
        assert_eq!(headers[1].align, HorizontalAlignment::Right);
        assert_eq!(headers[1].width, Some(ColumnWidth::Pixels(120)));
        assert!(columns.headers(None).iter().all(|h| h.indicator == SortIndicator::None));
    }
}
