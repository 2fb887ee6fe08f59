//! Search/filter engine.
//!
//! A record matches a search term when any of its scalar field values,
//! coerced to text and compared case-insensitively, contains the term.
//! Null values, arrays and nested objects are skipped. Filtering only
//! removes records; it never reorders them.

use horizon_dataview_core::logging::targets;

use super::record::Record;

/// A normalized search term.
///
/// Holds the lowercased term, or nothing when the term is blank (or shorter
/// than the configured minimum), in which case every record matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    needle: Option<String>,
}

impl SearchQuery {
    /// Builds a query from raw user input.
    pub fn new(term: &str) -> Self {
        Self::with_min_len(term, 0)
    }

    /// Builds a query that only becomes active once the trimmed term has at
    /// least `min_len` characters.
    pub fn with_min_len(term: &str, min_len: usize) -> Self {
        let trimmed = term.trim();
        if trimmed.is_empty() || trimmed.chars().count() < min_len {
            return Self { needle: None };
        }
        Self {
            needle: Some(term.to_lowercase()),
        }
    }

    /// Returns `true` if the query filters anything.
    pub fn is_active(&self) -> bool {
        self.needle.is_some()
    }

    /// Returns `true` if `record` matches.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        record
            .field_values()
            .iter()
            .filter_map(|value| value.search_text())
            .any(|text| text.to_lowercase().contains(needle.as_str()))
    }
}

/// Filters `order` (indices into `records`), keeping matching records in
/// their existing relative order.
pub fn filter_order<R: Record>(records: &[R], order: &[usize], query: &SearchQuery) -> Vec<usize> {
    if !query.is_active() {
        return order.to_vec();
    }
    let kept: Vec<usize> = order
        .iter()
        .copied()
        .filter(|&i| query.matches(&records[i]))
        .collect();

    tracing::trace!(
        target: targets::FILTER,
        input = order.len(),
        kept = kept.len(),
        "filtered records"
    );
    kept
}

/// Returns the records matching `term`, in input order.
pub fn filter<'a, R: Record>(records: &'a [R], term: &str) -> Vec<&'a R> {
    let query = SearchQuery::new(term);
    records.iter().filter(|r| query.matches(r)).collect()
}
