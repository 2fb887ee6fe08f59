//! Sort engine.
//!
//! Orders records by a single column under a [`SortDirective`]. The order is
//! total and stable:
//!
//! 1. Two missing values compare equal.
//! 2. A missing value sorts before any present value when ascending, after
//!    when descending.
//! 3. Strings compare with locale-aware collation.
//! 4. Numbers, dates and booleans compare naturally. Integers and floats
//!    compare exactly by value; a date compares with a date-time as its
//!    midnight. Values of other differing kinds in one column are ranked by
//!    kind so the order stays total.
//!
//! Records that compare equal keep their relative input order.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveTime;
use horizon_dataview_core::logging::targets;
use serde::{Deserialize, Serialize};

use super::record::Record;
use super::value::CellValue;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first, missing values first.
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Largest first, missing values last.
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The active sort column and direction.
///
/// The absence of a directive (`Option::None`) means source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortDirective {
    /// Column key to sort by.
    pub key: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortDirective {
    /// Creates a directive.
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    /// Ascending directive on `key`.
    pub fn ascending(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    /// Descending directive on `key`.
    pub fn descending(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Descending)
    }

    /// Applies a header click on `key` to the current directive.
    ///
    /// Clicking a column other than the current key sorts it ascending;
    /// clicking the current key flips the direction. A click never clears
    /// the sort.
    pub fn toggled(current: Option<&SortDirective>, key: &str) -> SortDirective {
        match current {
            Some(directive) if directive.key == key => {
                SortDirective::new(key, directive.direction.reversed())
            }
            _ => SortDirective::ascending(key),
        }
    }
}

/// Locale-aware string comparison.
///
/// With the `localization` feature this wraps an ICU4X collator for the
/// configured locale. Without it, strings compare case-insensitively with a
/// code point tie-break.
pub struct Collator {
    locale: String,
    #[cfg(feature = "localization")]
    inner: Option<icu::collator::CollatorBorrowed<'static>>,
}

impl fmt::Debug for Collator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collator")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl Default for Collator {
    fn default() -> Self {
        Self::new()
    }
}

impl Collator {
    /// Creates a collator for the system locale.
    pub fn new() -> Self {
        Self::with_locale(&system_locale())
    }

    /// Creates a collator for a BCP 47 locale identifier (e.g. "de-DE").
    ///
    /// Unknown or malformed identifiers fall back to root collation.
    #[cfg(feature = "localization")]
    pub fn with_locale(locale: &str) -> Self {
        use icu::collator::options::CollatorOptions;
        use icu::locale::Locale;

        let parsed: Locale = locale.parse().unwrap_or_else(|_| {
            tracing::warn!(target: targets::SORT, locale, "invalid locale, using root collation");
            icu::locale::locale!("und")
        });

        let inner = match icu::collator::Collator::try_new(parsed.into(), CollatorOptions::default())
        {
            Ok(collator) => Some(collator),
            Err(err) => {
                tracing::warn!(target: targets::SORT, locale, %err, "collator unavailable");
                None
            }
        };

        Self {
            locale: locale.to_string(),
            inner,
        }
    }

    /// Creates a collator for a BCP 47 locale identifier (e.g. "de-DE").
    #[cfg(not(feature = "localization"))]
    pub fn with_locale(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
        }
    }

    /// The locale identifier this collator was created for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Compares two strings.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        #[cfg(feature = "localization")]
        if let Some(inner) = &self.inner {
            return inner.compare(a, b);
        }
        fallback_compare(a, b)
    }
}

fn fallback_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// The system locale, or "en-US" when it cannot be detected.
#[cfg(feature = "localization")]
pub fn system_locale() -> String {
    sys_locale::get_locale().unwrap_or_else(|| "en-US".to_string())
}

/// The system locale, or "en-US" when it cannot be detected.
#[cfg(not(feature = "localization"))]
pub fn system_locale() -> String {
    "en-US".to_string()
}

/// Compares two present values of possibly different kinds, ascending.
fn compare_present(a: &CellValue, b: &CellValue, collator: &Collator) -> Ordering {
    match (a, b) {
        (CellValue::String(x), CellValue::String(y)) => collator.compare(x, y),
        (CellValue::Int(x), CellValue::Int(y)) => x.cmp(y),
        (CellValue::Float(x), CellValue::Float(y)) => compare_floats(*x, *y),
        (CellValue::Int(x), CellValue::Float(y)) => compare_int_float(*x, *y),
        (CellValue::Float(x), CellValue::Int(y)) => compare_int_float(*y, *x).reverse(),
        (CellValue::Bool(x), CellValue::Bool(y)) => x.cmp(y),
        (CellValue::Date(x), CellValue::Date(y)) => x.cmp(y),
        (CellValue::DateTime(x), CellValue::DateTime(y)) => x.cmp(y),
        (CellValue::Date(x), CellValue::DateTime(y)) => x.and_time(NaiveTime::MIN).cmp(y),
        (CellValue::DateTime(x), CellValue::Date(y)) => x.cmp(&y.and_time(NaiveTime::MIN)),
        // Mixed kinds rank by kind; composites are all equal to each other.
        _ => a.kind().cmp(&b.kind()),
    }
}

/// Numeric float order; `0.0` and `-0.0` are equal, NaN sorts by sign
/// at the ends.
fn compare_floats(x: f64, y: f64) -> Ordering {
    x.partial_cmp(&y).unwrap_or_else(|| x.total_cmp(&y))
}

/// Compares an integer with a float exactly, without rounding the integer
/// through `f64`.
fn compare_int_float(i: i64, f: f64) -> Ordering {
    // 2^63: the first float above every i64.
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return (i as f64).total_cmp(&f);
    }
    if f >= I64_BOUND {
        return Ordering::Less;
    }
    if f < -I64_BOUND {
        return Ordering::Greater;
    }
    // In range, so the truncation is exact.
    let whole = f.trunc() as i64;
    i.cmp(&whole).then_with(|| {
        let fract = f.fract();
        if fract > 0.0 {
            Ordering::Less
        } else if fract < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

/// Compares two field values under `direction`.
pub fn compare_values(
    a: &CellValue,
    b: &CellValue,
    direction: SortDirection,
    collator: &Collator,
) -> Ordering {
    let ascending = match (a.is_none(), b.is_none()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => compare_present(a, b, collator),
    };
    match direction {
        SortDirection::Ascending => ascending,
        SortDirection::Descending => ascending.reverse(),
    }
}

/// Returns the stable sorted permutation of `records` as indices.
///
/// With no directive the identity order is returned.
pub fn sorted_order<R: Record>(
    records: &[R],
    directive: Option<&SortDirective>,
    collator: &Collator,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    let Some(directive) = directive else {
        return order;
    };

    // Each key is extracted once rather than on every comparison.
    let keys: Vec<CellValue> = records.iter().map(|r| r.field(&directive.key)).collect();
    order.sort_by(|&a, &b| compare_values(&keys[a], &keys[b], directive.direction, collator));

    tracing::trace!(
        target: targets::SORT,
        key = %directive.key,
        direction = ?directive.direction,
        rows = records.len(),
        "sorted records"
    );
    order
}

/// Sorts `records` under `directive`, returning references in the new order.
pub fn sort<'a, R: Record>(
    records: &'a [R],
    directive: Option<&SortDirective>,
    collator: &Collator,
) -> Vec<&'a R> {
    sorted_order(records, directive, collator)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}
