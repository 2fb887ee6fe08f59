//! Field values for data-view records.
//!
//! Records expose their fields as [`CellValue`]s. The engine only ever looks
//! at values through this enum: the sort engine orders them, the filter
//! engine coerces the scalar ones to text, and the default cell renderer
//! displays them.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

/// A single field value of a record.
///
/// # Example
///
/// ```
/// use horizon_dataview::model::CellValue;
///
/// let value = CellValue::from("Alice");
/// assert_eq!(value.as_str(), Some("Alice"));
///
/// let value = CellValue::from(42);
/// assert_eq!(value.as_int(), Some(42));
/// assert_eq!(value.search_text().as_deref(), Some("42"));
///
/// assert!(CellValue::None.search_text().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    /// Missing or null value.
    #[default]
    None,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Calendar date.
    Date(NaiveDate),
    /// Date and time without timezone.
    DateTime(NaiveDateTime),
    /// Text value.
    String(String),
    /// Array of values. Never searched.
    List(Vec<CellValue>),
    /// Nested object. Never searched.
    Object(BTreeMap<String, CellValue>),
}

/// Ordering rank of each value kind, used when a column holds mixed types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum ValueKind {
    Bool,
    Number,
    Temporal,
    String,
    Composite,
}

impl CellValue {
    /// Returns `true` if this is `CellValue::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, CellValue::None)
    }

    /// Returns `true` if this value participates in search: strings, numbers,
    /// booleans and dates.
    pub fn is_scalar(&self) -> bool {
        !matches!(
            self,
            CellValue::None | CellValue::List(_) | CellValue::Object(_)
        )
    }

    /// Attempts to get the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the value as a float. Integers are widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(n) => Some(*n),
            CellValue::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Text used for matching search terms, or `None` for values that never
    /// match (null, arrays, nested objects).
    pub fn search_text(&self) -> Option<String> {
        if self.is_scalar() {
            Some(self.to_string())
        } else {
            None
        }
    }

    pub(crate) fn kind(&self) -> Option<ValueKind> {
        match self {
            CellValue::None => None,
            CellValue::Bool(_) => Some(ValueKind::Bool),
            CellValue::Int(_) | CellValue::Float(_) => Some(ValueKind::Number),
            CellValue::Date(_) | CellValue::DateTime(_) => Some(ValueKind::Temporal),
            CellValue::String(_) => Some(ValueKind::String),
            CellValue::List(_) | CellValue::Object(_) => Some(ValueKind::Composite),
        }
    }
}

/// Formats a float the way a dashboard shows it: integral values without a
/// trailing `.0`.
fn format_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{n}")
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::None => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(n) => format_float(f, *n),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::String(s) => f.write_str(s),
            CellValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            CellValue::Object(map) => write!(f, "{{{} fields}}", map.len()),
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        CellValue::String(s.clone())
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Int(i64::from(n))
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Int(i64::from(n))
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::None,
        }
    }
}

impl<T: Into<CellValue>> From<Vec<T>> for CellValue {
    fn from(items: Vec<T>) -> Self {
        CellValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => CellValue::None,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Int(i),
                None => n.as_f64().map(CellValue::Float).unwrap_or_default(),
            },
            Value::String(s) => CellValue::String(s.clone()),
            Value::Array(items) => CellValue::List(items.iter().map(CellValue::from).collect()),
            Value::Object(map) => CellValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), CellValue::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_search_text() {
        assert_eq!(CellValue::from("Ünïcode").search_text().as_deref(), Some("Ünïcode"));
        assert_eq!(CellValue::from(true).search_text().as_deref(), Some("true"));
        assert_eq!(CellValue::from(3.0).search_text().as_deref(), Some("3"));
        assert_eq!(CellValue::from(2.5).search_text().as_deref(), Some("2.5"));
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(CellValue::from(date).search_text().as_deref(), Some("2024-03-09"));
    }

    #[test]
    fn test_non_scalars_never_search() {
        assert!(CellValue::None.search_text().is_none());
        assert!(CellValue::from(vec!["a", "b"]).search_text().is_none());
        assert!(CellValue::Object(BTreeMap::new()).search_text().is_none());
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(CellValue::from(None::<i64>), CellValue::None);
        assert_eq!(CellValue::from(Some("x")), CellValue::from("x"));
    }

    #[test]
    fn test_small_integer_conversion() {
        assert_eq!(CellValue::from(-7i32), CellValue::Int(-7));
        assert_eq!(CellValue::from(u32::MAX), CellValue::Int(4_294_967_295));
    }

    #[test]
    fn test_from_json() {
        assert_eq!(CellValue::from(&json!(null)), CellValue::None);
        assert_eq!(CellValue::from(&json!(7)), CellValue::Int(7));
        assert_eq!(CellValue::from(&json!(7.5)), CellValue::Float(7.5));
        assert_eq!(CellValue::from(&json!("hi")), CellValue::from("hi"));
        assert!(matches!(CellValue::from(&json!([1, 2])), CellValue::List(ref v) if v.len() == 2));
        assert!(matches!(CellValue::from(&json!({"a": 1})), CellValue::Object(_)));
    }

    #[test]
    fn test_display_list() {
        let value = CellValue::from(vec![1, 2, 3]);
        assert_eq!(value.to_string(), "1, 2, 3");
        assert_eq!(CellValue::None.to_string(), "");
    }
}
