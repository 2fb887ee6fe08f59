//! The record contract.
//!
//! The engine never assumes a concrete schema. It reads a record's fields by
//! the keys declared in the column registry (for sorting and rendering) and
//! enumerates all of its field values (for searching).

use super::value::CellValue;

/// A row in a data view.
///
/// # Example
///
/// ```
/// use horizon_dataview::model::{CellValue, Record};
///
/// struct Supplier {
///     name: String,
///     rating: Option<i64>,
/// }
///
/// impl Record for Supplier {
///     fn field(&self, key: &str) -> CellValue {
///         match key {
///             "name" => CellValue::from(&self.name),
///             "rating" => CellValue::from(self.rating),
///             _ => CellValue::None,
///         }
///     }
///
///     fn field_values(&self) -> Vec<CellValue> {
///         vec![self.field("name"), self.field("rating")]
///     }
/// }
/// ```
pub trait Record {
    /// Returns the value of the field named `key`, or [`CellValue::None`] if
    /// the record has no such field.
    fn field(&self, key: &str) -> CellValue;

    /// Returns every field value of the record. Used by search, which looks
    /// at all fields rather than only the declared columns.
    fn field_values(&self) -> Vec<CellValue>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, key: &str) -> CellValue {
        (**self).field(key)
    }

    fn field_values(&self) -> Vec<CellValue> {
        (**self).field_values()
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, key: &str) -> CellValue {
        self.get(key).map(CellValue::from).unwrap_or_default()
    }

    fn field_values(&self) -> Vec<CellValue> {
        self.values().map(CellValue::from).collect()
    }
}

/// JSON objects are records; any other JSON value is a record with no fields.
impl Record for serde_json::Value {
    fn field(&self, key: &str) -> CellValue {
        match self {
            serde_json::Value::Object(map) => map.field(key),
            _ => CellValue::None,
        }
    }

    fn field_values(&self) -> Vec<CellValue> {
        match self {
            serde_json::Value::Object(map) => map.field_values(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_object_record() {
        let record = json!({"name": "Acme", "orders": 12, "tags": ["a"]});
        assert_eq!(record.field("name"), CellValue::from("Acme"));
        assert_eq!(record.field("orders"), CellValue::Int(12));
        assert_eq!(record.field("missing"), CellValue::None);
        assert_eq!(record.field_values().len(), 3);
    }

    #[test]
    fn test_non_object_json_has_no_fields() {
        let record = json!(42);
        assert_eq!(record.field("anything"), CellValue::None);
        assert!(record.field_values().is_empty());
    }
}
