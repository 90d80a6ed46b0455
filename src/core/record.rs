//! Record abstraction for list views
//!
//! The engine is generic over record shape: it only ever reads the fields
//! named by the active search/sort configuration, through [`Record`].

use crate::core::field::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One row of domain data, exposing named fields for searching and sorting
pub trait Record: Clone + Send + Sync {
    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}

/// A schema-less record backed by an insertion-ordered field map
///
/// This is the shape most dashboards end up with: JSON objects whose exact
/// field set varies per resource and is only known from configuration.
/// Deserializes directly from a flat JSON object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct DynRecord {
    fields: IndexMap<String, FieldValue>,
}

impl DynRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Get a field value by name
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Set a field value, replacing any previous value
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Render the identifier under the given field name as a path-ready string
    ///
    /// Returns `None` when the field is absent or null; numeric identifiers
    /// render as their decimal text.
    pub fn id(&self, id_field: &str) -> Option<String> {
        match self.fields.get(id_field) {
            None | Some(FieldValue::Null) => None,
            Some(value) => Some(value.search_text()),
        }
    }

    /// Field names in insertion order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Record for DynRecord {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        self.fields.get(field).cloned()
    }
}

impl FromIterator<(String, FieldValue)> for DynRecord {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Generate a [`Record`] implementation for a plain struct
///
/// Each listed field must be `Clone` and convertible into
/// [`FieldValue`] (strings, integers, floats, booleans, and `Option`s
/// of those).
///
/// # Example
/// ```rust,ignore
/// #[derive(Clone)]
/// struct Seizure {
///     id: i64,
///     vehicle_number: String,
///     location: String,
/// }
///
/// impl_record!(Seizure, [id, vehicle_number, location]);
/// ```
#[macro_export]
macro_rules! impl_record {
    ($type:ty, [$($field:ident),+ $(,)?]) => {
        impl $crate::core::record::Record for $type {
            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                match field {
                    $(stringify!($field) => Some(self.$field.clone().into()),)+
                    _ => None,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dyn_record_builder() {
        let record = DynRecord::new()
            .with("id", 3)
            .with("vehicle_number", "MH-12-AB-1234")
            .with("impounded", true);

        assert_eq!(record.len(), 3);
        assert_eq!(
            record.field_value("vehicle_number"),
            Some(FieldValue::String("MH-12-AB-1234".to_string()))
        );
        assert_eq!(record.field_value("missing"), None);
    }

    #[test]
    fn test_dyn_record_preserves_field_order() {
        let record = DynRecord::new().with("b", 1).with("a", 2).with("c", 3);
        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_dyn_record_id_renders_numbers() {
        let record = DynRecord::new().with("id", 42).with("name", "x");
        assert_eq!(record.id("id"), Some("42".to_string()));
        assert_eq!(record.id("uuid"), None);
    }

    #[test]
    fn test_dyn_record_id_null_is_absent() {
        let record = DynRecord::new().with("id", FieldValue::Null);
        assert_eq!(record.id("id"), None);
    }

    #[test]
    fn test_dyn_record_from_json_object() {
        let record: DynRecord = serde_json::from_str(
            r#"{"id": 7, "location": "Dimapur", "amount": 1200.5, "verified": false, "note": null}"#,
        )
        .expect("flat object should deserialize");

        assert_eq!(record.get("id"), Some(&FieldValue::Integer(7)));
        assert_eq!(record.get("amount"), Some(&FieldValue::Float(1200.5)));
        assert_eq!(record.get("verified"), Some(&FieldValue::Boolean(false)));
        assert!(record.get("note").unwrap().is_null());
    }

    #[derive(Clone)]
    struct Seizure {
        id: i64,
        vehicle_number: String,
        recovered: bool,
    }

    impl_record!(Seizure, [id, vehicle_number, recovered]);

    #[test]
    fn test_impl_record_macro() {
        let row = Seizure {
            id: 9,
            vehicle_number: "NL-01-K-7777".to_string(),
            recovered: true,
        };

        assert_eq!(row.field_value("id"), Some(FieldValue::Integer(9)));
        assert_eq!(
            row.field_value("vehicle_number"),
            Some(FieldValue::String("NL-01-K-7777".to_string()))
        );
        assert_eq!(row.field_value("recovered"), Some(FieldValue::Boolean(true)));
        assert_eq!(row.field_value("unknown"), None);
    }
}
