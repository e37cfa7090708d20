use std::collections::BTreeMap;

use crate::domain::entities::value::FieldValue;

/// One row the table engine can search, filter, sort and export.
///
/// `field` is the accessor used for column filters, sorting and export;
/// `values` lists every field of the row for global search, including fields
/// that no column displays.
pub trait Record {
    fn field(&self, key: &str) -> FieldValue;

    fn values(&self) -> Vec<FieldValue>;
}

/// Loosely shaped row keyed by field name.
pub type DynamicRecord = BTreeMap<String, FieldValue>;

impl Record for DynamicRecord {
    fn field(&self, key: &str) -> FieldValue {
        self.get(key).cloned().unwrap_or(FieldValue::Missing)
    }

    fn values(&self) -> Vec<FieldValue> {
        BTreeMap::values(self).cloned().collect()
    }
}

/// Builds a [`DynamicRecord`] from `(key, value)` pairs.
pub fn dynamic_record<K, V, I>(fields: I) -> DynamicRecord
where
    K: Into<String>,
    V: Into<FieldValue>,
    I: IntoIterator<Item = (K, V)>,
{
    fields
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}
