//! Ordered column → value records.
//!
//! A record is built once per catalog row and keeps the result set's column
//! order. Both metadata encodings walk it in that order, so the order is part
//! of the output format.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::errors::CoreError;
use crate::value::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Zip a row with its column names. Extra cells or columns are dropped.
    #[must_use]
    pub fn from_row(columns: &[String], row: Vec<Value>) -> Self {
        Self {
            fields: columns.iter().cloned().zip(row).collect(),
        }
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.fields.push((column.into(), value.into()));
    }

    /// Builder-style [`Record::push`].
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(column, value);
        self
    }

    /// The first value stored under `column`.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// The value under `column`, failing if the column is absent or null.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingAttribute`] or [`CoreError::NullAttribute`].
    pub fn require(&self, column: &str) -> Result<&Value, CoreError> {
        match self.get(column) {
            None => Err(CoreError::MissingAttribute {
                column: column.to_string(),
            }),
            Some(Value::Null) => Err(CoreError::NullAttribute {
                column: column.to_string(),
            }),
            Some(value) => Ok(value),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Leaf record for a slide: the slide's pairs followed by its image's.
    ///
    /// Columns present in both (`Id`, `ParentId`, ...) appear twice.
    #[must_use]
    pub fn merged(slide: &Self, image: &Self) -> Self {
        Self {
            fields: slide
                .fields
                .iter()
                .chain(image.fields.iter())
                .cloned()
                .collect(),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
