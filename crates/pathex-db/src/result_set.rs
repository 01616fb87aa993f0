//! Rectangular query results.

use pathex_core::{Record, Value};
use serde::Serialize;

/// Column names plus rows, each row aligned with `columns`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    #[must_use]
    pub const fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Convert every row into an ordered [`Record`].
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        let Self { columns, rows } = self;
        rows.into_iter()
            .map(|row| Record::from_row(&columns, row))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_records_zips_each_row() {
        let mut set = ResultSet::new(vec!["Id".into(), "Name".into()]);
        set.rows.push(vec![Value::Integer(1), Value::from("a")]);
        set.rows.push(vec![Value::Integer(2), Value::Null]);

        let records = set.into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("Id"), Some(&Value::Integer(2)));
        assert_eq!(records[1].get("Name"), Some(&Value::Null));
    }
}
