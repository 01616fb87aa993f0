//! Parameterized catalog queries.
//!
//! Queries are built only through the constructors here. Table and column
//! names come from [`Level`]; caller-supplied filter values are always bound
//! parameters.

use pathex_core::level::PARENT_COLUMN;
use pathex_core::{Level, Value};

/// A query template plus its bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    level: Level,
    sql: String,
    params: Vec<Value>,
}

impl CatalogQuery {
    /// Studies whose display name equals `name` exactly.
    #[must_use]
    pub fn study_by_name(name: &str) -> Self {
        let column = Level::Study.display_column().unwrap_or("CourseName");
        Self {
            level: Level::Study,
            sql: format!("SELECT * FROM {} WHERE {column} = ?1", Level::Study.table()),
            params: vec![Value::from(name)],
        }
    }

    /// Rows of `level` whose parent key equals `parent_id`.
    #[must_use]
    pub fn children_of(level: Level, parent_id: Value) -> Self {
        Self {
            level,
            sql: format!("SELECT * FROM {} WHERE {PARENT_COLUMN} = ?1", level.table()),
            params: vec![parent_id],
        }
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    #[must_use]
    pub fn params(&self) -> &[Value] {
        &self.params
    }
}
