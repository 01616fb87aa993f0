//! # pathex-db
//!
//! Read access to the pathology catalog.
//!
//! The export walker only needs one capability from the database: run a
//! parameterized query and hand back column names plus rows. That capability
//! is the [`TabularSource`] trait; [`CatalogDb`] implements it over libSQL
//! (local file, `:memory:`, or a remote `libsql://` server).
//!
//! A single connection is reused for every query, and each result set is
//! drained completely before the call returns, so queries never interleave.

pub mod error;
pub mod query;
pub mod result_set;

use std::future::Future;

use error::DatabaseError;
use libsql::Builder;
use libsql::params::Params;
use pathex_config::DatabaseConfig;
use pathex_core::Value;

pub use query::CatalogQuery;
pub use result_set::ResultSet;

/// Anything that can answer a [`CatalogQuery`] with a full result set.
pub trait TabularSource {
    /// Run `query` and return every row.
    fn execute(
        &self,
        query: &CatalogQuery,
    ) -> impl Future<Output = Result<ResultSet, DatabaseError>> + Send;
}

/// libSQL-backed catalog handle.
pub struct CatalogDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl CatalogDb {
    /// Open a local database file (or `:memory:`).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        Ok(Self { db, conn })
    }

    /// Open a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        Ok(Self { db, conn })
    }

    /// Open whichever database `config` describes.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Other` for an unusable config and
    /// `DatabaseError::LibSql` if opening fails.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        config
            .validate()
            .map_err(|e| DatabaseError::Other(anyhow::Error::new(e)))?;
        if config.is_remote() {
            tracing::debug!(url = %config.url, "opening remote catalog");
            Self::open_remote(&config.url, &config.auth_token).await
        } else {
            tracing::debug!(path = %config.url, "opening local catalog");
            Self::open_local(&config.url).await
        }
    }

    /// Access the underlying libSQL connection for direct statements.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Names of all user tables, sorted.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the catalog cannot be read.
    pub async fn list_tables(&self) -> Result<Vec<String>, DatabaseError> {
        let set = self
            .run(
                "SELECT name FROM sqlite_master \
                 WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
                Vec::new(),
            )
            .await?;
        set.rows
            .into_iter()
            .map(|row| match row.into_iter().next() {
                Some(Value::Text(name)) => Ok(name),
                other => Err(DatabaseError::Query(format!(
                    "unexpected table name value: {other:?}"
                ))),
            })
            .collect()
    }

    /// Column names and at most one row of `table`.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::UnknownTable`] if `table` is not a user table.
    pub async fn peek_table(&self, table: &str) -> Result<ResultSet, DatabaseError> {
        if !self.list_tables().await?.iter().any(|t| t == table) {
            return Err(DatabaseError::UnknownTable(table.to_string()));
        }
        let quoted = table.replace('"', "\"\"");
        self.run(&format!("SELECT * FROM \"{quoted}\" LIMIT 1"), Vec::new())
            .await
    }

    async fn run(&self, sql: &str, params: Vec<Value>) -> Result<ResultSet, DatabaseError> {
        tracing::debug!(sql, params = params.len(), "catalog query");
        let params = Params::Positional(params.into_iter().map(to_libsql).collect());
        let mut rows = self.conn.query(sql, params).await?;

        let column_count = rows.column_count();
        let columns = (0..column_count)
            .map(|idx| rows.column_name(idx).unwrap_or_default().to_string())
            .collect();
        let mut set = ResultSet::new(columns);

        while let Some(row) = rows.next().await? {
            let values = (0..column_count)
                .map(|idx| row.get_value(idx).map(from_libsql))
                .collect::<Result<Vec<_>, _>>()?;
            set.rows.push(values);
        }
        Ok(set)
    }
}

impl TabularSource for CatalogDb {
    async fn execute(&self, query: &CatalogQuery) -> Result<ResultSet, DatabaseError> {
        self.run(query.sql(), query.params().to_vec())
            .await
            .map_err(|e| match e {
                DatabaseError::LibSql(inner) => DatabaseError::Query(format!(
                    "{} query failed: {inner}",
                    query.level()
                )),
                other => other,
            })
    }
}

fn to_libsql(value: Value) -> libsql::Value {
    match value {
        Value::Null => libsql::Value::Null,
        Value::Integer(i) => libsql::Value::Integer(i),
        Value::Real(r) => libsql::Value::Real(r),
        Value::Text(s) => libsql::Value::Text(s),
        Value::Blob(b) => libsql::Value::Blob(b),
    }
}

fn from_libsql(value: libsql::Value) -> Value {
    match value {
        libsql::Value::Null => Value::Null,
        libsql::Value::Integer(i) => Value::Integer(i),
        libsql::Value::Real(r) => Value::Real(r),
        libsql::Value::Text(s) => Value::Text(s),
        libsql::Value::Blob(b) => Value::Blob(b),
    }
}

#[cfg(test)]
mod tests {
    use pathex_core::Level;
    use pretty_assertions::assert_eq;

    use super::*;

    async fn test_db() -> CatalogDb {
        let db = CatalogDb::open_local(":memory:").await.unwrap();
        db.conn()
            .execute_batch(
                "CREATE TABLE Course (Id INTEGER PRIMARY KEY, CourseName TEXT, Notes TEXT);
                 CREATE TABLE Lesson (Id INTEGER PRIMARY KEY, ParentId INTEGER, LessonName TEXT, Score REAL);
                 INSERT INTO Course VALUES (1, 'Study A', NULL), (2, 'Study B', 'n');
                 INSERT INTO Lesson VALUES (10, 1, 'E1', 0.5), (11, 1, 'E2', NULL), (12, 2, 'E3', 2.0);",
            )
            .await
            .unwrap();
        db
    }

    #[tokio::test]
    async fn study_query_matches_exact_name() {
        let db = test_db().await;
        let set = db
            .execute(&CatalogQuery::study_by_name("Study A"))
            .await
            .unwrap();
        assert_eq!(set.columns, vec!["Id", "CourseName", "Notes"]);
        assert_eq!(
            set.rows,
            vec![vec![Value::Integer(1), Value::from("Study A"), Value::Null]]
        );

        let none = db
            .execute(&CatalogQuery::study_by_name("Study"))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn children_query_filters_by_parent() {
        let db = test_db().await;
        let set = db
            .execute(&CatalogQuery::children_of(Level::Experiment, Value::Integer(1)))
            .await
            .unwrap();
        let records = set.into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("Score"), Some(&Value::Real(0.5)));
        assert_eq!(records[1].get("Score"), Some(&Value::Null));
    }

    #[tokio::test]
    async fn empty_result_keeps_columns() {
        let db = test_db().await;
        let set = db
            .execute(&CatalogQuery::children_of(Level::Experiment, Value::Integer(99)))
            .await
            .unwrap();
        assert!(set.is_empty());
        assert_eq!(set.columns.len(), 4);
    }

    #[tokio::test]
    async fn missing_table_is_a_query_error() {
        let db = test_db().await;
        let result = db
            .execute(&CatalogQuery::children_of(Level::Slide, Value::Integer(1)))
            .await;
        assert!(matches!(result, Err(DatabaseError::Query(_))));
    }

    #[tokio::test]
    async fn list_tables_is_sorted() {
        let db = test_db().await;
        assert_eq!(db.list_tables().await.unwrap(), vec!["Course", "Lesson"]);
    }

    #[tokio::test]
    async fn peek_table_returns_first_row() {
        let db = test_db().await;
        let set = db.peek_table("Lesson").await.unwrap();
        assert_eq!(set.columns, vec!["Id", "ParentId", "LessonName", "Score"]);
        assert_eq!(set.rows.len(), 1);
    }

    #[tokio::test]
    async fn peek_table_rejects_unknown_names() {
        let db = test_db().await;
        let result = db.peek_table("Course; DROP TABLE Course").await;
        assert!(matches!(result, Err(DatabaseError::UnknownTable(_))));
    }
}
