//! In-memory stand-ins for the catalog and the content store.

#[cfg(test)]
pub(crate) mod fakes {
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use pathex_core::level::PARENT_COLUMN;
    use pathex_core::{Level, Value};
    use pathex_db::error::DatabaseError;
    use pathex_db::{CatalogQuery, ResultSet, TabularSource};
    use pathex_store::{BlobFetch, FetchOutcome};

    /// Tables keyed by level, filtered the way the real queries filter.
    #[derive(Default)]
    pub struct FakeCatalog {
        tables: HashMap<Level, ResultSet>,
        pub queries: Mutex<Vec<(Level, Value)>>,
        pub fail_on: Option<Level>,
    }

    impl FakeCatalog {
        pub fn table(mut self, level: Level, columns: &[&str], rows: Vec<Vec<Value>>) -> Self {
            let mut set = ResultSet::new(columns.iter().map(|c| (*c).to_string()).collect());
            set.rows = rows;
            self.tables.insert(level, set);
            self
        }
    }

    impl TabularSource for FakeCatalog {
        async fn execute(&self, query: &CatalogQuery) -> Result<ResultSet, DatabaseError> {
            let level = query.level();
            let param = query.params()[0].clone();
            self.queries.lock().unwrap().push((level, param.clone()));

            if self.fail_on == Some(level) {
                return Err(DatabaseError::Query(format!("{level} table unavailable")));
            }

            let Some(table) = self.tables.get(&level) else {
                return Err(DatabaseError::Query(format!("no such table: {}", level.table())));
            };
            let filter = if level == Level::Study {
                level.display_column().unwrap_or_default()
            } else {
                PARENT_COLUMN
            };
            let idx = table
                .columns
                .iter()
                .position(|c| c == filter)
                .ok_or_else(|| DatabaseError::Query(format!("no such column: {filter}")))?;

            let mut out = ResultSet::new(table.columns.clone());
            out.rows = table
                .rows
                .iter()
                .filter(|row| row[idx] == param)
                .cloned()
                .collect();
            Ok(out)
        }
    }

    /// Serves objects from a map and records every call.
    #[derive(Default)]
    pub struct FakeFetcher {
        objects: HashMap<String, Vec<u8>>,
        pub calls: Mutex<Vec<(String, PathBuf)>>,
    }

    impl FakeFetcher {
        pub fn object(mut self, key: &str, body: &[u8]) -> Self {
            self.objects.insert(key.to_string(), body.to_vec());
            self
        }
    }

    impl BlobFetch for FakeFetcher {
        async fn fetch(&self, key: &str, dest: &Path) -> FetchOutcome {
            self.calls
                .lock()
                .unwrap()
                .push((key.to_string(), dest.to_path_buf()));
            match self.objects.get(key) {
                Some(body) => match std::fs::write(dest, body) {
                    Ok(()) => FetchOutcome::Fetched {
                        key: key.to_string(),
                        bytes: body.len() as u64,
                    },
                    Err(e) => FetchOutcome::Failed {
                        key: key.to_string(),
                        reason: e.to_string(),
                    },
                },
                None => FetchOutcome::Failed {
                    key: key.to_string(),
                    reason: "not found".to_string(),
                },
            }
        }
    }
}
