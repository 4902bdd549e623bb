//! `src/store/catalog.rs`
//! ============================================================================
//! # ModelStore: Read-Only SQLite Adapter for the Model Catalog
//!
//! Executes the single read query the viewer needs against the backing
//! database. The store never writes; the record set is an immutable snapshot
//! per load. A missing database file is reported before any connection is
//! attempted so the caller can distinguish "not installed" from "corrupt".

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags, types::Value as SqlValue};
use tracing::{info, instrument};

use crate::error::AppError;
use crate::store::record::ModelRecord;

/// Canonical catalog query. Results are ordered by name, case-insensitive
/// ascending; ties keep the store's natural row order.
const LOAD_QUERY: &str = "
    SELECT
        json_extract(config, '$.name') AS model_name,
        json_extract(config, '$.type') AS model_type,
        json_extract(config, '$.base') AS model_base,
        json_extract(config, '$.trigger_phrases') AS trigger_phrases,
        json_extract(config, '$.path') AS model_path
    FROM models
    ORDER BY model_name COLLATE NOCASE ASC
";

/// Handle to the on-disk model catalog.
#[derive(Debug, Clone)]
pub struct ModelStore {
    db_path: PathBuf,
}

impl ModelStore {
    #[must_use]
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    #[must_use]
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Load the full record set, normalized per row.
    ///
    /// Fails fast with `StoreUnavailable` when the database file does not
    /// exist; any query or decode failure is `StoreCorrupt`. Individual
    /// trigger-phrase payloads never fail the load.
    #[instrument(skip(self), fields(db = %self.db_path.display()))]
    pub fn load_all(&self) -> Result<Vec<ModelRecord>, AppError> {
        if !self.db_path.exists() {
            return Err(AppError::StoreUnavailable(self.db_path.clone()));
        }

        let conn: Connection =
            Connection::open_with_flags(&self.db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;

        let mut stmt = conn.prepare(LOAD_QUERY)?;
        let rows = stmt.query_map([], |row| {
            Ok(ModelRecord::from_raw(
                row.get::<_, Option<String>>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<String>>(2)?,
                raw_text(row.get::<_, SqlValue>(3)?),
                row.get::<_, Option<String>>(4)?,
            ))
        })?;

        let records: Vec<ModelRecord> = rows.collect::<Result<_, _>>()?;
        info!("loaded {} model records", records.len());

        Ok(records)
    }
}

/// The trigger-phrase column may carry JSON text, a bare scalar, or NULL
/// depending on how the row was written. Stringify whatever arrives; the
/// record-level parser sorts out the rest.
fn raw_text(value: SqlValue) -> Option<String> {
    match value {
        SqlValue::Null => None,
        SqlValue::Text(s) => Some(s),
        SqlValue::Integer(i) => Some(i.to_string()),
        SqlValue::Real(f) => Some(f.to_string()),
        SqlValue::Blob(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture_store(configs: &[&str]) -> (TempDir, ModelStore) {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("models.db");

        let conn = Connection::open(&db_path).unwrap();
        conn.execute("CREATE TABLE models (config TEXT NOT NULL)", [])
            .unwrap();
        for config in configs {
            conn.execute("INSERT INTO models (config) VALUES (?1)", [config])
                .unwrap();
        }

        (dir, ModelStore::new(db_path))
    }

    #[test]
    fn missing_database_is_unavailable_not_corrupt() {
        let store = ModelStore::new(PathBuf::from("/nonexistent/models.db"));
        assert!(matches!(
            store.load_all(),
            Err(AppError::StoreUnavailable(_))
        ));
    }

    #[test]
    fn malformed_schema_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("models.db");
        let conn = Connection::open(&db_path).unwrap();
        conn.execute("CREATE TABLE not_models (x TEXT)", []).unwrap();
        drop(conn);

        let store = ModelStore::new(db_path);
        assert!(matches!(store.load_all(), Err(AppError::StoreCorrupt(_))));
    }

    #[test]
    fn loads_and_normalizes_records_in_name_order() {
        let (_dir, store) = fixture_store(&[
            r#"{"name":"foo","type":"lora","base":"sdxl","path":"u1/foo.safetensors"}"#,
            r#"{"name":"bar","type":"main","base":"sd1","path":null}"#,
        ]);

        let records = store.load_all().unwrap();
        assert_eq!(records.len(), 2);

        // Case-insensitive name ascending: bar before foo.
        assert_eq!(records[0].display_name, "bar");
        assert_eq!(records[0].storage_path, "");
        assert_eq!(records[1].display_name, "foo.safetensors");
        assert_eq!(records[1].model_type, "lora");
        assert_eq!(records[1].model_subtype, "sdxl");
    }

    #[test]
    fn loaded_records_feed_the_filter_engine() {
        use crate::model::catalog_state::CatalogState;
        use crate::model::ui_state::FilterField;

        let (_dir, store) = fixture_store(&[
            r#"{"name":"foo","type":"lora","base":"sdxl","path":"u1/foo.safetensors"}"#,
            r#"{"name":"bar","type":"main","base":"sd1","path":null}"#,
        ]);

        let mut engine = CatalogState::new();
        engine.set_records(store.load_all().unwrap());
        assert_eq!(engine.visible_count(), 2);

        engine.set_filter(FilterField::Type, "lora");
        assert_eq!(engine.visible_count(), 1);
        assert_eq!(engine.visible()[0].display_name, "foo.safetensors");
    }

    #[test]
    fn trigger_phrases_survive_the_round_trip() {
        let (_dir, store) = fixture_store(&[
            r#"{"name":"zavy","type":"lora","base":"sdxl","trigger_phrases":["zavy","zv"],"path":"z/zavy.pt"}"#,
        ]);

        let records = store.load_all().unwrap();
        assert_eq!(records[0].triggers_joined(), "zavy, zv");
    }
}
