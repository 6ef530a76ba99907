use chrono::Utc;
use gastrack_types::FuelEntry;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

use crate::record::{decode_entries, encode_entries};
use crate::schema::init_schema;
use crate::{EntryStore, Result};

/// Key under which the full entry set is stored as one JSON array
pub const ENTRIES_KEY: &str = "gastrack-entries";

/// SQLite-backed key-value store.
///
/// The database is a single `kv` table; the entry set lives under
/// [`ENTRIES_KEY`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        init_schema(&conn)?;
        tracing::debug!(path = %db_path.display(), "opened entry store");

        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Read the raw value stored under `key`
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Insert or replace the raw value stored under `key`
    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO kv (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

impl EntryStore for SqliteStore {
    fn load_all(&self) -> Result<Vec<FuelEntry>> {
        let Some(payload) = self.get(ENTRIES_KEY)? else {
            return Ok(Vec::new());
        };

        let decoded = decode_entries(&payload)?;
        if decoded.backfilled > 0 {
            tracing::warn!(
                count = decoded.backfilled,
                "assigned identifiers to stored entries that had none"
            );
            self.save_all(&decoded.entries)?;
        }

        tracing::debug!(count = decoded.entries.len(), "loaded entries");
        Ok(decoded.entries)
    }

    fn save_all(&self, entries: &[FuelEntry]) -> Result<()> {
        let payload = encode_entries(entries)?;
        self.put(ENTRIES_KEY, &payload)?;
        tracing::debug!(count = entries.len(), "saved entries");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use gastrack_types::EntryId;

    fn entry(id: &str, odometer: f64) -> FuelEntry {
        FuelEntry {
            id: EntryId::new(id),
            date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
            odometer,
            price_per_liter: 6.09,
            liters: 30.0,
            total_cost: 182.7,
        }
    }

    #[test]
    fn test_empty_store_loads_nothing() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.load_all().unwrap().is_empty());
        assert!(store.get(ENTRIES_KEY).unwrap().is_none());
    }

    #[test]
    fn test_save_replaces_whole_set() {
        let store = SqliteStore::open_in_memory().unwrap();

        store
            .save_all(&[entry("a", 1000.0), entry("b", 1300.0)])
            .unwrap();
        assert_eq!(store.load_all().unwrap().len(), 2);

        store.save_all(&[entry("c", 1600.0)]).unwrap();
        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id.as_str(), "c");
    }

    #[test]
    fn test_raw_key_value_access() {
        let store = SqliteStore::open_in_memory().unwrap();

        store.put("theme", "dark").unwrap();
        store.put("theme", "light").unwrap();

        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
        assert!(store.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_load_repairs_and_persists_missing_ids() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .put(
                ENTRIES_KEY,
                r#"[{"date":"2024-01-01","odometer":1000,"pricePerLiter":5,"liters":40,"totalCost":200}]"#,
            )
            .unwrap();

        let first = store.load_all().unwrap();
        let second = store.load_all().unwrap();

        // The generated id was written back, so it is stable across loads
        assert_eq!(first[0].id, second[0].id);
        assert!(store.get(ENTRIES_KEY).unwrap().unwrap().contains(first[0].id.as_str()));
    }

    #[test]
    fn test_corrupt_payload_is_an_error() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.put(ENTRIES_KEY, "[{]").unwrap();

        let err = store.load_all().unwrap_err();
        assert!(matches!(err, crate::Error::Serialization(_)));
    }
}
