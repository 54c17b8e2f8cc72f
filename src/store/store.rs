//! SQLite-backed store for the Chinook database.
//!
//! `SqliteStore` owns one connection for the whole bootstrap: it opens the
//! configured target, enforces foreign keys, creates or validates the schema
//! and runs the bulk load. The connection closes when the store is dropped,
//! on success and on failure alike.

use super::schema::CHINOOK_VERSIONED_SCHEMAS;
use crate::config::{ConnectionTarget, StoreConfig};
use crate::error::BootstrapError;
use crate::loader;
use crate::sample_data::SampleSet;
use rusqlite::{Connection, OpenFlags};
use tracing::info;

/// Lifecycle of a store during bootstrap. There is no path back from
/// `DataLoaded` here; wiping the database is an external operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    Uninitialized,
    SchemaCreated,
    DataLoaded,
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a connection to the configured target.
    ///
    /// For a file-backed target the parent directory is created if missing.
    /// Foreign-key enforcement is per-connection in SQLite, so the pragma is
    /// set here rather than in the DDL.
    pub fn open(config: &impl StoreConfig) -> Result<Self, BootstrapError> {
        let target = config.connection_target();
        let conn = match &target {
            ConnectionTarget::File(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent).map_err(|e| {
                            BootstrapError::Configuration(format!(
                                "cannot create database directory {:?}: {}",
                                parent, e
                            ))
                        })?;
                    }
                }
                Connection::open(path)
            }
            ConnectionTarget::InMemory => Connection::open_in_memory(),
            ConnectionTarget::Uri(uri) => Connection::open_with_flags(
                uri,
                OpenFlags::SQLITE_OPEN_READ_WRITE
                    | OpenFlags::SQLITE_OPEN_CREATE
                    | OpenFlags::SQLITE_OPEN_URI,
            ),
        }
        .map_err(|e| {
            BootstrapError::Configuration(format!("cannot open {}: {}", target.describe(), e))
        })?;

        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(|e| BootstrapError::Schema(e.to_string()))?;

        Ok(SqliteStore { conn })
    }

    /// Create the schema on a fresh database, validate it on an existing one.
    ///
    /// Idempotent: running twice neither errors nor duplicates schema, and no
    /// data is touched. A database whose tables do not match the expected
    /// definitions fails validation with a `Schema` error.
    pub fn init_schema(&self) -> Result<(), BootstrapError> {
        let schema = &CHINOOK_VERSIONED_SCHEMAS[CHINOOK_VERSIONED_SCHEMAS.len() - 1];

        if self.table_count()? == 0 {
            info!("Creating schema at version {}", schema.version);
            schema
                .create(&self.conn)
                .map_err(|e| BootstrapError::Schema(e.to_string()))?;
        } else {
            schema
                .validate(&self.conn)
                .map_err(|e| BootstrapError::Schema(e.to_string()))?;
        }
        Ok(())
    }

    /// Insert all sample rows in one transaction. See [`loader::load_samples`].
    pub fn load_samples(&self, samples: &SampleSet) -> Result<(), BootstrapError> {
        loader::load_samples(&self.conn, samples)
    }

    pub fn state(&self) -> Result<BootstrapState, BootstrapError> {
        if self.table_count()? == 0 {
            return Ok(BootstrapState::Uninitialized);
        }
        // The load is all-or-nothing, so one root entity stands in for all.
        if self.entity_count("artists")? == 0 {
            Ok(BootstrapState::SchemaCreated)
        } else {
            Ok(BootstrapState::DataLoaded)
        }
    }

    /// Row count of one entity table.
    pub fn entity_count(&self, table: &str) -> Result<i64, BootstrapError> {
        self.conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))
            .map_err(|e| BootstrapError::Schema(format!("{}: {}", table, e)))
    }

    /// Row counts for every table in the schema, in schema order.
    pub fn counts(&self) -> Result<Vec<(&'static str, i64)>, BootstrapError> {
        let schema = &CHINOOK_VERSIONED_SCHEMAS[CHINOOK_VERSIONED_SCHEMAS.len() - 1];
        schema
            .tables
            .iter()
            .map(|table| Ok((table.name, self.entity_count(table.name)?)))
            .collect()
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn table_count(&self) -> Result<i64, BootstrapError> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
                [],
                |r| r.get(0),
            )
            .map_err(|e| BootstrapError::Schema(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::path::PathBuf;

    fn in_memory_store() -> SqliteStore {
        let config = AppConfig {
            target: ConnectionTarget::InMemory,
            samples_dir: PathBuf::from("samples"),
        };
        SqliteStore::open(&config).unwrap()
    }

    #[test]
    fn test_state_transitions() {
        let store = in_memory_store();
        assert_eq!(store.state().unwrap(), BootstrapState::Uninitialized);

        store.init_schema().unwrap();
        assert_eq!(store.state().unwrap(), BootstrapState::SchemaCreated);

        store
            .connection()
            .execute("INSERT INTO artists (artist_id, name) VALUES (1, 'AC/DC')", [])
            .unwrap();
        assert_eq!(store.state().unwrap(), BootstrapState::DataLoaded);
    }

    #[test]
    fn test_init_schema_twice_is_fine() {
        let store = in_memory_store();
        store.init_schema().unwrap();
        store.init_schema().unwrap();
        assert_eq!(store.state().unwrap(), BootstrapState::SchemaCreated);
    }

    #[test]
    fn test_init_schema_rejects_foreign_database() {
        let store = in_memory_store();
        store
            .connection()
            .execute("CREATE TABLE something_else (id INTEGER PRIMARY KEY)", [])
            .unwrap();

        let result = store.init_schema();
        assert!(matches!(result, Err(BootstrapError::Schema(_))));
    }

    #[test]
    fn test_counts_cover_all_eleven_tables() {
        let store = in_memory_store();
        store.init_schema().unwrap();
        let counts = store.counts().unwrap();
        assert_eq!(counts.len(), 11);
        assert!(counts.iter().all(|(_, count)| *count == 0));
    }
}
