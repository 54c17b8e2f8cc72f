//! End-to-end tests for the bootstrap sequence: schema creation, bulk load,
//! rollback behavior and referential integrity of the loaded store.

mod common;

use chinook_store::{
    run_bootstrap, AppConfig, BootstrapError, BootstrapState, ConnectionTarget, SampleSet,
    SqliteStore,
};
use common::{bundled_samples_dir, copy_samples_to, truncate_to_header};
use tempfile::TempDir;

fn file_config(db_path: &std::path::Path) -> AppConfig {
    AppConfig {
        target: ConnectionTarget::File(db_path.to_path_buf()),
        samples_dir: bundled_samples_dir(),
    }
}

fn in_memory_config() -> AppConfig {
    AppConfig {
        target: ConnectionTarget::InMemory,
        samples_dir: bundled_samples_dir(),
    }
}

#[test]
fn test_file_backed_bootstrap_creates_db_and_populates() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("db").join("chinook.db");
    assert!(!db_path.exists());

    let summary = run_bootstrap(&file_config(&db_path)).unwrap();

    assert!(db_path.exists());
    assert!(summary.count_of("albums") > 0);

    // Every entity ends up with exactly as many rows as its source file.
    let samples = SampleSet::load(&bundled_samples_dir()).unwrap();
    for (table, expected) in samples.counts() {
        assert_eq!(
            summary.count_of(table),
            expected as i64,
            "row count mismatch for {}",
            table
        );
    }
}

#[test]
fn test_in_memory_bootstrap_holds_counts_for_connection_lifetime() {
    let summary = run_bootstrap(&in_memory_config()).unwrap();
    assert!(summary.count_of("albums") > 0);

    // Driving the steps against a live in-memory store directly.
    let store = SqliteStore::open(&in_memory_config()).unwrap();
    store.init_schema().unwrap();
    let samples = SampleSet::load(&bundled_samples_dir()).unwrap();
    store.load_samples(&samples).unwrap();

    assert_eq!(store.state().unwrap(), BootstrapState::DataLoaded);
    assert_eq!(
        store.entity_count("tracks").unwrap(),
        samples.tracks.len() as i64
    );
}

#[test]
fn test_rerunning_bootstrap_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("chinook.db");
    let config = file_config(&db_path);

    let first = run_bootstrap(&config).unwrap();
    let second = run_bootstrap(&config).unwrap();

    assert_eq!(first.count_of("tracks"), second.count_of("tracks"));
    assert_eq!(first.count_of("invoices"), second.count_of("invoices"));
}

#[test]
fn test_loading_twice_violates_constraints_and_rolls_back() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("chinook.db");
    run_bootstrap(&file_config(&db_path)).unwrap();

    let store = SqliteStore::open(&file_config(&db_path)).unwrap();
    store.init_schema().unwrap();
    let samples = SampleSet::load(&bundled_samples_dir()).unwrap();

    let before = store.counts().unwrap();
    let result = store.load_samples(&samples);
    assert!(matches!(
        result,
        Err(BootstrapError::ConstraintViolation { .. })
    ));

    // The failed second load must leave the store exactly as it was.
    assert_eq!(store.counts().unwrap(), before);
}

#[test]
fn test_loaded_foreign_keys_resolve() {
    let store = SqliteStore::open(&in_memory_config()).unwrap();
    store.init_schema().unwrap();
    let samples = SampleSet::load(&bundled_samples_dir()).unwrap();
    store.load_samples(&samples).unwrap();
    let conn = store.connection();

    let dangling_genres: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM tracks t LEFT JOIN genres g ON g.genre_id = t.genre_id
             WHERE g.genre_id IS NULL",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(dangling_genres, 0);

    let dangling_media_types: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM tracks t
             LEFT JOIN media_types m ON m.media_type_id = t.media_type_id
             WHERE m.media_type_id IS NULL",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(dangling_media_types, 0);

    let dangling_managers: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM employees e
             LEFT JOIN employees m ON m.employee_id = e.reports_to
             WHERE e.reports_to IS NOT NULL AND m.employee_id IS NULL",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(dangling_managers, 0);
}

#[test]
fn test_track_album_id_may_dangle() {
    let store = SqliteStore::open(&in_memory_config()).unwrap();
    store.init_schema().unwrap();
    let samples = SampleSet::load(&bundled_samples_dir()).unwrap();
    store.load_samples(&samples).unwrap();

    // The reference data deliberately carries one track whose album_id
    // resolves to no album row; the load must accept it.
    let dangling_albums: i64 = store
        .connection()
        .query_row(
            "SELECT COUNT(*) FROM tracks t LEFT JOIN albums a ON a.album_id = t.album_id
             WHERE a.album_id IS NULL",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(dangling_albums, 1);
}

#[test]
fn test_empty_genres_file_rolls_back_the_whole_load() {
    let scratch = TempDir::new().unwrap();
    copy_samples_to(scratch.path());
    truncate_to_header(scratch.path(), "genres.csv");

    let store = SqliteStore::open(&in_memory_config()).unwrap();
    store.init_schema().unwrap();
    let samples = SampleSet::load(scratch.path()).unwrap();

    let result = store.load_samples(&samples);
    match result {
        Err(BootstrapError::ConstraintViolation { entity, .. }) => assert_eq!(entity, "tracks"),
        other => panic!("expected ConstraintViolation, got {:?}", other),
    }

    // One transaction: nothing may have survived, not even the root
    // entities inserted before tracks failed.
    assert_eq!(store.state().unwrap(), BootstrapState::SchemaCreated);
    for (table, count) in store.counts().unwrap() {
        assert_eq!(count, 0, "table {} not rolled back", table);
    }
}

#[test]
fn test_invoice_chain_is_consistent() {
    let store = SqliteStore::open(&in_memory_config()).unwrap();
    store.init_schema().unwrap();
    let samples = SampleSet::load(&bundled_samples_dir()).unwrap();
    store.load_samples(&samples).unwrap();

    // Line totals must add up to the invoice totals in the reference data.
    let mismatched: i64 = store
        .connection()
        .query_row(
            "SELECT COUNT(*) FROM invoices i WHERE ABS(i.total - (
                 SELECT SUM(ii.unit_price * ii.quantity)
                 FROM invoice_items ii WHERE ii.invoice_id = i.invoice_id
             )) > 0.001",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(mismatched, 0);
}
