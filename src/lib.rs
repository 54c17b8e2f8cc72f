//! Chinook Sample Database Bootstrap
//!
//! This library creates the schema of the Chinook music-store database and
//! populates it from bundled reference CSV files: eleven tables covering the
//! album/track catalog, playlists and the employee/customer/invoice chain.
//! The modules are public so integration tests (and embedders) can drive the
//! individual steps.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod loader;
pub mod sample_data;
pub mod sqlite_persistence;
pub mod store;

// Re-export commonly used types for convenience
pub use bootstrap::{run_bootstrap, BootstrapSummary};
pub use config::{AppConfig, CliConfig, ConnectionTarget, FileConfig, StoreConfig};
pub use error::BootstrapError;
pub use sample_data::SampleSet;
pub use store::{BootstrapState, SqliteStore, CHINOOK_VERSIONED_SCHEMAS};
