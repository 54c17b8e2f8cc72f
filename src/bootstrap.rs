//! The one-time bootstrap sequence: create the schema, then load the sample
//! data in a single transaction.

use crate::config::AppConfig;
use crate::error::BootstrapError;
use crate::sample_data::SampleSet;
use crate::store::{BootstrapState, SqliteStore};
use tracing::info;

/// Per-entity row counts after a bootstrap run, in schema order.
#[derive(Debug)]
pub struct BootstrapSummary {
    pub counts: Vec<(&'static str, i64)>,
}

impl BootstrapSummary {
    pub fn count_of(&self, table: &str) -> i64 {
        self.counts
            .iter()
            .find(|(name, _)| *name == table)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

/// Run the full bootstrap against the configured target.
///
/// Reads all sample files first, so a broken reference file never leaves a
/// half-created database behind. A store that already holds data is left
/// untouched. The connection is released when the store goes out of scope,
/// whether the run succeeded or not.
pub fn run_bootstrap(config: &AppConfig) -> Result<BootstrapSummary, BootstrapError> {
    info!("Reading sample data from {:?}", config.samples_dir);
    let samples = SampleSet::load(&config.samples_dir)?;

    info!("Opening {}", config.target.describe());
    let store = SqliteStore::open(config)?;
    store.init_schema()?;

    match store.state()? {
        BootstrapState::DataLoaded => {
            info!("Store already populated, skipping sample load");
        }
        _ => {
            info!("Loading sample data...");
            store.load_samples(&samples)?;
        }
    }

    Ok(BootstrapSummary {
        counts: store.counts()?,
    })
}
