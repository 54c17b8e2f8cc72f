//! Shared helpers for bootstrap integration tests.

use std::fs;
use std::path::{Path, PathBuf};

pub const SAMPLE_FILES: [&str; 11] = [
    "artists.csv",
    "albums.csv",
    "genres.csv",
    "media_types.csv",
    "tracks.csv",
    "playlists.csv",
    "playlist_track.csv",
    "employees.csv",
    "customers.csv",
    "invoices.csv",
    "invoice_items.csv",
];

/// The reference CSV files shipped with the crate.
pub fn bundled_samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
}

/// Copy the bundled samples into a scratch directory so a test can mangle
/// individual files without touching the originals.
pub fn copy_samples_to(dir: &Path) {
    let source = bundled_samples_dir();
    for file in SAMPLE_FILES {
        fs::copy(source.join(file), dir.join(file)).unwrap();
    }
}

/// Replace a CSV with its header row only, i.e. an entity with zero rows.
pub fn truncate_to_header(dir: &Path, file: &str) {
    let path = dir.join(file);
    let content = fs::read_to_string(&path).unwrap();
    let header = content.lines().next().unwrap();
    fs::write(&path, format!("{}\n", header)).unwrap();
}
