use anyhow::{Context, Result};
use chinook_store::{run_bootstrap, AppConfig, CliConfig, FileConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(name = "chinook-store")]
#[command(about = "Create and populate the Chinook sample music-store database")]
struct CliArgs {
    /// Path to the SQLite database file (default: db/chinook.db).
    #[arg(long, value_parser = parse_path)]
    db_path: Option<PathBuf>,

    /// Use a transient in-memory database instead of a file.
    #[arg(long, default_value_t = false)]
    in_memory: bool,

    /// Explicit SQLite URI, e.g. "file:chinook?mode=memory&cache=shared".
    #[arg(long)]
    connection_string: Option<String>,

    /// Directory containing the reference CSV files.
    #[arg(long, value_parser = parse_path)]
    samples_dir: Option<PathBuf>,

    /// Path to a TOML config file; values there override CLI flags.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = CliArgs::parse();

    let file_config = args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;

    let cli = CliConfig {
        db_path: args.db_path,
        in_memory: args.in_memory,
        connection_string: args.connection_string,
        samples_dir: args.samples_dir,
    };
    let config = AppConfig::resolve(&cli, file_config)?;

    let summary = run_bootstrap(&config)?;

    info!("Database contains:");
    for (table, count) in &summary.counts {
        info!("{:>6} {}", count, table);
    }
    Ok(())
}
