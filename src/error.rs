use thiserror::Error;

/// Errors that can occur while bootstrapping the database.
///
/// Every bootstrap error is fatal: the caller is expected to fix the cause
/// and restart the sequence from scratch rather than retry a single step.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("failed to load sample data for {entity}: {message}")]
    DataSource {
        entity: &'static str,
        message: String,
    },

    #[error("constraint violation while loading {entity} (row {row}): {message}")]
    ConstraintViolation {
        entity: &'static str,
        row: String,
        message: String,
    },

    #[error("schema error: {0}")]
    Schema(String),
}

impl BootstrapError {
    /// Classify a rusqlite error raised while inserting a row.
    ///
    /// SQLITE_CONSTRAINT failures (duplicate key, missing FK target, NOT NULL)
    /// become `ConstraintViolation` carrying the entity and row identifier;
    /// anything else is a `Schema` error.
    pub fn from_sqlite(entity: &'static str, row: String, err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                BootstrapError::ConstraintViolation {
                    entity,
                    row,
                    message: err.to_string(),
                }
            }
            _ => BootstrapError::Schema(format!("{} (row {}): {}", entity, row, err)),
        }
    }
}
