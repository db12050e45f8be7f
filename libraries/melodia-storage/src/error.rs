/// Storage-specific errors
use thiserror::Error;

/// Storage error types
///
/// Covers setup failures (connection, migrations). Query slices return
/// `melodia_core::Result` directly.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for melodia_core::MelodiaError {
    fn from(err: StorageError) -> Self {
        melodia_core::MelodiaError::storage(err.to_string())
    }
}
