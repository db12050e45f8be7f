//! Melodia Storage
//!
//! `SQLite` database layer for the Melodia catalog.
//!
//! This crate provides persistent storage for songs and playlists and
//! enforces the playlist rules: draft-by-default, idempotent publishing and
//! insert-or-ignore song membership.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: `songs` and `playlists` own their own queries
//! - **Injected Pool**: the pool is created once and handed to
//!   [`LocalStorageContext`]; there is no global connection
//! - **Database-Enforced Integrity**: cascading foreign keys and a unique
//!   `(playlist_id, song_id)` constraint back every write
//!
//! # Example
//!
//! ```rust,no_run
//! use melodia_storage::{LocalStorageContext, create_pool, run_migrations};
//! use melodia_core::{storage::CatalogStorage, types::PublishedFilter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create database connection
//! let pool = create_pool("sqlite://melodia.db", 5).await?;
//! run_migrations(&pool).await?;
//!
//! let storage = LocalStorageContext::new(pool);
//!
//! // Get published playlists
//! let playlists = storage.list_playlists(PublishedFilter::Published).await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod timestamps;

// Vertical slices
pub mod playlists;
pub mod songs;

pub use context::LocalStorageContext;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://melodia.db>`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the URL is invalid or the connection fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .foreign_keys(true) // Memberships cascade with songs and playlists
        .journal_mode(SqliteJournalMode::Wal) // Readers don't block the writer
        .busy_timeout(std::time::Duration::from_secs(30)); // Wait up to 30s for locks

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}
