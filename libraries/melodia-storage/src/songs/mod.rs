//! Song catalog queries
//!
//! Leaf slice: songs know nothing about playlists. Memberships that reference
//! a deleted song are removed by the `ON DELETE CASCADE` foreign key.

use crate::timestamps::{from_micros, now_micros};
use melodia_core::{
    error::Result,
    types::{CreateSong, Song, SongId, UpdateSong},
    MelodiaError,
};
use sqlx::{sqlite::SqliteRow, Row, SqliteExecutor, SqlitePool};

fn row_to_song(row: &SqliteRow) -> Result<Song> {
    Ok(Song {
        id: row.get("id"),
        title: row.get("title"),
        artist: row.get("artist"),
        created_at: from_micros(row.get("created_at"))?,
        updated_at: from_micros(row.get("updated_at"))?,
    })
}

/// Get all songs, most recently created first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        r#"
        SELECT id, title, artist, created_at, updated_at
        FROM songs
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_song).collect()
}

/// Get song by ID
pub async fn get_by_id(pool: &SqlitePool, id: SongId) -> Result<Option<Song>> {
    let row = sqlx::query(
        "SELECT id, title, artist, created_at, updated_at FROM songs WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(row_to_song).transpose()
}

/// Check whether a song exists
pub async fn exists<'e, E>(executor: E, id: SongId) -> Result<bool>
where
    E: SqliteExecutor<'e>,
{
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM songs WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(found.is_some())
}

/// Create new song
pub async fn create(pool: &SqlitePool, song: CreateSong) -> Result<Song> {
    song.validate()?;

    let now = now_micros();
    let result = sqlx::query(
        r#"
        INSERT INTO songs (title, artist, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&song.title)
    .bind(&song.artist)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    let timestamp = from_micros(now)?;
    Ok(Song {
        id: SongId::new(result.last_insert_rowid()),
        title: song.title,
        artist: song.artist,
        created_at: timestamp,
        updated_at: timestamp,
    })
}

/// Replace a song's title and artist
pub async fn update(pool: &SqlitePool, id: SongId, song: UpdateSong) -> Result<Song> {
    song.validate()?;

    let result = sqlx::query("UPDATE songs SET title = ?, artist = ?, updated_at = ? WHERE id = ?")
        .bind(&song.title)
        .bind(&song.artist)
        .bind(now_micros())
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(MelodiaError::song_not_found(id));
    }

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| MelodiaError::song_not_found(id))
}

/// Delete song
pub async fn delete(pool: &SqlitePool, id: SongId) -> Result<()> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(MelodiaError::song_not_found(id));
    }

    Ok(())
}
