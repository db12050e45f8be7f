//! Playlist aggregate queries
//!
//! Enforces the publish lifecycle and the membership rules:
//! - playlists start as drafts and publishing never reverts
//! - a song appears at most once per playlist (insert-or-ignore)
//! - memberships are only created for existing songs and playlists

use crate::songs;
use crate::timestamps::{from_micros, now_micros};
use melodia_core::{
    error::Result,
    types::{CreatePlaylist, Playlist, PlaylistId, PlaylistSong, PublishedFilter, SongId},
    MelodiaError,
};
use sqlx::{sqlite::SqliteRow, Row, SqliteConnection, SqliteExecutor, SqlitePool};
use std::collections::HashMap;

fn row_to_playlist(row: &SqliteRow) -> Result<Playlist> {
    Ok(Playlist {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        is_published: row.get::<i64, _>("is_published") != 0,
        published_at: row
            .get::<Option<i64>, _>("published_at")
            .map(from_micros)
            .transpose()?,
        songs: Vec::new(),
        created_at: from_micros(row.get("created_at"))?,
        updated_at: from_micros(row.get("updated_at"))?,
    })
}

fn row_to_playlist_song(row: &SqliteRow) -> Result<PlaylistSong> {
    Ok(PlaylistSong {
        id: row.get("song_id"),
        title: row.get("title"),
        artist: row.get("artist"),
        added_at: from_micros(row.get("added_at"))?,
    })
}

/// Load one playlist with its songs, newest membership first
async fn fetch_aggregate(conn: &mut SqliteConnection, id: PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        r#"
        SELECT id, name, description, is_published, published_at, created_at, updated_at
        FROM playlists
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };
    let mut playlist = row_to_playlist(&row)?;

    let song_rows = sqlx::query(
        r#"
        SELECT ps.song_id, s.title, s.artist, ps.added_at
        FROM playlist_songs ps
        INNER JOIN songs s ON ps.song_id = s.id
        WHERE ps.playlist_id = ?
        ORDER BY ps.added_at DESC, ps.id DESC
        "#,
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await?;

    playlist.songs = song_rows
        .iter()
        .map(row_to_playlist_song)
        .collect::<Result<_>>()?;

    Ok(Some(playlist))
}

/// Check whether a playlist exists
pub async fn exists<'e, E>(executor: E, id: PlaylistId) -> Result<bool>
where
    E: SqliteExecutor<'e>,
{
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM playlists WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(found.is_some())
}

/// Get playlist by ID with all songs
pub async fn get_by_id(pool: &SqlitePool, id: PlaylistId) -> Result<Option<Playlist>> {
    // Read both queries from one snapshot
    let mut tx = pool.begin().await?;
    let playlist = fetch_aggregate(&mut *tx, id).await?;
    tx.commit().await?;

    Ok(playlist)
}

/// List playlists with their songs
///
/// `Published` returns published playlists by publish time, newest first.
/// `All` returns every playlist by creation time, newest first.
pub async fn get_all(pool: &SqlitePool, filter: PublishedFilter) -> Result<Vec<Playlist>> {
    let (playlist_query, published_only) = match filter {
        PublishedFilter::Published => (
            r#"
            SELECT id, name, description, is_published, published_at, created_at, updated_at
            FROM playlists
            WHERE is_published = 1
            ORDER BY published_at DESC, id DESC
            "#,
            true,
        ),
        PublishedFilter::All => (
            r#"
            SELECT id, name, description, is_published, published_at, created_at, updated_at
            FROM playlists
            ORDER BY created_at DESC, id DESC
            "#,
            false,
        ),
    };

    let mut tx = pool.begin().await?;

    let rows = sqlx::query(playlist_query).fetch_all(&mut *tx).await?;
    let mut playlists = rows
        .iter()
        .map(row_to_playlist)
        .collect::<Result<Vec<_>>>()?;

    // One pass over the memberships instead of a query per playlist
    let song_rows = sqlx::query(
        r#"
        SELECT ps.playlist_id, ps.song_id, s.title, s.artist, ps.added_at
        FROM playlist_songs ps
        INNER JOIN songs s ON ps.song_id = s.id
        INNER JOIN playlists p ON ps.playlist_id = p.id
        WHERE (? = 0 OR p.is_published = 1)
        ORDER BY ps.added_at DESC, ps.id DESC
        "#,
    )
    .bind(published_only)
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;

    let mut by_playlist: HashMap<PlaylistId, Vec<PlaylistSong>> = HashMap::new();
    for row in &song_rows {
        by_playlist
            .entry(row.get("playlist_id"))
            .or_default()
            .push(row_to_playlist_song(row)?);
    }

    for playlist in &mut playlists {
        playlist.songs = by_playlist.remove(&playlist.id).unwrap_or_default();
    }

    Ok(playlists)
}

/// Create new draft playlist
pub async fn create(pool: &SqlitePool, playlist: CreatePlaylist) -> Result<Playlist> {
    playlist.validate()?;

    let now = now_micros();
    let result = sqlx::query(
        r#"
        INSERT INTO playlists (name, description, is_published, published_at, created_at, updated_at)
        VALUES (?, ?, 0, NULL, ?, ?)
        "#,
    )
    .bind(&playlist.name)
    .bind(&playlist.description)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    let timestamp = from_micros(now)?;
    Ok(Playlist {
        id: PlaylistId::new(result.last_insert_rowid()),
        name: playlist.name,
        description: playlist.description,
        is_published: false,
        published_at: None,
        songs: Vec::new(),
        created_at: timestamp,
        updated_at: timestamp,
    })
}

/// Delete playlist (memberships cascade)
pub async fn delete(pool: &SqlitePool, id: PlaylistId) -> Result<()> {
    let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(MelodiaError::playlist_not_found(id));
    }

    Ok(())
}

/// Publish playlist
///
/// Only a draft row matches the update, so concurrent callers race on a
/// single statement and exactly one `published_at` wins. Publishing an
/// already published playlist leaves it untouched.
pub async fn publish(pool: &SqlitePool, id: PlaylistId) -> Result<Playlist> {
    let now = now_micros();

    sqlx::query(
        r#"
        UPDATE playlists
        SET is_published = 1, published_at = ?, updated_at = ?
        WHERE id = ? AND is_published = 0
        "#,
    )
    .bind(now)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| MelodiaError::playlist_not_found(id))
}

/// Add song to playlist
///
/// Adding a song that is already a member succeeds without changes; the
/// original `added_at` is kept. A missing song is reported before a missing
/// playlist.
pub async fn add_song(
    pool: &SqlitePool,
    playlist_id: PlaylistId,
    song_id: SongId,
) -> Result<Playlist> {
    let mut tx = pool.begin().await?;
    let now = now_micros();

    // Write first so the transaction holds the write lock before it reads
    let inserted = sqlx::query(
        r#"
        INSERT INTO playlist_songs (playlist_id, song_id, added_at)
        SELECT p.id, s.id, ?
        FROM playlists p, songs s
        WHERE p.id = ? AND s.id = ?
        ON CONFLICT(playlist_id, song_id) DO NOTHING
        "#,
    )
    .bind(now)
    .bind(playlist_id)
    .bind(song_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if inserted == 0 {
        if !songs::exists(&mut *tx, song_id).await? {
            return Err(MelodiaError::song_not_found(song_id));
        }
        if !exists(&mut *tx, playlist_id).await? {
            return Err(MelodiaError::playlist_not_found(playlist_id));
        }
    } else {
        touch(&mut *tx, playlist_id, now).await?;
    }

    let playlist = fetch_aggregate(&mut *tx, playlist_id)
        .await?
        .ok_or_else(|| MelodiaError::playlist_not_found(playlist_id))?;

    tx.commit().await?;

    Ok(playlist)
}

// Helper functions

async fn touch<'e, E>(executor: E, id: PlaylistId, now: i64) -> Result<()>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query("UPDATE playlists SET updated_at = ? WHERE id = ?")
        .bind(now)
        .bind(id)
        .execute(executor)
        .await?;

    Ok(())
}
