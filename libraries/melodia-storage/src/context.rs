use crate::{playlists, songs};
use async_trait::async_trait;
use melodia_core::{error::Result, storage::CatalogStorage, types::*, MelodiaError};
use sqlx::SqlitePool;

/// Local storage context using `SQLite`
///
/// Holds the injected pool; cloning shares the same pool.
#[derive(Clone)]
pub struct LocalStorageContext {
    pool: SqlitePool,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStorage for LocalStorageContext {
    // Songs
    async fn create_song(&self, song: CreateSong) -> Result<Song> {
        songs::create(&self.pool, song).await
    }

    async fn get_song(&self, id: SongId) -> Result<Song> {
        songs::get_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| MelodiaError::song_not_found(id))
    }

    async fn list_songs(&self) -> Result<Vec<Song>> {
        songs::get_all(&self.pool).await
    }

    async fn update_song(&self, id: SongId, song: UpdateSong) -> Result<Song> {
        songs::update(&self.pool, id, song).await
    }

    async fn delete_song(&self, id: SongId) -> Result<()> {
        songs::delete(&self.pool, id).await
    }

    // Playlists
    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist> {
        playlists::create(&self.pool, playlist).await
    }

    async fn list_playlists(&self, filter: PublishedFilter) -> Result<Vec<Playlist>> {
        playlists::get_all(&self.pool, filter).await
    }

    async fn get_playlist(&self, id: PlaylistId) -> Result<Playlist> {
        playlists::get_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| MelodiaError::playlist_not_found(id))
    }

    async fn delete_playlist(&self, id: PlaylistId) -> Result<()> {
        playlists::delete(&self.pool, id).await
    }

    async fn publish_playlist(&self, id: PlaylistId) -> Result<Playlist> {
        playlists::publish(&self.pool, id).await
    }

    async fn add_song_to_playlist(
        &self,
        playlist_id: PlaylistId,
        song_id: SongId,
    ) -> Result<Playlist> {
        playlists::add_song(&self.pool, playlist_id, song_id).await
    }
}
