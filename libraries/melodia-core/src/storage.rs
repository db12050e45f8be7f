//! Storage trait for the catalog

use crate::error::Result;
use crate::types::{
    CreatePlaylist, CreateSong, Playlist, PlaylistId, PublishedFilter, Song, SongId, UpdateSong,
};
use async_trait::async_trait;

/// Storage context providing the catalog and playlist operations
///
/// Implementations own all invariant enforcement: validation, existence
/// checks, the publish lifecycle and membership uniqueness. Every
/// multi-step write must be atomic.
#[async_trait]
pub trait CatalogStorage: Send + Sync {
    // ========================================================================
    // Songs
    // ========================================================================

    /// Create a new song
    async fn create_song(&self, song: CreateSong) -> Result<Song>;

    /// Get song by ID
    async fn get_song(&self, id: SongId) -> Result<Song>;

    /// Get all songs, most recently created first
    async fn list_songs(&self) -> Result<Vec<Song>>;

    /// Replace a song's title and artist
    async fn update_song(&self, id: SongId, song: UpdateSong) -> Result<Song>;

    /// Delete a song and its playlist memberships
    async fn delete_song(&self, id: SongId) -> Result<()>;

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Create a new draft playlist
    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist>;

    /// List playlists matching the filter
    async fn list_playlists(&self, filter: PublishedFilter) -> Result<Vec<Playlist>>;

    /// Get playlist by ID with its songs
    async fn get_playlist(&self, id: PlaylistId) -> Result<Playlist>;

    /// Delete playlist and its memberships
    async fn delete_playlist(&self, id: PlaylistId) -> Result<()>;

    /// Publish a playlist (idempotent)
    async fn publish_playlist(&self, id: PlaylistId) -> Result<Playlist>;

    /// Add a song to a playlist (duplicate adds are no-ops)
    async fn add_song_to_playlist(
        &self,
        playlist_id: PlaylistId,
        song_id: SongId,
    ) -> Result<Playlist>;
}
