/// API route modules
use melodia_core::types::{Playlist, Song};
use serde::Serialize;
use utoipa::ToSchema;

pub mod health;
pub mod playlists;
pub mod songs;

/// Success envelope: `{"data": ...}`
#[derive(Debug, Serialize, ToSchema)]
#[aliases(
    SongData = DataResponse<Song>,
    SongListData = DataResponse<Vec<Song>>,
    PlaylistData = DataResponse<Playlist>,
    PlaylistListData = DataResponse<Vec<Playlist>>
)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
