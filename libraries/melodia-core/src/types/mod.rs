mod ids;
mod playlist;
mod song;

pub use ids::{PlaylistId, SongId};
pub use playlist::{
    CreatePlaylist, Playlist, PlaylistSong, PlaylistStatus, PublishedFilter,
    DESCRIPTION_MAX_LEN, DESCRIPTION_MIN_LEN,
};
pub use song::{CreateSong, Song, UpdateSong};
