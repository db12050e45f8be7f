/// OpenAPI document and Swagger UI
use crate::{api, error::Problem, state::AppState};
use axum::Router;
use melodia_core::types::{Playlist, PlaylistId, PlaylistSong, Song, SongId};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Path of the generated OpenAPI JSON document
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Melodia API",
        description = "Song catalog and playlists with a draft/publish lifecycle"
    ),
    paths(
        api::health::health,
        api::songs::create_song,
        api::songs::list_songs,
        api::songs::get_song,
        api::songs::update_song,
        api::songs::delete_song,
        api::playlists::create_playlist,
        api::playlists::list_playlists,
        api::playlists::get_playlist,
        api::playlists::delete_playlist,
        api::playlists::publish_playlist,
        api::playlists::add_song_to_playlist,
    ),
    components(schemas(
        Song,
        SongId,
        Playlist,
        PlaylistId,
        PlaylistSong,
        Problem,
        api::health::HealthResponse,
        api::songs::SongRequest,
        api::playlists::CreatePlaylistRequest,
        api::playlists::AddSongRequest,
        api::SongData,
        api::SongListData,
        api::PlaylistData,
        api::PlaylistListData,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "songs", description = "Song catalog"),
        (name = "playlists", description = "Playlists and their songs")
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/swagger` backed by the generated document
pub fn swagger_routes() -> Router<AppState> {
    Router::new().merge(SwaggerUi::new("/swagger").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}
