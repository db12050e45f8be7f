/// Playlists API routes
use super::DataResponse;
use crate::{
    error::Result,
    extract::{ApiJson, ApiQuery, PathId},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use melodia_core::types::{CreatePlaylist, Playlist, PlaylistId, PublishedFilter, SongId};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePlaylistRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddSongRequest {
    /// Also accepted as `songId`
    #[serde(alias = "songId")]
    #[schema(example = 1)]
    pub song_id: i64,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPlaylistsQuery {
    /// `true` (default) for published playlists only, `false` for all
    #[param(example = "false")]
    pub published: Option<String>,
}

impl ListPlaylistsQuery {
    /// Absent or empty means published only
    fn filter(&self) -> Result<PublishedFilter> {
        match self.published.as_deref().map(str::trim) {
            None | Some("") => Ok(PublishedFilter::default()),
            Some(raw) => Ok(raw.parse()?),
        }
    }
}

/// POST /playlists
/// Create a new draft playlist
#[utoipa::path(
    post,
    path = "/playlists",
    tag = "playlists",
    request_body = CreatePlaylistRequest,
    responses(
        (status = 201, description = "Draft playlist created", body = super::PlaylistData),
        (status = 400, description = "Description out of bounds", body = crate::error::Problem, content_type = "application/problem+json")
    )
)]
pub async fn create_playlist(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<CreatePlaylistRequest>,
) -> Result<(StatusCode, Json<DataResponse<Playlist>>)> {
    let playlist = app_state
        .storage
        .create_playlist(CreatePlaylist::new(req.name, req.description))
        .await?;

    tracing::debug!(playlist_id = %playlist.id, "Created playlist");
    Ok((StatusCode::CREATED, Json(DataResponse::new(playlist))))
}

/// GET /playlists?published=
/// List playlists; published only unless `published=false`
#[utoipa::path(
    get,
    path = "/playlists",
    tag = "playlists",
    params(ListPlaylistsQuery),
    responses(
        (status = 200, description = "Playlists, newest first", body = super::PlaylistListData),
        (status = 400, description = "Unrecognized filter value", body = crate::error::Problem, content_type = "application/problem+json")
    )
)]
pub async fn list_playlists(
    State(app_state): State<AppState>,
    ApiQuery(query): ApiQuery<ListPlaylistsQuery>,
) -> Result<Json<DataResponse<Vec<Playlist>>>> {
    let playlists = app_state.storage.list_playlists(query.filter()?).await?;
    Ok(Json(DataResponse::new(playlists)))
}

/// GET /playlists/:id
/// Get playlist details with songs
#[utoipa::path(
    get,
    path = "/playlists/{id}",
    tag = "playlists",
    params(("id" = i64, Path, description = "Playlist ID")),
    responses(
        (status = 200, description = "The playlist with its songs", body = super::PlaylistData),
        (status = 400, description = "Invalid playlist ID", body = crate::error::Problem, content_type = "application/problem+json"),
        (status = 404, description = "Playlist not found", body = crate::error::Problem, content_type = "application/problem+json")
    )
)]
pub async fn get_playlist(
    PathId(id): PathId<PlaylistId>,
    State(app_state): State<AppState>,
) -> Result<Json<DataResponse<Playlist>>> {
    let playlist = app_state.storage.get_playlist(id).await?;
    Ok(Json(DataResponse::new(playlist)))
}

/// DELETE /playlists/:id
#[utoipa::path(
    delete,
    path = "/playlists/{id}",
    tag = "playlists",
    params(("id" = i64, Path, description = "Playlist ID")),
    responses(
        (status = 204, description = "Playlist deleted"),
        (status = 404, description = "Playlist not found", body = crate::error::Problem, content_type = "application/problem+json")
    )
)]
pub async fn delete_playlist(
    PathId(id): PathId<PlaylistId>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    app_state.storage.delete_playlist(id).await?;

    tracing::debug!(playlist_id = %id, "Deleted playlist");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /playlists/:id/publish
/// Publish a draft; already published playlists are returned unchanged
#[utoipa::path(
    post,
    path = "/playlists/{id}/publish",
    tag = "playlists",
    params(("id" = i64, Path, description = "Playlist ID")),
    responses(
        (status = 200, description = "Published playlist", body = super::PlaylistData),
        (status = 404, description = "Playlist not found", body = crate::error::Problem, content_type = "application/problem+json")
    )
)]
pub async fn publish_playlist(
    PathId(id): PathId<PlaylistId>,
    State(app_state): State<AppState>,
) -> Result<Json<DataResponse<Playlist>>> {
    let playlist = app_state.storage.publish_playlist(id).await?;
    Ok(Json(DataResponse::new(playlist)))
}

/// POST /playlists/:id/songs
/// Add a song; adding a song twice keeps a single membership
#[utoipa::path(
    post,
    path = "/playlists/{id}/songs",
    tag = "playlists",
    params(("id" = i64, Path, description = "Playlist ID")),
    request_body = AddSongRequest,
    responses(
        (status = 200, description = "Playlist with the song added", body = super::PlaylistData),
        (status = 400, description = "Invalid playlist or song ID", body = crate::error::Problem, content_type = "application/problem+json"),
        (status = 404, description = "Song or playlist not found", body = crate::error::Problem, content_type = "application/problem+json")
    )
)]
pub async fn add_song_to_playlist(
    PathId(id): PathId<PlaylistId>,
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<AddSongRequest>,
) -> Result<Json<DataResponse<Playlist>>> {
    let song_id = SongId::try_from(req.song_id)?;
    let playlist = app_state
        .storage
        .add_song_to_playlist(id, song_id)
        .await?;
    Ok(Json(DataResponse::new(playlist)))
}
