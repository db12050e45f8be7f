/// Songs API routes
use super::DataResponse;
use crate::{
    error::Result,
    extract::{ApiJson, PathId},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use melodia_core::types::{CreateSong, Song, SongId, UpdateSong};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SongRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
}

/// POST /songs
/// Add a song to the catalog
#[utoipa::path(
    post,
    path = "/songs",
    tag = "songs",
    request_body = SongRequest,
    responses(
        (status = 201, description = "Song created", body = super::SongData),
        (status = 400, description = "Missing title or artist", body = crate::error::Problem, content_type = "application/problem+json")
    )
)]
pub async fn create_song(
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<SongRequest>,
) -> Result<(StatusCode, Json<DataResponse<Song>>)> {
    let song = app_state
        .storage
        .create_song(CreateSong::new(req.title, req.artist))
        .await?;

    tracing::debug!(song_id = %song.id, "Created song");
    Ok((StatusCode::CREATED, Json(DataResponse::new(song))))
}

/// GET /songs
/// List the catalog, most recently created first
#[utoipa::path(
    get,
    path = "/songs",
    tag = "songs",
    responses(
        (status = 200, description = "All songs, newest first", body = super::SongListData)
    )
)]
pub async fn list_songs(State(app_state): State<AppState>) -> Result<Json<DataResponse<Vec<Song>>>> {
    let songs = app_state.storage.list_songs().await?;
    Ok(Json(DataResponse::new(songs)))
}

/// GET /songs/:id
#[utoipa::path(
    get,
    path = "/songs/{id}",
    tag = "songs",
    params(("id" = i64, Path, description = "Song ID")),
    responses(
        (status = 200, description = "The song", body = super::SongData),
        (status = 400, description = "Invalid song ID", body = crate::error::Problem, content_type = "application/problem+json"),
        (status = 404, description = "Song not found", body = crate::error::Problem, content_type = "application/problem+json")
    )
)]
pub async fn get_song(
    PathId(id): PathId<SongId>,
    State(app_state): State<AppState>,
) -> Result<Json<DataResponse<Song>>> {
    let song = app_state.storage.get_song(id).await?;
    Ok(Json(DataResponse::new(song)))
}

/// PUT /songs/:id
/// Replace title and artist
#[utoipa::path(
    put,
    path = "/songs/{id}",
    tag = "songs",
    params(("id" = i64, Path, description = "Song ID")),
    request_body = SongRequest,
    responses(
        (status = 200, description = "Updated song", body = super::SongData),
        (status = 400, description = "Invalid ID or body", body = crate::error::Problem, content_type = "application/problem+json"),
        (status = 404, description = "Song not found", body = crate::error::Problem, content_type = "application/problem+json")
    )
)]
pub async fn update_song(
    PathId(id): PathId<SongId>,
    State(app_state): State<AppState>,
    ApiJson(req): ApiJson<SongRequest>,
) -> Result<Json<DataResponse<Song>>> {
    let song = app_state
        .storage
        .update_song(id, UpdateSong::new(req.title, req.artist))
        .await?;
    Ok(Json(DataResponse::new(song)))
}

/// DELETE /songs/:id
/// Remove a song and its playlist memberships
#[utoipa::path(
    delete,
    path = "/songs/{id}",
    tag = "songs",
    params(("id" = i64, Path, description = "Song ID")),
    responses(
        (status = 204, description = "Song deleted"),
        (status = 404, description = "Song not found", body = crate::error::Problem, content_type = "application/problem+json")
    )
)]
pub async fn delete_song(
    PathId(id): PathId<SongId>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    app_state.storage.delete_song(id).await?;

    tracing::debug!(song_id = %id, "Deleted song");
    Ok(StatusCode::NO_CONTENT)
}
