//! Melodia Server Library
//!
//! HTTP front end for the Melodia song catalog and playlists.
//!
//! This library exposes the router and its components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod openapi;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Problem, Result, ServerError};
pub use state::AppState;

use axum::{
    http::Uri,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
pub fn create_router(app_state: AppState) -> Router {
    let song_routes = Router::new()
        .route("/songs", get(api::songs::list_songs).post(api::songs::create_song))
        .route(
            "/songs/:id",
            get(api::songs::get_song)
                .put(api::songs::update_song)
                .delete(api::songs::delete_song),
        );

    let playlist_routes = Router::new()
        .route(
            "/playlists",
            get(api::playlists::list_playlists).post(api::playlists::create_playlist),
        )
        .route(
            "/playlists/:id",
            get(api::playlists::get_playlist).delete(api::playlists::delete_playlist),
        )
        .route(
            "/playlists/:id/publish",
            post(api::playlists::publish_playlist),
        )
        .route(
            "/playlists/:id/songs",
            post(api::playlists::add_song_to_playlist),
        );

    Router::new()
        .route("/health", get(api::health::health))
        .merge(song_routes)
        .merge(playlist_routes)
        .merge(openapi::swagger_routes())
        .fallback(route_not_found)
        .layer(axum_middleware::from_fn(middleware::problem_instance))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn route_not_found(uri: Uri) -> ServerError {
    ServerError::RouteNotFound(uri.path().to_string())
}
