//! Melodia Core
//!
//! Platform-agnostic domain types, storage trait, and error handling for the
//! Melodia catalog service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `Playlist`, `PlaylistSong`, typed ids
//! - **Storage Trait**: `CatalogStorage`, implemented by `melodia-storage`
//! - **Error Handling**: Unified `MelodiaError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use melodia_core::types::{CreatePlaylist, PublishedFilter};
//!
//! let playlist = CreatePlaylist::new(
//!     "Road Trip",
//!     "Songs for long drives along the coast, windows all the way down.",
//! );
//! assert!(playlist.validate().is_ok());
//!
//! let filter: PublishedFilter = "false".parse().unwrap();
//! assert_eq!(filter, PublishedFilter::All);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{EntityKind, MelodiaError, Result};
pub use storage::CatalogStorage;

pub use types::{
    CreatePlaylist, CreateSong, Playlist, PlaylistId, PlaylistSong, PlaylistStatus,
    PublishedFilter, Song, SongId, UpdateSong,
};
