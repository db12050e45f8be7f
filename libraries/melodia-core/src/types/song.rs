//! Song types

use super::ids::SongId;
use crate::error::{MelodiaError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A song in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new song
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSong {
    pub title: String,
    pub artist: String,
}

/// Data for replacing a song's fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSong {
    pub title: String,
    pub artist: String,
}

fn validate_title_artist(title: &str, artist: &str) -> Result<()> {
    if title.trim().is_empty() || artist.trim().is_empty() {
        return Err(MelodiaError::validation("Title and artist are required"));
    }
    Ok(())
}

impl CreateSong {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Check required fields
    pub fn validate(&self) -> Result<()> {
        validate_title_artist(&self.title, &self.artist)
    }
}

impl UpdateSong {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Check required fields
    pub fn validate(&self) -> Result<()> {
        validate_title_artist(&self.title, &self.artist)
    }
}
