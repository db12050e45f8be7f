//! Playlist aggregate types
//!
//! A playlist owns its song memberships. Songs are referenced by id and
//! expanded into [`PlaylistSong`] summaries when a playlist is read.

use super::ids::{PlaylistId, SongId};
use crate::error::{MelodiaError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum description length, in characters
pub const DESCRIPTION_MIN_LEN: usize = 50;

/// Maximum description length, in characters
pub const DESCRIPTION_MAX_LEN: usize = 255;

/// Playlist with its memberships
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub description: String,
    pub is_published: bool,

    /// Present iff `is_published`; omitted from JSON for drafts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// Newest first
    pub songs: Vec<PlaylistSong>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Playlist {
    /// Lifecycle state derived from the publish flag
    pub fn status(&self) -> PlaylistStatus {
        if self.is_published {
            PlaylistStatus::Published
        } else {
            PlaylistStatus::Draft
        }
    }

    /// Whether the song is a member of this playlist
    pub fn contains(&self, song_id: SongId) -> bool {
        self.songs.iter().any(|song| song.id == song_id)
    }
}

/// Song membership expanded for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PlaylistSong {
    /// Song ID
    pub id: SongId,
    pub title: String,
    pub artist: String,

    /// When the song was first added to the playlist
    pub added_at: DateTime<Utc>,
}

/// Data for creating a new playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylist {
    pub name: String,
    pub description: String,
}

impl CreatePlaylist {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Check required fields and the description length bounds
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.description.trim().is_empty() {
            return Err(MelodiaError::validation(
                "Name and description are required",
            ));
        }

        let len = self.description.chars().count();
        if len < DESCRIPTION_MIN_LEN {
            return Err(MelodiaError::validation(format!(
                "Description must be at least {DESCRIPTION_MIN_LEN} characters long"
            )));
        }
        if len > DESCRIPTION_MAX_LEN {
            return Err(MelodiaError::validation(format!(
                "Description cannot exceed {DESCRIPTION_MAX_LEN} characters"
            )));
        }

        Ok(())
    }
}

/// Publication lifecycle of a playlist
///
/// `Draft -> Published` happens once, through publishing. Nothing leads back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaylistStatus {
    Draft,
    Published,
}

/// Which playlists a listing returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishedFilter {
    /// Published playlists only, most recently published first
    #[default]
    Published,
    /// Every playlist, most recently created first
    All,
}

impl PublishedFilter {
    /// Map the optional `published` flag; absence means published only
    pub fn from_flag(published: Option<bool>) -> Self {
        match published {
            Some(false) => Self::All,
            Some(true) | None => Self::Published,
        }
    }
}

impl FromStr for PublishedFilter {
    type Err = MelodiaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(Self::Published),
            "false" => Ok(Self::All),
            other => Err(MelodiaError::validation(format!(
                "Invalid published filter '{other}': expected true or false"
            ))),
        }
    }
}

impl fmt::Display for PublishedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Published => f.write_str("published"),
            Self::All => f.write_str("all"),
        }
    }
}
