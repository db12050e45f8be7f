/// Core error types for Melodia
use std::fmt;
use thiserror::Error;

/// Result type alias using `MelodiaError`
pub type Result<T> = std::result::Result<T, MelodiaError>;

/// Kind of entity referenced by a `NotFound` error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Song,
    Playlist,
}

impl EntityKind {
    /// Lowercase name used in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Song => "song",
            EntityKind::Playlist => "playlist",
        }
    }

    /// Capitalized name used in problem titles
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Song => "Song",
            EntityKind::Playlist => "Playlist",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core error type for Melodia
#[derive(Error, Debug)]
pub enum MelodiaError {
    /// Malformed or out-of-range input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced entity does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: i64 },

    /// Duplicate rejected by a caller-level policy
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Failure from the persistence layer
    #[error("Storage error: {0}")]
    Storage(String),
}

impl MelodiaError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Song with the given id does not exist
    pub fn song_not_found(id: impl Into<i64>) -> Self {
        Self::NotFound {
            entity: EntityKind::Song,
            id: id.into(),
        }
    }

    /// Playlist with the given id does not exist
    pub fn playlist_not_found(id: impl Into<i64>) -> Self {
        Self::NotFound {
            entity: EntityKind::Playlist,
            id: id.into(),
        }
    }

    /// Entity kind carried by a `NotFound` error
    pub fn missing_entity(&self) -> Option<EntityKind> {
        match self {
            Self::NotFound { entity, .. } => Some(*entity),
            _ => None,
        }
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for MelodiaError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
