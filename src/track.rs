//! Track metadata for the demo player.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors from building or loading track metadata.
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error("Failed to read track file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse track file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Track duration must be a finite, non-negative number of seconds, got {0}")]
    InvalidDuration(f64),
}

/// What the player plays: a title, an artist, and a length in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Track {
    /// Title shown above the slider
    pub title: String,
    /// Artist shown between the time readouts
    pub artist: String,
    /// Track length in seconds
    pub duration: f64,
}

impl Track {
    /// Create a track, validating the duration.
    pub fn new(title: String, artist: String, duration: f64) -> Result<Self, TrackError> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(TrackError::InvalidDuration(duration));
        }
        Ok(Self {
            title,
            artist,
            duration,
        })
    }

    /// Load a track from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, TrackError> {
        let raw = std::fs::read_to_string(path)?;
        let track: Track = serde_json::from_str(&raw)?;
        Self::new(track.title, track.artist, track.duration)
    }
}
