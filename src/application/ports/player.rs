//! Playback port interface

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    #[error("No audio output device available: {0}")]
    DeviceNotAvailable(String),

    #[error("Failed to open audio file: {0}")]
    OpenFailed(String),

    #[error("Failed to decode audio file: {0}")]
    DecodeFailed(String),

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// Port for playing a stored note on the default audio output.
#[async_trait]
pub trait AudioPlayer: Send + Sync {
    /// Decode the file and start playing it.
    ///
    /// Fire-and-forget: the call resolves once playback has started, not
    /// once it finishes. Concurrent plays are not serialized.
    async fn play(&self, path: &Path) -> Result<(), PlaybackError>;
}
