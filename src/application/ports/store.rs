//! Note persistence port interface

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::domain::note::VoiceNote;
use crate::domain::recording::PcmAudio;

/// Persistence errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Failed to create notes directory: {0}")]
    DirectoryCreateFailed(String),

    #[error("Failed to encode WAV file: {0}")]
    EncodeFailed(String),

    #[error("Failed to write note file: {0}")]
    WriteFailed(String),
}

/// Port for persisting a capture as a WAV file under the project root.
#[async_trait]
pub trait NoteWriter: Send + Sync {
    /// Encode the audio as WAV and write it into the notes directory,
    /// creating the directory if absent.
    ///
    /// The returned future resolves only after the file is fully flushed,
    /// and the returned note's path is relative to `project_root`. Filenames
    /// are derived from the capture timestamp; an allocator must step past
    /// same-millisecond collisions rather than overwrite.
    async fn persist(
        &self,
        project_root: &Path,
        audio: &PcmAudio,
    ) -> Result<VoiceNote, StoreError>;
}
