//! Recording port interface

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::recording::{Duration, PcmAudio, RecordingFormat};

/// Recording errors
#[derive(Debug, Clone, Error)]
pub enum RecordingError {
    #[error("No audio input device available")]
    NoAudioDevice,

    #[error("Audio device does not support the requested format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to start recording: {0}")]
    StartFailed(String),

    #[error("Recording failed: {0}")]
    CaptureFailed(String),
}

/// Progress callback type for reporting recording progress.
/// Parameters: (elapsed_ms, total_ms)
pub type ProgressCallback = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// Port for fixed-duration microphone capture.
#[async_trait]
pub trait AudioRecorder: Send + Sync {
    /// Record audio for a fixed duration at the requested format.
    ///
    /// The returned future resolves only once every captured sample has been
    /// collected, so callers may persist the result without racing the
    /// capture path.
    async fn record(
        &self,
        format: RecordingFormat,
        duration: Duration,
        on_progress: Option<ProgressCallback>,
    ) -> Result<PcmAudio, RecordingError>;
}
