//! Rodio-based playback adapter
//!
//! Decodes a stored note and plays it on the default output device.
//! Playback accepts any WAV file, not just ones this tool recorded.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rodio::{Decoder, OutputStream, Sink};
use tokio::sync::oneshot;

use crate::application::ports::{AudioPlayer, PlaybackError};

/// Audio player implementation using rodio
pub struct RodioPlayer;

impl RodioPlayer {
    /// Create a new rodio-based player
    pub fn new() -> Self {
        Self
    }

    /// Open the device, decode the file, and start the sink.
    /// Returns the handles that must stay alive for playback to continue.
    fn start_sync(path: &Path) -> Result<(OutputStream, Sink), PlaybackError> {
        let file = File::open(path).map_err(|e| PlaybackError::OpenFailed(e.to_string()))?;

        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| PlaybackError::DecodeFailed(e.to_string()))?;

        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| PlaybackError::DeviceNotAvailable(e.to_string()))?;

        let sink = Sink::try_new(&stream_handle)
            .map_err(|e| PlaybackError::PlaybackFailed(e.to_string()))?;

        sink.append(source);

        Ok((stream, sink))
    }
}

impl Default for RodioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioPlayer for RodioPlayer {
    async fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        let path: PathBuf = path.to_path_buf();
        let (tx, rx) = oneshot::channel();

        // Fire-and-forget: a detached thread owns the output stream and
        // sink so audio keeps playing after this call returns. The caller
        // only waits for the started/failed signal.
        std::thread::spawn(move || match Self::start_sync(&path) {
            Ok((_stream, sink)) => {
                let _ = tx.send(Ok(()));
                sink.sleep_until_end();
            }
            Err(e) => {
                let _ = tx.send(Err(e));
            }
        });

        rx.await
            .map_err(|_| PlaybackError::PlaybackFailed("Playback thread exited".to_string()))?
    }
}
