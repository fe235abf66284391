//! WAV note store adapter
//!
//! Encodes captured PCM with hound into
//! `<root>/<notes-dir>/voice_note_<epoch-millis>.wav`.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use hound::{SampleFormat, WavSpec, WavWriter};
use tokio::fs;

use crate::application::ports::{NoteWriter, StoreError};
use crate::domain::note::voice_note::NOTES_DIR;
use crate::domain::note::VoiceNote;
use crate::domain::recording::PcmAudio;

/// Filesystem-backed note store writing one WAV file per recording.
pub struct WavNoteStore {
    notes_dir: String,
}

impl WavNoteStore {
    /// Create a store using the default notes directory name
    pub fn new() -> Self {
        Self {
            notes_dir: NOTES_DIR.to_string(),
        }
    }

    /// Create a store with a custom notes directory name
    pub fn with_dir(notes_dir: impl Into<String>) -> Self {
        Self {
            notes_dir: notes_dir.into(),
        }
    }

    fn now_ms() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    /// Pick a timestamp whose filename is free under the notes directory.
    ///
    /// Two recordings landing in the same millisecond would otherwise
    /// collide; stepping the timestamp forward keeps names unique without
    /// overwriting.
    fn allocate(&self, root: &Path, mut timestamp_ms: u64) -> (u64, PathBuf) {
        loop {
            let relative = VoiceNote::path_for_timestamp(&self.notes_dir, timestamp_ms);
            let absolute = root.join(&relative);
            if !absolute.exists() {
                return (timestamp_ms, relative);
            }
            timestamp_ms += 1;
        }
    }

    fn write_wav(path: &Path, audio: &PcmAudio) -> Result<(), StoreError> {
        let spec = WavSpec {
            channels: 1,
            sample_rate: audio.sample_rate(),
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };

        let mut writer = WavWriter::create(path, spec)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        for &sample in audio.samples() {
            writer
                .write_sample(sample)
                .map_err(|e| StoreError::EncodeFailed(e.to_string()))?;
        }

        // finalize patches the RIFF header and flushes; without it the
        // file on disk is not a valid WAV
        writer
            .finalize()
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        Ok(())
    }
}

impl Default for WavNoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteWriter for WavNoteStore {
    async fn persist(
        &self,
        project_root: &Path,
        audio: &PcmAudio,
    ) -> Result<VoiceNote, StoreError> {
        let dir = project_root.join(&self.notes_dir);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StoreError::DirectoryCreateFailed(e.to_string()))?;

        let (timestamp_ms, relative) = self.allocate(project_root, Self::now_ms());
        let absolute = project_root.join(&relative);

        // Encoding is synchronous hound I/O; run it off the async workers
        // and await the result so callers observe a fully flushed file
        let audio_clone = audio.clone();
        tokio::task::spawn_blocking(move || Self::write_wav(&absolute, &audio_clone))
            .await
            .map_err(|e| StoreError::WriteFailed(format!("Encode task error: {}", e)))??;

        Ok(VoiceNote::new(relative, timestamp_ms))
    }
}
