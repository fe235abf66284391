//! Captured audio value object

use crate::domain::recording::RecordingFormat;

/// Value object holding a finished capture: mono 16-bit samples at a known
/// sample rate, ready to be encoded to WAV.
#[derive(Debug, Clone)]
pub struct PcmAudio {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl PcmAudio {
    /// Create PcmAudio from mono samples
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Get the raw samples
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Sample rate the audio was captured at
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Whether any audio was captured
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Recorded length in milliseconds
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        self.samples.len() as u64 * 1000 / self.sample_rate as u64
    }

    /// The format this audio matches (mono, 16-bit, capture rate)
    pub fn format(&self) -> RecordingFormat {
        RecordingFormat::mono_16bit(self.sample_rate)
    }

    /// Human-readable encoded size estimate
    pub fn human_readable_size(&self) -> String {
        let bytes = self.samples.len() * 2;
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}
