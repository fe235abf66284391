//! Recording format value object

use std::fmt;

/// Default sample rate for voice recordings (speech band)
pub const DEFAULT_SAMPLE_RATE: u32 = 16_000;

/// PCM format a recording is captured and stored in.
///
/// The observed default is mono, 16-bit, 16 kHz; the sample rate is
/// configurable while channel count and sample width are fixed to what
/// the WAV encoder writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordingFormat {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

impl RecordingFormat {
    /// Speech-optimized format at a given sample rate (mono, 16-bit)
    pub const fn mono_16bit(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            channels: 1,
            bits_per_sample: 16,
        }
    }
}

impl Default for RecordingFormat {
    fn default() -> Self {
        Self::mono_16bit(DEFAULT_SAMPLE_RATE)
    }
}

impl fmt::Display for RecordingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Hz, {}-bit, {} channel{}",
            self.sample_rate,
            self.bits_per_sample,
            self.channels,
            if self.channels == 1 { "" } else { "s" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_speech_format() {
        let format = RecordingFormat::default();
        assert_eq!(format.sample_rate, 16_000);
        assert_eq!(format.channels, 1);
        assert_eq!(format.bits_per_sample, 16);
    }

    #[test]
    fn display_format() {
        assert_eq!(
            RecordingFormat::default().to_string(),
            "16000 Hz, 16-bit, 1 channel"
        );
    }
}
