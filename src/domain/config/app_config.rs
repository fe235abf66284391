//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::note::voice_note::NOTES_DIR;
use crate::domain::recording::format::DEFAULT_SAMPLE_RATE;
use crate::domain::recording::{Duration, RecordingFormat};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Recording duration, e.g. "10s"
    pub duration: Option<String>,
    /// Recording sample rate in Hz
    pub sample_rate: Option<u32>,
    /// Directory under the project root that holds the notes
    pub notes_dir: Option<String>,
    /// Skip the yes/no prompt before recording
    pub assume_yes: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            duration: Some(Duration::default_duration().to_string()),
            sample_rate: Some(DEFAULT_SAMPLE_RATE),
            notes_dir: Some(NOTES_DIR.to_string()),
            assume_yes: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            duration: other.duration.or(self.duration),
            sample_rate: other.sample_rate.or(self.sample_rate),
            notes_dir: other.notes_dir.or(self.notes_dir),
            assume_yes: other.assume_yes.or(self.assume_yes),
        }
    }

    /// Get the recording format at the configured sample rate
    pub fn recording_format(&self) -> RecordingFormat {
        RecordingFormat::mono_16bit(self.sample_rate.unwrap_or(DEFAULT_SAMPLE_RATE))
    }

    /// Get the notes directory name, or the default
    pub fn notes_dir_or_default(&self) -> String {
        self.notes_dir
            .clone()
            .unwrap_or_else(|| NOTES_DIR.to_string())
    }

    /// Get the assume_yes setting, or false if not set
    pub fn assume_yes_or_default(&self) -> bool {
        self.assume_yes.unwrap_or(false)
    }
}
