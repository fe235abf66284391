//! Voice note entity

use std::path::{Path, PathBuf};

use crate::domain::note::Marker;

/// Directory under the project root that holds all voice notes
pub const NOTES_DIR: &str = "voicecomments";

/// Filename prefix for recorded notes
pub const NOTE_FILE_PREFIX: &str = "voice_note_";

/// Filename extension for recorded notes
pub const NOTE_FILE_EXTENSION: &str = "wav";

/// A stored voice recording, identified by its project-relative path.
///
/// Paths are always kept relative to the project root so annotated source
/// trees stay portable across checkouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceNote {
    relative_path: PathBuf,
    created_ms: u64,
}

impl VoiceNote {
    /// Create a note from its project-relative path and capture timestamp
    pub fn new(relative_path: impl Into<PathBuf>, created_ms: u64) -> Self {
        Self {
            relative_path: relative_path.into(),
            created_ms,
        }
    }

    /// Build the canonical relative path for a note captured at the given
    /// epoch-millisecond timestamp, under the given notes directory name.
    pub fn path_for_timestamp(notes_dir: &str, timestamp_ms: u64) -> PathBuf {
        PathBuf::from(notes_dir).join(format!(
            "{}{}.{}",
            NOTE_FILE_PREFIX, timestamp_ms, NOTE_FILE_EXTENSION
        ))
    }

    /// The project-relative path of the WAV file
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Capture timestamp in epoch milliseconds
    pub fn created_ms(&self) -> u64 {
        self.created_ms
    }

    /// Resolve the note against a project root
    pub fn resolve(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.relative_path)
    }

    /// The marker line that references this note
    pub fn marker(&self) -> Marker {
        Marker::new(&self.relative_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_path_layout() {
        let path = VoiceNote::path_for_timestamp(NOTES_DIR, 1_700_000_000_000);
        assert_eq!(
            path,
            Path::new("voicecomments/voice_note_1700000000000.wav")
        );
    }

    #[test]
    fn resolve_against_project_root() {
        let note = VoiceNote::new("voicecomments/voice_note_1.wav", 1);
        assert_eq!(
            note.resolve(Path::new("/proj")),
            Path::new("/proj/voicecomments/voice_note_1.wav")
        );
    }

    #[test]
    fn marker_references_relative_path() {
        let note = VoiceNote::new("voicecomments/voice_note_1.wav", 1);
        assert_eq!(
            note.marker().to_line(),
            "// [Voice Note: voicecomments/voice_note_1.wav]"
        );
    }
}
