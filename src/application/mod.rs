//! Application layer - Use cases and port interfaces
//!
//! Contains the core record/playback operations and trait definitions
//! for external system interactions.

pub mod play_note;
pub mod ports;
pub mod record_note;

// Re-export use cases
pub use play_note::{PlayNoteError, PlayNoteOutput, PlayNoteUseCase};
pub use record_note::{
    RecordNoteCallbacks, RecordNoteError, RecordNoteInput, RecordNoteUseCase, RecordOutcome,
};
