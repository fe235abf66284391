//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod dialog;
pub mod editor;
pub mod player;
pub mod recorder;
pub mod store;

// Re-export common types
pub use config::ConfigStore;
pub use dialog::{Dialog, DialogError};
pub use editor::{EditorError, EditorHost};
pub use player::{AudioPlayer, PlaybackError};
pub use recorder::{AudioRecorder, ProgressCallback, RecordingError};
pub use store::{NoteWriter, StoreError};
