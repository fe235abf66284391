//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the audio hardware, filesystem, and terminal.

pub mod config;
pub mod dialog;
pub mod editor;
pub mod playback;
pub mod recording;
pub mod store;

// Re-export adapters
pub use config::XdgConfigStore;
pub use dialog::ConsoleDialog;
pub use editor::FileEditorHost;
pub use playback::RodioPlayer;
pub use recording::CpalRecorder;
pub use store::WavNoteStore;
