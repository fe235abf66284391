//! Editor host adapters

pub mod file_editor;

pub use file_editor::FileEditorHost;
