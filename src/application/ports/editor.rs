//! Editor host port interface
//!
//! Narrow capability surface over whatever hosts the annotated source:
//! project-root lookup, current-line access, and a single atomic line
//! insertion at the cursor.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Editor host errors
#[derive(Debug, Clone, Error)]
pub enum EditorError {
    #[error("No project or editor context available: {0}")]
    ContextUnavailable(String),

    #[error("Cursor line {line} is out of range (document has {lines} lines)")]
    LineOutOfRange { line: usize, lines: usize },

    #[error("Failed to read document: {0}")]
    ReadFailed(String),

    #[error("Failed to insert into document: {0}")]
    InsertFailed(String),
}

/// Port for the host editor surface the two actions consume.
#[async_trait]
pub trait EditorHost: Send + Sync {
    /// Base directory all note paths are resolved against
    fn project_root(&self) -> Result<PathBuf, EditorError>;

    /// Raw text of the line the cursor is on
    async fn current_line(&self) -> Result<String, EditorError>;

    /// Insert a single line at the cursor as one atomic edit.
    ///
    /// Atomicity matters so the insertion participates as one unit in the
    /// host's undo history (or, for file-backed hosts, so a crash cannot
    /// leave a half-written document).
    async fn insert_line(&self, line: &str) -> Result<(), EditorError>;
}
