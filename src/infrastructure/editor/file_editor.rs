//! File-backed editor host adapter
//!
//! Stands in for a real editor: the "cursor" is a source file path plus a
//! 1-based line number, the project root is an explicit directory. Marker
//! insertion rewrites the file through a temp-file-and-rename so a crash
//! mid-write can never leave a half-edited document.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{EditorError, EditorHost};

/// Editor host backed by a plain text file on disk.
pub struct FileEditorHost {
    project_root: PathBuf,
    file: PathBuf,
    /// 1-based cursor line
    line: usize,
}

impl FileEditorHost {
    /// Create a host for a file and cursor line under a project root
    pub fn new(project_root: impl Into<PathBuf>, file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            project_root: project_root.into(),
            file: file.into(),
            line,
        }
    }

    async fn read_document(&self) -> Result<String, EditorError> {
        fs::read_to_string(&self.file)
            .await
            .map_err(|e| EditorError::ReadFailed(format!("{}: {}", self.file.display(), e)))
    }

    /// Split a document into lines, each keeping its trailing newline
    fn split_lines(content: &str) -> Vec<&str> {
        content.split_inclusive('\n').collect()
    }

    fn strip_line_ending(line: &str) -> &str {
        line.trim_end_matches('\n').trim_end_matches('\r')
    }

    /// Replace the document contents as one atomic filesystem operation
    async fn write_atomic(&self, content: String) -> Result<(), EditorError> {
        let file_name = self
            .file
            .file_name()
            .ok_or_else(|| EditorError::InsertFailed("document has no file name".to_string()))?;
        let tmp = self
            .file
            .with_file_name(format!(".{}.voice-comments.tmp", file_name.to_string_lossy()));

        fs::write(&tmp, content)
            .await
            .map_err(|e| EditorError::InsertFailed(e.to_string()))?;

        if let Err(e) = fs::rename(&tmp, &self.file).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(EditorError::InsertFailed(e.to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl EditorHost for FileEditorHost {
    fn project_root(&self) -> Result<PathBuf, EditorError> {
        if !self.project_root.is_dir() {
            return Err(EditorError::ContextUnavailable(format!(
                "project root is not a directory: {}",
                self.project_root.display()
            )));
        }
        if !self.file.is_file() {
            return Err(EditorError::ContextUnavailable(format!(
                "no such document: {}",
                self.file.display()
            )));
        }
        Ok(self.project_root.clone())
    }

    async fn current_line(&self) -> Result<String, EditorError> {
        let content = self.read_document().await?;
        let lines = Self::split_lines(&content);

        if self.line == 0 || self.line > lines.len() {
            return Err(EditorError::LineOutOfRange {
                line: self.line,
                lines: lines.len(),
            });
        }

        Ok(Self::strip_line_ending(lines[self.line - 1]).to_string())
    }

    async fn insert_line(&self, line: &str) -> Result<(), EditorError> {
        let content = self.read_document().await?;
        let lines = Self::split_lines(&content);

        // Inserting after the last line (cursor on a fresh trailing line)
        // is allowed; anything beyond that is out of range
        if self.line == 0 || self.line > lines.len() + 1 {
            return Err(EditorError::LineOutOfRange {
                line: self.line,
                lines: lines.len(),
            });
        }

        let mut updated = String::with_capacity(content.len() + line.len() + 1);
        for (idx, existing) in lines.iter().enumerate() {
            if idx + 1 == self.line {
                updated.push_str(line);
                updated.push('\n');
            }
            updated.push_str(existing);
        }
        if self.line == lines.len() + 1 {
            if !content.is_empty() && !content.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(line);
            updated.push('\n');
        }

        self.write_atomic(updated).await
    }
}
