//! Play voice note use case

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::error::MarkerParseError;
use crate::domain::note::Marker;

use super::ports::{AudioPlayer, Dialog, EditorError, EditorHost, PlaybackError};

/// Errors from the play use case
#[derive(Debug, Error)]
pub enum PlayNoteError {
    #[error("{0}")]
    Context(#[from] EditorError),

    #[error(transparent)]
    Marker(#[from] MarkerParseError),

    #[error("Voice note file does not exist: {0}")]
    NoteNotFound(PathBuf),

    #[error("Failed to play voice note: {0}")]
    Playback(#[from] PlaybackError),
}

/// Output from a successful play request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayNoteOutput {
    /// Absolute path of the note now playing
    pub path: PathBuf,
}

/// Single-shot marker-to-playback use case.
///
/// Stateless: extract the marker from the current line, resolve it against
/// the project root, and hand the file to the playback device. The document
/// is never mutated.
pub struct PlayNoteUseCase<E, P, D>
where
    E: EditorHost,
    P: AudioPlayer,
    D: Dialog,
{
    editor: E,
    player: P,
    dialog: D,
}

impl<E, P, D> PlayNoteUseCase<E, P, D>
where
    E: EditorHost,
    P: AudioPlayer,
    D: Dialog,
{
    /// Create a new use case instance
    pub fn new(editor: E, player: P, dialog: D) -> Self {
        Self {
            editor,
            player,
            dialog,
        }
    }

    /// Execute the play workflow. Returns once playback has started.
    pub async fn execute(&self) -> Result<PlayNoteOutput, PlayNoteError> {
        let project_root = self.editor.project_root()?;
        let line = self.editor.current_line().await?;

        let marker = Marker::parse(&line)?;
        let path = project_root.join(marker.path());

        if !path.is_file() {
            return Err(PlayNoteError::NoteNotFound(path));
        }

        if let Err(e) = self.player.play(&path).await {
            let _ = self.dialog.error("Playback Failed", &e.to_string()).await;
            return Err(e.into());
        }

        let _ = self
            .dialog
            .info("Playing", &format!("Playing voice note: {}", path.display()))
            .await;

        Ok(PlayNoteOutput { path })
    }
}
