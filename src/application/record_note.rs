//! Record voice note use case

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

use crate::domain::note::VoiceNote;
use crate::domain::recording::{Duration, RecordingFormat};

use super::ports::{
    AudioRecorder, Dialog, DialogError, EditorError, EditorHost, NoteWriter, ProgressCallback,
    RecordingError, StoreError,
};

/// Errors from the record use case
#[derive(Debug, Error)]
pub enum RecordNoteError {
    #[error("{0}")]
    Context(#[from] EditorError),

    #[error("Failed to present confirmation dialog: {0}")]
    Dialog(#[from] DialogError),

    #[error("Audio device unavailable: {0}")]
    Device(#[from] RecordingError),

    #[error("Failed to save voice note: {0}")]
    Io(#[from] StoreError),

    #[error("A recording is already in progress")]
    RecordInProgress,
}

/// Input parameters for the record use case
#[derive(Debug, Clone)]
pub struct RecordNoteInput {
    /// How long to record
    pub duration: Duration,
    /// Capture format
    pub format: RecordingFormat,
}

impl Default for RecordNoteInput {
    fn default() -> Self {
        Self {
            duration: Duration::default_duration(),
            format: RecordingFormat::default(),
        }
    }
}

/// Result of a record request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A note was recorded, persisted, and referenced by a fresh marker
    Recorded(VoiceNote),
    /// The user declined the confirmation prompt; nothing happened
    Declined,
}

/// Callbacks for progress and status updates
#[derive(Default)]
pub struct RecordNoteCallbacks {
    /// Called during recording with (elapsed_ms, total_ms)
    pub on_progress: Option<ProgressCallback>,
    /// Called when capture starts
    pub on_recording_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when capture ends, with the human-readable audio size
    pub on_recording_end: Option<Box<dyn Fn(&str) + Send + Sync>>,
}

/// Releases the in-flight flag when the recording attempt ends, on both
/// success and error paths.
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// One-shot record-and-annotate use case.
///
/// Confirm, capture, persist, then insert the marker. Persistence is awaited
/// to completion before the marker is inserted, so a marker never references
/// a file that is still being flushed. Concurrent record requests are
/// rejected while one is in flight; playback is intentionally not serialized
/// against recording.
pub struct RecordNoteUseCase<R, W, E, D>
where
    R: AudioRecorder,
    W: NoteWriter,
    E: EditorHost,
    D: Dialog,
{
    recorder: R,
    writer: W,
    editor: E,
    dialog: D,
    in_flight: Arc<AtomicBool>,
}

impl<R, W, E, D> RecordNoteUseCase<R, W, E, D>
where
    R: AudioRecorder,
    W: NoteWriter,
    E: EditorHost,
    D: Dialog,
{
    /// Create a new use case instance
    pub fn new(recorder: R, writer: W, editor: E, dialog: D) -> Self {
        Self {
            recorder,
            writer,
            editor,
            dialog,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a recording is currently in flight
    pub fn is_recording(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Execute the record workflow
    pub async fn execute(
        &self,
        input: RecordNoteInput,
        callbacks: RecordNoteCallbacks,
    ) -> Result<RecordOutcome, RecordNoteError> {
        // Context must exist before anything else happens
        let project_root = self.editor.project_root()?;

        // A dialog that cannot be presented is an error, not a decline
        let confirmed = self
            .dialog
            .confirm("Add Voice Note", "Would you like to record a voice note?")
            .await?;
        if !confirmed {
            return Ok(RecordOutcome::Declined);
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(RecordNoteError::RecordInProgress);
        }
        let _guard = InFlightGuard(Arc::clone(&self.in_flight));

        if let Some(ref cb) = callbacks.on_recording_start {
            cb();
        }

        // Capture fully in memory first: a device failure here leaves no
        // directory and no partial file behind
        let audio = match self
            .recorder
            .record(input.format, input.duration, callbacks.on_progress)
            .await
        {
            Ok(audio) => audio,
            Err(e) => {
                let _ = self.dialog.error("Recording Failed", &e.to_string()).await;
                return Err(e.into());
            }
        };

        if let Some(ref cb) = callbacks.on_recording_end {
            cb(&audio.human_readable_size());
        }

        // Resolves only once the WAV file is flushed
        let note = match self.writer.persist(&project_root, &audio).await {
            Ok(note) => note,
            Err(e) => {
                let _ = self.dialog.error("Recording Failed", &e.to_string()).await;
                return Err(e.into());
            }
        };

        // Single atomic edit so the marker is one undo step
        let marker_line = note.marker().to_line();
        self.editor.insert_line(&marker_line).await?;

        let _ = self
            .dialog
            .info(
                "Recording Complete",
                &format!(
                    "Voice note saved as: {}",
                    note.resolve(&project_root).display()
                ),
            )
            .await;

        Ok(RecordOutcome::Recorded(note))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recording::PcmAudio;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    struct MockRecorder {
        result: Result<(), RecordingError>,
    }

    impl MockRecorder {
        fn ok() -> Self {
            Self { result: Ok(()) }
        }

        fn failing(err: RecordingError) -> Self {
            Self { result: Err(err) }
        }
    }

    #[async_trait]
    impl AudioRecorder for MockRecorder {
        async fn record(
            &self,
            format: RecordingFormat,
            _duration: Duration,
            _on_progress: Option<ProgressCallback>,
        ) -> Result<PcmAudio, RecordingError> {
            self.result
                .clone()
                .map(|_| PcmAudio::new(vec![0i16; 100], format.sample_rate))
        }
    }

    #[derive(Default)]
    struct MockWriter {
        persisted: Mutex<Vec<PathBuf>>,
    }

    #[async_trait]
    impl NoteWriter for MockWriter {
        async fn persist(
            &self,
            project_root: &Path,
            _audio: &PcmAudio,
        ) -> Result<VoiceNote, StoreError> {
            let note = VoiceNote::new("voicecomments/voice_note_1700000000000.wav", 1_700_000_000_000);
            self.persisted
                .lock()
                .unwrap()
                .push(note.resolve(project_root));
            Ok(note)
        }
    }

    #[derive(Default)]
    struct MockEditor {
        inserted: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl EditorHost for MockEditor {
        fn project_root(&self) -> Result<PathBuf, EditorError> {
            Ok(PathBuf::from("/proj"))
        }

        async fn current_line(&self) -> Result<String, EditorError> {
            Ok(String::new())
        }

        async fn insert_line(&self, line: &str) -> Result<(), EditorError> {
            self.inserted.lock().unwrap().push(line.to_string());
            Ok(())
        }
    }

    struct NoEditor;

    #[async_trait]
    impl EditorHost for NoEditor {
        fn project_root(&self) -> Result<PathBuf, EditorError> {
            Err(EditorError::ContextUnavailable("no project".into()))
        }

        async fn current_line(&self) -> Result<String, EditorError> {
            Err(EditorError::ContextUnavailable("no project".into()))
        }

        async fn insert_line(&self, _line: &str) -> Result<(), EditorError> {
            Err(EditorError::ContextUnavailable("no project".into()))
        }
    }

    struct MockDialog {
        answer: bool,
        errors: Mutex<Vec<String>>,
    }

    impl MockDialog {
        fn yes() -> Self {
            Self {
                answer: true,
                errors: Mutex::new(Vec::new()),
            }
        }

        fn no() -> Self {
            Self {
                answer: false,
                errors: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Dialog for MockDialog {
        async fn confirm(&self, _title: &str, _message: &str) -> Result<bool, DialogError> {
            Ok(self.answer)
        }

        async fn info(&self, _title: &str, _message: &str) -> Result<(), DialogError> {
            Ok(())
        }

        async fn error(&self, _title: &str, message: &str) -> Result<(), DialogError> {
            self.errors.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    /// Dialog whose presentation layer is broken
    struct UnpresentableDialog;

    #[async_trait]
    impl Dialog for UnpresentableDialog {
        async fn confirm(&self, _title: &str, _message: &str) -> Result<bool, DialogError> {
            Err(DialogError::PresentFailed("no tty".into()))
        }

        async fn info(&self, _title: &str, _message: &str) -> Result<(), DialogError> {
            Err(DialogError::PresentFailed("no tty".into()))
        }

        async fn error(&self, _title: &str, _message: &str) -> Result<(), DialogError> {
            Err(DialogError::PresentFailed("no tty".into()))
        }
    }

    #[tokio::test]
    async fn records_and_inserts_exactly_one_marker() {
        let use_case = RecordNoteUseCase::new(
            MockRecorder::ok(),
            MockWriter::default(),
            MockEditor::default(),
            MockDialog::yes(),
        );

        let outcome = use_case
            .execute(RecordNoteInput::default(), RecordNoteCallbacks::default())
            .await
            .unwrap();

        let note = match outcome {
            RecordOutcome::Recorded(note) => note,
            RecordOutcome::Declined => panic!("expected a recorded note"),
        };

        let inserted = use_case.editor.inserted.lock().unwrap();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0], note.marker().to_line());
        // The marker path resolves back to the file the writer produced
        let persisted = use_case.writer.persisted.lock().unwrap();
        assert_eq!(persisted.as_slice(), &[note.resolve(Path::new("/proj"))]);
    }

    #[tokio::test]
    async fn declined_prompt_is_a_no_op() {
        let use_case = RecordNoteUseCase::new(
            MockRecorder::ok(),
            MockWriter::default(),
            MockEditor::default(),
            MockDialog::no(),
        );

        let outcome = use_case
            .execute(RecordNoteInput::default(), RecordNoteCallbacks::default())
            .await
            .unwrap();

        assert_eq!(outcome, RecordOutcome::Declined);
        assert!(use_case.editor.inserted.lock().unwrap().is_empty());
        assert!(use_case.writer.persisted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_context_fails_before_prompting() {
        let use_case = RecordNoteUseCase::new(
            MockRecorder::ok(),
            MockWriter::default(),
            NoEditor,
            MockDialog::yes(),
        );

        let err = use_case
            .execute(RecordNoteInput::default(), RecordNoteCallbacks::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RecordNoteError::Context(EditorError::ContextUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn device_failure_inserts_no_marker() {
        let use_case = RecordNoteUseCase::new(
            MockRecorder::failing(RecordingError::NoAudioDevice),
            MockWriter::default(),
            MockEditor::default(),
            MockDialog::yes(),
        );

        let err = use_case
            .execute(RecordNoteInput::default(), RecordNoteCallbacks::default())
            .await
            .unwrap_err();

        assert!(matches!(err, RecordNoteError::Device(_)));
        assert!(use_case.editor.inserted.lock().unwrap().is_empty());
        assert!(use_case.writer.persisted.lock().unwrap().is_empty());
        // The failure was surfaced through the host's error dialog
        assert_eq!(use_case.dialog.errors.lock().unwrap().len(), 1);
        // The in-flight guard was released despite the failure
        assert!(!use_case.is_recording());
    }

    #[tokio::test]
    async fn broken_dialog_is_an_error_not_a_decline() {
        let use_case = RecordNoteUseCase::new(
            MockRecorder::ok(),
            MockWriter::default(),
            MockEditor::default(),
            UnpresentableDialog,
        );

        let err = use_case
            .execute(RecordNoteInput::default(), RecordNoteCallbacks::default())
            .await
            .unwrap_err();

        assert!(matches!(err, RecordNoteError::Dialog(_)));
        assert!(use_case.editor.inserted.lock().unwrap().is_empty());
        assert!(use_case.writer.persisted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn concurrent_record_requests_are_rejected() {
        struct SlowRecorder;

        #[async_trait]
        impl AudioRecorder for SlowRecorder {
            async fn record(
                &self,
                format: RecordingFormat,
                _duration: Duration,
                _on_progress: Option<ProgressCallback>,
            ) -> Result<PcmAudio, RecordingError> {
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(PcmAudio::new(vec![0i16; 100], format.sample_rate))
            }
        }

        let use_case = Arc::new(RecordNoteUseCase::new(
            SlowRecorder,
            MockWriter::default(),
            MockEditor::default(),
            MockDialog::yes(),
        ));

        let first = {
            let use_case = Arc::clone(&use_case);
            tokio::spawn(async move {
                use_case
                    .execute(RecordNoteInput::default(), RecordNoteCallbacks::default())
                    .await
            })
        };

        // Wait until the first request has claimed the in-flight slot
        while !use_case.is_recording() {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        let second = use_case
            .execute(RecordNoteInput::default(), RecordNoteCallbacks::default())
            .await;
        assert!(matches!(second, Err(RecordNoteError::RecordInProgress)));

        let first = first.await.unwrap().unwrap();
        assert!(matches!(first, RecordOutcome::Recorded(_)));
        // Only the winning request persisted audio and inserted a marker
        assert_eq!(use_case.writer.persisted.lock().unwrap().len(), 1);
        assert_eq!(use_case.editor.inserted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn guard_released_after_success() {
        let use_case = RecordNoteUseCase::new(
            MockRecorder::ok(),
            MockWriter::default(),
            MockEditor::default(),
            MockDialog::yes(),
        );

        use_case
            .execute(RecordNoteInput::default(), RecordNoteCallbacks::default())
            .await
            .unwrap();
        assert!(!use_case.is_recording());

        // A second recording is accepted once the first has finished
        let outcome = use_case
            .execute(RecordNoteInput::default(), RecordNoteCallbacks::default())
            .await
            .unwrap();
        assert!(matches!(outcome, RecordOutcome::Recorded(_)));
    }
}
