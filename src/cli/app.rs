//! Main app runner for the record and play actions

use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use crate::application::ports::ConfigStore;
use crate::application::{
    PlayNoteUseCase, RecordNoteCallbacks, RecordNoteInput, RecordNoteUseCase, RecordOutcome,
};
use crate::domain::config::AppConfig;
use crate::infrastructure::{
    ConsoleDialog, CpalRecorder, FileEditorHost, RodioPlayer, WavNoteStore, XdgConfigStore,
};

use super::args::{PlayOptions, RecordOptions};
use super::lock_file::RecordLock;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Load the config file and merge CLI-provided values over it
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());
    file_config.merge(cli_config)
}

/// Run the record action
pub async fn run_record(options: RecordOptions) -> ExitCode {
    let presenter = Arc::new(Mutex::new(Presenter::new()));

    // Each invocation is its own process, so the in-process guard alone
    // cannot reject a second `record` started from another terminal
    let mut lock = RecordLock::new();
    if let Err(e) = lock.acquire() {
        let p = presenter.lock().unwrap();
        p.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    let recorder = CpalRecorder::new();
    let writer = WavNoteStore::with_dir(options.notes_dir.clone());
    let editor = FileEditorHost::new(
        options.project_root.clone(),
        options.file.clone(),
        options.line,
    );
    let dialog = if options.assume_yes {
        ConsoleDialog::assume_yes()
    } else {
        ConsoleDialog::new()
    };

    let use_case = RecordNoteUseCase::new(recorder, writer, editor, dialog);

    let input = RecordNoteInput {
        duration: options.duration,
        format: options.format,
    };

    let spinner_presenter = Arc::clone(&presenter);
    let progress_presenter = Arc::clone(&presenter);
    let end_presenter = Arc::clone(&presenter);
    let callbacks = RecordNoteCallbacks {
        on_recording_start: Some(Box::new(move || {
            if let Ok(mut p) = spinner_presenter.lock() {
                p.start_spinner("Recording...");
            }
        })),
        on_progress: Some(Arc::new(move |elapsed, total| {
            if let Ok(p) = progress_presenter.lock() {
                p.update_recording_progress(elapsed, total);
            }
        })),
        on_recording_end: Some(Box::new(move |size| {
            if let Ok(p) = end_presenter.lock() {
                p.update_spinner(&format!("Captured {}, saving...", size));
            }
        })),
    };

    match use_case.execute(input, callbacks).await {
        Ok(RecordOutcome::Recorded(note)) => {
            let mut p = presenter.lock().unwrap();
            p.spinner_success("Recording complete");
            p.success(&format!("Marker inserted: {}", note.marker().to_line()));
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(RecordOutcome::Declined) => {
            let p = presenter.lock().unwrap();
            p.info("Recording cancelled");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            let mut p = presenter.lock().unwrap();
            p.spinner_fail("Recording failed");
            p.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the play action
pub async fn run_play(options: PlayOptions) -> ExitCode {
    let presenter = Presenter::new();

    let editor = FileEditorHost::new(
        options.project_root.clone(),
        options.file.clone(),
        options.line,
    );
    let player = RodioPlayer::new();
    let dialog = ConsoleDialog::new();

    let use_case = PlayNoteUseCase::new(editor, player, dialog);

    match use_case.execute().await {
        Ok(_output) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Handle the config subcommand against the default store
pub async fn run_config(action: super::args::ConfigAction) -> ExitCode {
    let presenter = Presenter::new();
    let store = XdgConfigStore::new();

    match super::config_cmd::handle_config_command(action, &store, &presenter).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
