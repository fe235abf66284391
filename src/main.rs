//! Voice Comments CLI entry point

use std::env;
use std::process::ExitCode;

use clap::Parser;

use voice_comments::cli::{
    app::{load_merged_config, run_config, run_play, run_record, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    presenter::Presenter,
    PlayOptions, RecordOptions,
};
use voice_comments::domain::config::AppConfig;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    match cli.command {
        Commands::Config { action } => run_config(action).await,

        Commands::Record {
            file,
            line,
            project_root,
            duration,
            sample_rate,
            yes,
        } => {
            let cli_config = AppConfig {
                duration,
                sample_rate,
                notes_dir: None,
                assume_yes: if yes { Some(true) } else { None },
            };
            let config = load_merged_config(cli_config).await;

            // A malformed duration on the command line is a usage error,
            // not something to silently fall back from
            let parsed_duration = match config.duration.as_ref() {
                Some(s) => match s.parse() {
                    Ok(d) => d,
                    Err(e) => {
                        presenter.error(&format!("Invalid duration: {}", e));
                        return ExitCode::from(EXIT_USAGE_ERROR);
                    }
                },
                None => Default::default(),
            };

            let project_root = match resolve_project_root(project_root) {
                Ok(root) => root,
                Err(message) => {
                    presenter.error(&message);
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };

            let options = RecordOptions {
                file,
                line,
                project_root,
                duration: parsed_duration,
                format: config.recording_format(),
                notes_dir: config.notes_dir_or_default(),
                assume_yes: config.assume_yes_or_default(),
            };

            run_record(options).await
        }

        Commands::Play {
            file,
            line,
            project_root,
        } => {
            let project_root = match resolve_project_root(project_root) {
                Ok(root) => root,
                Err(message) => {
                    presenter.error(&message);
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };

            let options = PlayOptions {
                file,
                line,
                project_root,
            };

            run_play(options).await
        }
    }
}

fn resolve_project_root(
    explicit: Option<std::path::PathBuf>,
) -> Result<std::path::PathBuf, String> {
    match explicit {
        Some(root) => Ok(root),
        None => env::current_dir().map_err(|e| format!("Cannot determine project root: {}", e)),
    }
}
