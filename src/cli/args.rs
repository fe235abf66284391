//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::recording::{Duration, RecordingFormat};

/// Voice Comments - attach voice recordings as inline comments
#[derive(Parser, Debug)]
#[command(name = "voice-comments")]
#[command(version)]
#[command(about = "Attach voice recordings as inline comments in source files and play them back")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a voice note and insert its marker at the cursor line
    Record {
        /// Source file to annotate
        file: PathBuf,

        /// Cursor line (1-based) the marker is inserted at
        #[arg(short, long, value_name = "LINE")]
        line: usize,

        /// Project root the note path is stored relative to (defaults to
        /// the current directory)
        #[arg(short = 'r', long, value_name = "DIR")]
        project_root: Option<PathBuf>,

        /// Recording duration (e.g., 10s, 1m, 2m30s)
        #[arg(short, long, value_name = "TIME")]
        duration: Option<String>,

        /// Recording sample rate in Hz
        #[arg(long, value_name = "HZ")]
        sample_rate: Option<u32>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Play the voice note referenced by the marker on the cursor line
    Play {
        /// Annotated source file
        file: PathBuf,

        /// Cursor line (1-based) holding the marker
        #[arg(short, long, value_name = "LINE")]
        line: usize,

        /// Project root the note path is resolved against (defaults to
        /// the current directory)
        #[arg(short = 'r', long, value_name = "DIR")]
        project_root: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed record options
#[derive(Debug, Clone)]
pub struct RecordOptions {
    pub file: PathBuf,
    pub line: usize,
    pub project_root: PathBuf,
    pub duration: Duration,
    pub format: RecordingFormat,
    pub notes_dir: String,
    pub assume_yes: bool,
}

/// Parsed play options
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub file: PathBuf,
    pub line: usize,
    pub project_root: PathBuf,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["duration", "sample_rate", "notes_dir", "assume_yes"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
