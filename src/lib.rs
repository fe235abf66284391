//! Voice Comments - voice recordings as inline source comments
//!
//! This crate records short voice notes from the microphone, stores them as
//! WAV files under a project-local `voicecomments/` directory, references
//! them from source files via `// [Voice Note: <path>]` marker lines, and
//! plays them back from the marker on the cursor line.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (marker, voice note, recording format) and errors
//! - **Application**: The record and play use cases plus port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (cpal, hound, rodio, files, terminal)
//! - **CLI**: Command-line interface and argument parsing

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
