//! Command-line interface

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod lock_file;
pub mod presenter;

pub use args::{PlayOptions, RecordOptions};
