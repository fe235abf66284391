//! Dialog adapters

pub mod console;

pub use console::ConsoleDialog;
