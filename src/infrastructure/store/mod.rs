//! Note persistence adapters

pub mod wav_store;

pub use wav_store::WavNoteStore;
