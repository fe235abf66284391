//! Voice note entities and the in-source marker format

pub mod marker;
pub mod voice_note;

pub use marker::Marker;
pub use voice_note::VoiceNote;
