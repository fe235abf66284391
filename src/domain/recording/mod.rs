//! Recording value objects

pub mod duration;
pub mod format;
pub mod pcm;

pub use duration::Duration;
pub use format::RecordingFormat;
pub use pcm::PcmAudio;
