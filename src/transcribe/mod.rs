pub mod audio;
pub mod client;

pub use audio::extract_audio;
pub use client::{GroqClient, GroqConfig, MAX_AUDIO_BYTES, TranscribeError};
