use anyhow::Result;
use serde::Deserialize;

use super::{Transcript, TranscriptSegment};

/// Subset of the Whisper `verbose_json` transcription response we consume
#[derive(Debug, Clone, Deserialize)]
pub struct WhisperResponse {
    /// Full transcript text
    #[serde(default)]
    pub text: String,
    /// Timestamped segments
    #[serde(default)]
    pub segments: Vec<WhisperSegment>,
    /// Detected or requested language code
    #[serde(default)]
    pub language: Option<String>,
    /// Total audio duration in seconds
    #[serde(default)]
    pub duration: Option<f64>,
}

/// A single timestamped segment from the transcription provider
#[derive(Debug, Clone, Deserialize)]
pub struct WhisperSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl WhisperResponse {
    /// Convert the provider response into a validated transcript
    pub fn into_transcript(self) -> Result<Transcript> {
        let segments = self
            .segments
            .into_iter()
            .map(|s| TranscriptSegment {
                start: s.start,
                end: s.end,
                text: s.text,
            })
            .collect();
        Transcript::new(segments)
    }
}
