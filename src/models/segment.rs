use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// A timestamped span of transcribed speech
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Start offset in seconds
    pub start: f64,
    /// End offset in seconds
    pub end: f64,
    /// Transcribed text for this span
    pub text: String,
}

impl TranscriptSegment {
    /// Duration of this segment in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Number of whitespace-separated words in this segment
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// An ordered sequence of transcript segments, immutable once built
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    /// Segments in chronological order
    pub segments: Vec<TranscriptSegment>,
}

impl Transcript {
    /// Build a transcript from segments, rejecting malformed timestamps.
    ///
    /// Segments with non-finite or negative timestamps, or with `end`
    /// before `start`, are an input-validation failure and are never
    /// silently coerced.
    pub fn new(segments: Vec<TranscriptSegment>) -> Result<Self> {
        for (index, segment) in segments.iter().enumerate() {
            if !segment.start.is_finite() || !segment.end.is_finite() {
                bail!("segment {index} has a non-finite timestamp");
            }
            if segment.start < 0.0 || segment.end < segment.start {
                bail!(
                    "segment {index} has an invalid time range: {}..{}",
                    segment.start,
                    segment.end
                );
            }
        }
        Ok(Self { segments })
    }

    /// All segment texts joined with single spaces
    pub fn combined_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Total word count across all segments
    pub fn total_words(&self) -> usize {
        self.segments.iter().map(|s| s.word_count()).sum()
    }

    /// Sum of segment durations in seconds
    pub fn total_duration(&self) -> f64 {
        self.segments.iter().map(|s| s.duration()).sum()
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the transcript has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
