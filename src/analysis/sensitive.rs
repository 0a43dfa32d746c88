use crate::models::{SensitiveAlert, Transcript};

use super::keywords::SENSITIVE_WORDS;

/// Scan every segment against the security lexicon.
///
/// One alert is emitted per (segment, lexicon entry) substring hit, carrying
/// the segment timestamps so the caller can jump to the span.
pub fn detect_sensitive_words(transcript: &Transcript) -> Vec<SensitiveAlert> {
    let mut alerts = Vec::new();

    for segment in &transcript.segments {
        for word in SENSITIVE_WORDS {
            if segment.text.contains(word) {
                alerts.push(SensitiveAlert {
                    start: segment.start,
                    end: segment.end,
                    word: (*word).to_string(),
                    text: segment.text.clone(),
                });
            }
        }
    }

    alerts
}
