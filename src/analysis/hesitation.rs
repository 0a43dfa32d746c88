use std::collections::BTreeMap;

use crate::models::HesitationAnalysis;

use super::keywords::{FILLER_WORDS, HESITATION_MARKERS};
use super::round2;

/// Count filler words and hesitation markers in the combined text.
///
/// Unlike the presence-based passes, this one counts occurrences: fillers
/// by exact-token match over the punctuation-stripped text, hesitation
/// markers by substring occurrence over the raw lowercased text.
pub fn analyze_hesitation_patterns(text: &str) -> HesitationAnalysis {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    let words: Vec<&str> = cleaned.split_whitespace().collect();

    let mut filler_counts = BTreeMap::new();
    let mut total_fillers = 0usize;
    for filler in FILLER_WORDS {
        let count = words.iter().filter(|w| *w == filler).count();
        if count > 0 {
            filler_counts.insert(filler.to_string(), count);
            total_fillers += count;
        }
    }

    let mut marker_counts = BTreeMap::new();
    let mut total_hesitations = 0usize;
    for marker in HESITATION_MARKERS {
        let count = lowered.matches(marker).count();
        if count > 0 {
            marker_counts.insert(marker.to_string(), count);
            total_hesitations += count;
        }
    }

    let total_words = words.len();
    let filler_ratio = ratio_per_hundred(total_fillers, total_words);
    let hesitation_ratio = ratio_per_hundred(total_hesitations, total_words);

    HesitationAnalysis {
        filler_words: filler_counts,
        hesitation_patterns: marker_counts,
        filler_ratio: round2(filler_ratio),
        hesitation_ratio: round2(hesitation_ratio),
        fluency_level: fluency_level(filler_ratio).to_string(),
        total_fillers,
        total_hesitations,
    }
}

fn ratio_per_hundred(count: usize, total_words: usize) -> f64 {
    if total_words > 0 {
        count as f64 / total_words as f64 * 100.0
    } else {
        0.0
    }
}

/// Fluency tiers over the unrounded filler ratio, evaluated top-down
fn fluency_level(filler_ratio: f64) -> &'static str {
    if filler_ratio > 15.0 {
        "متردد جداً"
    } else if filler_ratio > 8.0 {
        "متردد"
    } else if filler_ratio > 3.0 {
        "متردد قليلاً"
    } else {
        "طلق"
    }
}
