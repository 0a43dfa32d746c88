use crate::models::ResponseQuality;

use super::keywords::{
    ANALYTIC_MARKERS, COHESION_MARKERS, DEPTH_KEYWORDS, DOMAIN_MARKERS, PRECISION_MARKERS,
    SPECIFICITY_KEYWORDS, found_in,
};
use super::round2;

/// Additive depth/specificity scoring of the combined answer text.
///
/// Each increment is a fixed constant from the scoring contract; the sum is
/// capped at 1.0 before the level ladder is applied.
pub fn evaluate_response_quality(text: &str) -> ResponseQuality {
    let mut score: f64 = 0.0;

    let depth_found = found_in(text, DEPTH_KEYWORDS);
    if !depth_found.is_empty() {
        score += 0.5;
    }

    let specificity_found = found_in(text, SPECIFICITY_KEYWORDS);
    if !specificity_found.is_empty() {
        score += 0.5;
    }

    if text.contains("مثال") || text.contains("مثل") {
        score += 0.15;
    }
    if text.split('.').count() > 4 {
        score += 0.15;
    }
    if ANALYTIC_MARKERS.iter().any(|w| text.contains(w)) {
        score += 0.2;
    }
    if DOMAIN_MARKERS.iter().any(|w| text.contains(w)) {
        score += 0.15;
    }
    if PRECISION_MARKERS.iter().any(|w| text.contains(w)) {
        score += 0.15;
    }
    if COHESION_MARKERS.iter().any(|w| text.contains(w)) {
        score += 0.2;
    }

    let final_score = round2(score.min(1.0));

    ResponseQuality {
        score: final_score,
        level: quality_level(final_score).to_string(),
        depth_indicators: depth_found.iter().map(|s| s.to_string()).collect(),
        specificity_indicators: specificity_found.iter().map(|s| s.to_string()).collect(),
    }
}

fn quality_level(score: f64) -> &'static str {
    if score >= 0.8 {
        "ممتاز"
    } else if score >= 0.6 {
        "جيد جداً"
    } else if score >= 0.4 {
        "جيد"
    } else {
        "يحتاج تحسين"
    }
}
