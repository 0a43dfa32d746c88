use crate::models::{EngagementAnalysis, EngagementIndicators};

use super::keywords::{HIGH_ENGAGEMENT, LOW_ENGAGEMENT, MEDIUM_ENGAGEMENT, found_in};
use super::round2;

/// Classify engagement from tiered keyword presence over the lowercased text.
///
/// Any high-tier hit wins regardless of the other tiers; the score formula
/// constants (0.8/0.5/0.2 bases, 0.05 per hit, cap at 1.0) are fixed.
pub fn measure_engagement_level(text: &str) -> EngagementAnalysis {
    let lowered = text.to_lowercase();

    let high = found_in(&lowered, HIGH_ENGAGEMENT);
    let medium = found_in(&lowered, MEDIUM_ENGAGEMENT);
    let low = found_in(&lowered, LOW_ENGAGEMENT);

    let (level, raw_score) = if !high.is_empty() {
        ("مشاركة عالية", 0.8 + high.len() as f64 * 0.05)
    } else if !medium.is_empty() {
        ("مشاركة متوسطة", 0.5 + medium.len() as f64 * 0.05)
    } else {
        ("مشاركة منخفضة", 0.2)
    };

    EngagementAnalysis {
        engagement_level: level.to_string(),
        engagement_score: round2(raw_score).min(1.0),
        high_engagement_count: high.len(),
        medium_engagement_count: medium.len(),
        low_engagement_count: low.len(),
        engagement_indicators: EngagementIndicators {
            high: high.iter().map(|s| s.to_string()).collect(),
            medium: medium.iter().map(|s| s.to_string()).collect(),
            low: low.iter().map(|s| s.to_string()).collect(),
        },
    }
}
