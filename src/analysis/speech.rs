use crate::models::Transcript;

use super::rules::{Rule, first_match};

/// Words per second over the whole transcript.
///
/// Duration is the sum of per-segment spans; a transcript whose summed
/// duration is not positive gets a rate of 0.0 rather than a division error.
pub fn overall_speech_rate(transcript: &Transcript) -> f64 {
    let total_duration = transcript.total_duration();
    if total_duration > 0.0 {
        transcript.total_words() as f64 / total_duration
    } else {
        0.0
    }
}

/// Categorical speech-pattern label: accelerated above 2.5 wps, slow below 1.5
pub fn pattern_type(rate: f64) -> &'static str {
    if rate > 2.5 {
        "متسارع"
    } else if rate < 1.5 {
        "بطيء"
    } else {
        "طبيعي"
    }
}

const PATTERN_MEANING: &[Rule<f64>] = &[
    (|r| r > 3.0, "سرعة عالية جداً - قد تشير إلى توتر أو حماس شديد"),
    (|r| r > 2.5, "سرعة عالية - يدل على نشاط ذهني وثقة بالنفس"),
    (|r| r > 2.0, "سرعة طبيعية مرتفعة - شخصية نشطة ومتفاعلة"),
    (|r| r > 1.5, "سرعة طبيعية - توازن جيد في التواصل"),
    (|r| r > 1.0, "سرعة منخفضة - قد يشير إلى التأني والتفكير العميق"),
];

/// Psychological reading of the speech rate, six fixed bands evaluated top-down
pub fn pattern_meaning(rate: f64) -> &'static str {
    first_match(PATTERN_MEANING, rate, "سرعة منخفضة جداً - قد يشير إلى تردد أو قلق")
}
