use crate::models::{PsychologicalProfile, SpeechPattern, Transcript};

use super::keywords::{
    CONFIDENCE_INDICATORS, STRESS_INDICATORS, UNCERTAINTY_INDICATORS, presence_count,
};
use super::speech::{overall_speech_rate, pattern_meaning, pattern_type};

/// Score confidence, stress and clarity from keyword presence counts.
///
/// The formula constants (×20, ×10, ×5 and the clamps) are part of the
/// published scoring contract and are reproduced as-is.
pub fn analyze_psychological_patterns(transcript: &Transcript) -> PsychologicalProfile {
    let text = transcript.combined_text();
    let total_words = text.split_whitespace().count();

    let confidence = presence_count(&text, CONFIDENCE_INDICATORS);
    let uncertainty = presence_count(&text, UNCERTAINTY_INDICATORS);
    let stress = presence_count(&text, STRESS_INDICATORS);

    let rate = overall_speech_rate(transcript);
    let segment_count = transcript.len();

    PsychologicalProfile {
        confidence_level: (confidence as f64 / uncertainty.max(1) as f64 * 20.0).min(100.0),
        stress_indicators: stress,
        emotional_stability: (100.0 - stress as f64 * 10.0).max(0.0),
        communication_clarity: if segment_count > 0 {
            (total_words as f64 / segment_count as f64 * 5.0).min(100.0)
        } else {
            0.0
        },
        speech_pattern: SpeechPattern {
            rate,
            pattern_type: pattern_type(rate).to_string(),
            psychological_meaning: pattern_meaning(rate).to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TranscriptSegment;

    fn transcript(entries: &[(f64, f64, &str)]) -> Transcript {
        Transcript::new(
            entries
                .iter()
                .map(|(start, end, text)| TranscriptSegment {
                    start: *start,
                    end: *end,
                    text: text.to_string(),
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_confidence_level_worked_example() {
        // two confidence hits ("متأكد", "أعتقد"), zero uncertainty hits:
        // 2 / max(1, 0) * 20 = 40
        let t = transcript(&[(0.0, 2.0, "أنا متأكد جدا وأعتقد ذلك")]);
        let profile = analyze_psychological_patterns(&t);
        assert_eq!(profile.confidence_level, 40.0);
    }

    #[test]
    fn test_confidence_level_clamped_to_hundred() {
        let t = transcript(&[(
            0.0,
            2.0,
            "أعتقد أؤكد متأكد بالتأكيد بثقة أعرف مقتنع",
        )]);
        let profile = analyze_psychological_patterns(&t);
        assert_eq!(profile.confidence_level, 100.0);
    }

    #[test]
    fn test_stress_degrades_emotional_stability() {
        let t = transcript(&[(0.0, 3.0, "عندي توتر وقلق وخوف من هذا الضغط")]);
        let profile = analyze_psychological_patterns(&t);
        assert_eq!(profile.stress_indicators, 4);
        assert_eq!(profile.emotional_stability, 60.0);
    }

    #[test]
    fn test_emotional_stability_with_every_stress_word() {
        // presence counting caps the stress count at the table size (8),
        // so the stability floor in practice is 100 - 80
        let t = transcript(&[(
            0.0,
            5.0,
            "توتر قلق خوف ضغط مشكلة صعب مؤلم أزمة وكل شيء توتر",
        )]);
        let profile = analyze_psychological_patterns(&t);
        assert_eq!(profile.stress_indicators, 8);
        assert_eq!(profile.emotional_stability, 20.0);
    }

    #[test]
    fn test_empty_transcript_clarity_is_zero() {
        let t = transcript(&[]);
        let profile = analyze_psychological_patterns(&t);
        assert_eq!(profile.communication_clarity, 0.0);
        assert_eq!(profile.speech_pattern.rate, 0.0);
    }

    #[test]
    fn test_communication_clarity_formula() {
        // 6 words over 2 segments: 6 / 2 * 5 = 15
        let t = transcript(&[
            (0.0, 2.0, "كلمة ثانية ثالثة"),
            (2.0, 4.0, "رابعة خامسة سادسة"),
        ]);
        let profile = analyze_psychological_patterns(&t);
        assert_eq!(profile.communication_clarity, 15.0);
    }
}
