use crate::models::{CredibilityAnalysis, Transcript};

use super::frequency::counts_in_order;
use super::keywords::{DECEPTION_ASSERTIONS, HEDGING_PHRASES, presence_count};

/// A word repeated more often than this contributes to the repetition penalty
const REPETITION_PENALTY_THRESHOLD: usize = 5;

/// Score credibility from over-assertion, hedging and word repetition.
///
/// `credibility_rating = max(0, 100 - (assertions*5 + hedging*3 + repeated*2))`
/// with the weights fixed by the scoring contract.
pub fn analyze_deception_indicators(transcript: &Transcript) -> CredibilityAnalysis {
    let text = transcript.combined_text();

    let deception = presence_count(&text, DECEPTION_ASSERTIONS);
    let hedging = presence_count(&text, HEDGING_PHRASES);
    let repetition = counts_in_order(text.split_whitespace())
        .iter()
        .filter(|(_, count)| *count > REPETITION_PENALTY_THRESHOLD)
        .count();

    let penalty = (deception * 5 + hedging * 3 + repetition * 2) as i64;

    CredibilityAnalysis {
        deception_indicators: deception,
        hesitation_patterns: hedging,
        repetition_score: repetition,
        credibility_rating: (100 - penalty).max(0),
        analysis_notes: credibility_notes(deception, hedging, repetition),
    }
}

fn credibility_notes(deception: usize, hedging: usize, repetition: usize) -> Vec<String> {
    let mut notes = Vec::new();

    if deception > 3 {
        notes.push("استخدام مفرط لكلمات التأكيد قد يشير إلى محاولة إقناع".to_string());
    }
    if hedging > 5 {
        notes.push("وجود تردد واضح في الكلام".to_string());
    }
    if repetition > 3 {
        notes.push("تكرار مفرط لبعض الكلمات قد يدل على توتر".to_string());
    }

    if notes.is_empty() {
        notes.push("أنماط كلام طبيعية دون مؤشرات واضحة على الخداع".to_string());
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TranscriptSegment;

    fn transcript(text: &str) -> Transcript {
        Transcript::new(vec![TranscriptSegment {
            start: 0.0,
            end: 10.0,
            text: text.to_string(),
        }])
        .unwrap()
    }

    #[test]
    fn test_rating_formula() {
        // two assertions ("صدقني", "والله"), one hedging phrase ("يعني"),
        // no excessive repetition: 100 - (2*5 + 1*3) = 87
        let t = transcript("صدقني والله يعني هذا ما حدث");
        let analysis = analyze_deception_indicators(&t);
        assert_eq!(analysis.deception_indicators, 2);
        assert_eq!(analysis.hesitation_patterns, 1);
        assert_eq!(analysis.repetition_score, 0);
        assert_eq!(analysis.credibility_rating, 87);
    }

    #[test]
    fn test_rating_floor_is_zero() {
        // every assertion and hedge present (penalty 77) plus twelve words
        // repeated past the threshold (penalty 24) pushes the total past 100
        let mut text = format!(
            "{} {}",
            DECEPTION_ASSERTIONS.join(" "),
            HEDGING_PHRASES.join(" ")
        );
        for i in 0..12 {
            for _ in 0..6 {
                text.push_str(&format!(" مكررة{i}"));
            }
        }
        let analysis = analyze_deception_indicators(&transcript(&text));
        assert_eq!(analysis.repetition_score, 12);
        assert_eq!(analysis.credibility_rating, 0);
    }

    #[test]
    fn test_repetition_score_counts_words_over_threshold() {
        let t = transcript("نفس نفس نفس نفس نفس نفس كلام آخر");
        let analysis = analyze_deception_indicators(&t);
        assert_eq!(analysis.repetition_score, 1);
        // 100 - 1*2 = 98
        assert_eq!(analysis.credibility_rating, 98);
    }

    #[test]
    fn test_default_note_when_no_indicators() {
        let t = transcript("حديث هادئ دون أي شيء ملحوظ");
        let analysis = analyze_deception_indicators(&t);
        assert_eq!(
            analysis.analysis_notes,
            vec!["أنماط كلام طبيعية دون مؤشرات واضحة على الخداع".to_string()]
        );
    }

    #[test]
    fn test_notes_for_heavy_assertion_use() {
        let t = transcript("صدقني والله أقسم بصراحة في الواقع هذا صحيح");
        let analysis = analyze_deception_indicators(&t);
        assert!(analysis.deception_indicators > 3);
        assert_eq!(
            analysis.analysis_notes[0],
            "استخدام مفرط لكلمات التأكيد قد يشير إلى محاولة إقناع"
        );
    }
}
