use crate::models::{RepetitionAnalysis, Transcript};

use super::frequency::{counts_in_order, most_common};
use super::round2;

/// Occurrence count above which a word counts as excessively repeated
const EXCESSIVE_COUNT: usize = 5;
/// Minimum character length for a word to qualify as excessive
const EXCESSIVE_MIN_CHARS: usize = 2;

/// Word-repetition distribution over the whitespace-tokenized transcript.
///
/// `repetition_ratio = (total - unique) / total`, reported as a percentage;
/// an empty transcript gets 0 rather than a division error.
pub fn analyze_word_repetition(transcript: &Transcript) -> RepetitionAnalysis {
    let text = transcript.combined_text();
    let counts = counts_in_order(text.split_whitespace());

    let total: usize = counts.iter().map(|(_, c)| c).sum();
    let unique = counts.len();
    let ratio = if total > 0 {
        (total - unique) as f64 / total as f64
    } else {
        0.0
    };

    let excessive: Vec<String> = counts
        .iter()
        .filter(|(word, count)| *count > EXCESSIVE_COUNT && word.chars().count() > EXCESSIVE_MIN_CHARS)
        .map(|(word, _)| word.to_string())
        .collect();

    RepetitionAnalysis {
        repetition_ratio: round2(ratio * 100.0),
        total_words: total,
        unique_words: unique,
        most_repeated_words: most_common(&counts, 10),
        psychological_analysis: repetition_meaning(ratio, &excessive),
        repetition_level: repetition_level(ratio).to_string(),
        excessive_repetition: excessive,
    }
}

/// Level tiers over the raw ratio, evaluated top-down
fn repetition_level(ratio: f64) -> &'static str {
    if ratio > 0.4 {
        "عالي"
    } else if ratio > 0.25 {
        "متوسط"
    } else if ratio > 0.15 {
        "طبيعي"
    } else {
        "منخفض"
    }
}

fn repetition_meaning(ratio: f64, excessive: &[String]) -> Vec<String> {
    let mut meanings: Vec<String> = if ratio > 0.4 {
        vec![
            "تكرار عالي قد يشير إلى:".to_string(),
            "• توتر أو قلق شديد".to_string(),
            "• محاولة التأكيد على نقطة معينة".to_string(),
            "• نقص في المفردات أو صعوبة في التعبير".to_string(),
        ]
    } else if ratio > 0.25 {
        vec![
            "تكرار متوسط قد يدل على:".to_string(),
            "• رغبة في الوضوح والتأكيد".to_string(),
            "• تفكير منظم ومتسلسل".to_string(),
            "• حرص على إيصال المعنى بدقة".to_string(),
        ]
    } else {
        vec![
            "تكرار منخفض يشير إلى:".to_string(),
            "• ثراء في المفردات".to_string(),
            "• ثقة في التعبير".to_string(),
            "• تنوع في أساليب الكلام".to_string(),
        ]
    };

    if excessive.len() > 3 {
        meanings.push("\nكلمات مكررة بإفراط:".to_string());
        for word in excessive.iter().take(5) {
            meanings.push(format!("• '{word}' - قد يشير إلى تركيز مفرط على موضوع معين"));
        }
    }

    meanings
}
