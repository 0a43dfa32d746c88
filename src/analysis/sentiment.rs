use tracing::warn;

use crate::models::{SentimentBreakdown, Transcript};
use crate::translate::{Translator, polarity};

/// Polarity above which a segment counts as positive
const POSITIVE_THRESHOLD: f64 = 0.1;
/// Polarity below which a segment counts as negative
const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Bucket every segment into positive/neutral/negative by translated polarity.
///
/// Each segment is translated independently; a failed translation counts the
/// segment as neutral and never aborts the pass or affects other segments.
pub async fn analyze_sentiment(
    transcript: &Transcript,
    translator: &dyn Translator,
) -> SentimentBreakdown {
    let mut positive = 0usize;
    let mut neutral = 0usize;
    let mut negative = 0usize;

    for segment in &transcript.segments {
        match translator.translate(&segment.text).await {
            Ok(english) => {
                let score = polarity(&english);
                if score > POSITIVE_THRESHOLD {
                    positive += 1;
                } else if score < NEGATIVE_THRESHOLD {
                    negative += 1;
                } else {
                    neutral += 1;
                }
            }
            Err(error) => {
                warn!(%error, "segment translation failed, counting as neutral");
                neutral += 1;
            }
        }
    }

    let total = transcript.len();
    SentimentBreakdown {
        positive: percent_label(positive, total),
        neutral: percent_label(neutral, total),
        negative: percent_label(negative, total),
    }
}

/// "NN.NN%" share of `count` in `total`; "0.00%" for an empty transcript
fn percent_label(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", count as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TranscriptSegment;
    use crate::translate::testing::StubTranslator;

    fn transcript(texts: &[&str]) -> Transcript {
        Transcript::new(
            texts
                .iter()
                .enumerate()
                .map(|(i, text)| TranscriptSegment {
                    start: i as f64,
                    end: i as f64 + 1.0,
                    text: text.to_string(),
                })
                .collect(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_buckets_by_polarity() {
        let translator = StubTranslator::with_translations(&[
            ("سعيد", "I am very happy and confident"),
            ("حزين", "this is a sad terrible failure"),
            ("عادي", "the meeting is on tuesday"),
        ]);
        let t = transcript(&["سعيد", "حزين", "عادي"]);

        let breakdown = analyze_sentiment(&t, &translator).await;
        assert_eq!(breakdown.positive, "33.33%");
        assert_eq!(breakdown.negative, "33.33%");
        assert_eq!(breakdown.neutral, "33.33%");
    }

    #[tokio::test]
    async fn test_percentages_sum_to_hundred() {
        let translator = StubTranslator::with_translations(&[
            ("أ", "great success"),
            ("ب", "great success"),
            ("ج", "bad problem"),
        ]);
        let t = transcript(&["أ", "ب", "ج"]);

        let breakdown = analyze_sentiment(&t, &translator).await;
        let sum = breakdown.positive_pct()
            + breakdown.negative_pct()
            + breakdown.neutral.trim_end_matches('%').parse::<f64>().unwrap();
        assert!((sum - 100.0).abs() < 0.05);
    }

    #[tokio::test]
    async fn test_translation_failure_counts_neutral() {
        let translator = StubTranslator::failing();
        let t = transcript(&["سعيد", "حزين"]);

        let breakdown = analyze_sentiment(&t, &translator).await;
        assert_eq!(breakdown.neutral, "100.00%");
        assert_eq!(breakdown.positive, "0.00%");
        assert_eq!(breakdown.negative, "0.00%");
    }

    #[tokio::test]
    async fn test_empty_transcript_yields_zero_labels() {
        let translator = StubTranslator::failing();
        let t = transcript(&[]);

        let breakdown = analyze_sentiment(&t, &translator).await;
        assert_eq!(breakdown.positive, "0.00%");
        assert_eq!(breakdown.neutral, "0.00%");
        assert_eq!(breakdown.negative, "0.00%");
    }
}
