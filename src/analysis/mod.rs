pub mod deception;
pub mod engagement;
pub mod frequency;
pub mod hesitation;
pub mod keywords;
pub mod personality;
pub mod psychological;
pub mod quality;
pub mod repetition;
pub mod report;
pub mod rules;
pub mod sensitive;
pub mod sentiment;
pub mod soft_skills;
pub mod speech;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::models::{AnalysisReport, SegmentTranslation, Transcript};
use crate::translate::Translator;

/// Placeholder used when a segment translation fails
const TRANSLATION_FALLBACK: &str = "[Translation failed] Please check internet connection";

/// Number of frequent/most-repeated words reported
const TOP_WORDS: usize = 10;

/// Run every analysis pass over the transcript and merge the outputs.
///
/// All passes are stateless and consume the same immutable input; only the
/// sentiment and translation passes touch the network, and both tolerate
/// per-segment failures without affecting the rest of the report.
pub async fn analyze(transcript: &Transcript, translator: &dyn Translator) -> AnalysisReport {
    info!(
        segments = transcript.len(),
        words = transcript.total_words(),
        "starting transcript analysis"
    );

    let combined = transcript.combined_text();

    let sentiment = sentiment::analyze_sentiment(transcript, translator).await;
    debug!(positive = %sentiment.positive, negative = %sentiment.negative, "sentiment pass done");

    let translation = translate_segments(transcript, translator).await;

    let speech_rate_wps = speech::overall_speech_rate(transcript);
    let word_repetition_analysis = repetition::analyze_word_repetition(transcript);

    let report = AnalysisReport {
        total_words: frequency::count_total_words(transcript),
        frequent_words: frequency::frequent_words(transcript, TOP_WORDS),
        speech_rate_wps,
        sensitive_words: sensitive::detect_sensitive_words(transcript),
        psychological_analysis: psychological::analyze_psychological_patterns(transcript),
        deception_analysis: deception::analyze_deception_indicators(transcript),
        personality_traits: personality::analyze_personality_traits(transcript),
        response_quality: quality::evaluate_response_quality(&combined),
        hesitation_patterns: hesitation::analyze_hesitation_patterns(&combined),
        soft_skills: soft_skills::detect_soft_skills(&combined),
        engagement_level: engagement::measure_engagement_level(&combined),
        comprehensive_report: report::generate_comprehensive_report(
            &sentiment,
            transcript.total_words(),
            speech_rate_wps,
            &word_repetition_analysis,
        ),
        sentiment,
        translation,
        word_repetition_analysis,
        generated_at: Utc::now(),
    };

    info!(rate = report.speech_rate_wps, "transcript analysis complete");
    report
}

/// Translate every segment, keeping the Arabic original alongside.
///
/// A failed translation yields the fixed placeholder for that segment and
/// never blocks the others.
pub async fn translate_segments(
    transcript: &Transcript,
    translator: &dyn Translator,
) -> Vec<SegmentTranslation> {
    let mut translations = Vec::with_capacity(transcript.len());

    for segment in &transcript.segments {
        let english_text = match translator.translate(&segment.text).await {
            Ok(translated) => translated,
            Err(error) => {
                warn!(%error, start = segment.start, "segment translation failed");
                TRANSLATION_FALLBACK.to_string()
            }
        };
        translations.push(SegmentTranslation {
            start: segment.start,
            end: segment.end,
            arabic_text: segment.text.clone(),
            english_text,
        });
    }

    translations
}

/// Round to one decimal place
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
