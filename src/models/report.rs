use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The full analysis result for one processed recording.
///
/// Built once per request by [`crate::analysis::analyze`] and never mutated
/// afterwards; the HTTP layer stores it in the result store and serves it
/// back verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub sentiment: SentimentBreakdown,
    pub total_words: usize,
    pub frequent_words: Vec<(String, usize)>,
    pub speech_rate_wps: f64,
    pub sensitive_words: Vec<SensitiveAlert>,
    pub translation: Vec<SegmentTranslation>,
    pub psychological_analysis: PsychologicalProfile,
    pub deception_analysis: CredibilityAnalysis,
    pub personality_traits: PersonalityProfile,
    pub word_repetition_analysis: RepetitionAnalysis,
    pub response_quality: ResponseQuality,
    pub hesitation_patterns: HesitationAnalysis,
    pub soft_skills: SoftSkillsAnalysis,
    pub engagement_level: EngagementAnalysis,
    pub comprehensive_report: ComprehensiveReport,
    pub generated_at: DateTime<Utc>,
}

/// Sentiment bucket percentages, formatted as "NN.NN%" strings
#[derive(Debug, Clone, Serialize)]
pub struct SentimentBreakdown {
    pub positive: String,
    pub neutral: String,
    pub negative: String,
}

impl SentimentBreakdown {
    /// Positive percentage as a number (0 when unparseable)
    pub fn positive_pct(&self) -> f64 {
        parse_pct(&self.positive)
    }

    /// Negative percentage as a number (0 when unparseable)
    pub fn negative_pct(&self) -> f64 {
        parse_pct(&self.negative)
    }
}

fn parse_pct(label: &str) -> f64 {
    label.trim_end_matches('%').parse().unwrap_or(0.0)
}

/// A sensitive-lexicon hit inside one segment
#[derive(Debug, Clone, Serialize)]
pub struct SensitiveAlert {
    pub start: f64,
    pub end: f64,
    pub word: String,
    pub text: String,
}

/// One segment with its English translation
#[derive(Debug, Clone, Serialize)]
pub struct SegmentTranslation {
    pub start: f64,
    pub end: f64,
    pub arabic_text: String,
    pub english_text: String,
}

/// Confidence/stress scores plus the speech-pattern classification
#[derive(Debug, Clone, Serialize)]
pub struct PsychologicalProfile {
    /// 0-100, confidence keywords against uncertainty keywords
    pub confidence_level: f64,
    /// Raw count of stress keywords found
    pub stress_indicators: usize,
    /// 0-100, degraded by stress keyword count
    pub emotional_stability: f64,
    /// 0-100, words-per-segment proxy
    pub communication_clarity: f64,
    pub speech_pattern: SpeechPattern,
}

/// Words-per-second rate with its categorical reading
#[derive(Debug, Clone, Serialize)]
pub struct SpeechPattern {
    pub rate: f64,
    pub pattern_type: String,
    pub psychological_meaning: String,
}

/// Deception-assertion and hedging counts with the derived credibility score
#[derive(Debug, Clone, Serialize)]
pub struct CredibilityAnalysis {
    pub deception_indicators: usize,
    pub hesitation_patterns: usize,
    pub repetition_score: usize,
    /// 0-100
    pub credibility_rating: i64,
    pub analysis_notes: Vec<String>,
}

/// Big-five trait percentages with the dominant trait called out
#[derive(Debug, Clone, Serialize)]
pub struct PersonalityProfile {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
    /// (trait name, percentage) of the highest-scoring trait
    pub dominant_trait: (String, f64),
    pub personality_summary: String,
}

/// Word-repetition distribution and its tiered interpretation
#[derive(Debug, Clone, Serialize)]
pub struct RepetitionAnalysis {
    /// Percentage of duplicate word occurrences, two decimals
    pub repetition_ratio: f64,
    pub total_words: usize,
    pub unique_words: usize,
    pub most_repeated_words: Vec<(String, usize)>,
    pub excessive_repetition: Vec<String>,
    pub psychological_analysis: Vec<String>,
    pub repetition_level: String,
}

/// Depth/specificity scoring of the combined answer text
#[derive(Debug, Clone, Serialize)]
pub struct ResponseQuality {
    /// 0-1, two decimals
    pub score: f64,
    pub level: String,
    pub depth_indicators: Vec<String>,
    pub specificity_indicators: Vec<String>,
}

/// Filler-word and hesitation-marker counts with the fluency reading
#[derive(Debug, Clone, Serialize)]
pub struct HesitationAnalysis {
    pub filler_words: BTreeMap<String, usize>,
    pub hesitation_patterns: BTreeMap<String, usize>,
    /// Fillers per hundred words, two decimals
    pub filler_ratio: f64,
    /// Hesitation markers per hundred words, two decimals
    pub hesitation_ratio: f64,
    pub fluency_level: String,
    pub total_fillers: usize,
    pub total_hesitations: usize,
}

/// Detected soft-skill categories with per-category strength
#[derive(Debug, Clone, Serialize)]
pub struct SoftSkillsAnalysis {
    pub detected_skills: BTreeMap<String, Vec<String>>,
    /// Fraction of the category keyword table that was found, per category
    pub skill_scores: BTreeMap<String, f64>,
    pub skills_count: usize,
}

/// Engagement tier counts and the derived level
#[derive(Debug, Clone, Serialize)]
pub struct EngagementAnalysis {
    pub engagement_level: String,
    /// 0-1, two decimals
    pub engagement_score: f64,
    pub high_engagement_count: usize,
    pub medium_engagement_count: usize,
    pub low_engagement_count: usize,
    pub engagement_indicators: EngagementIndicators,
}

/// The keyword hits backing each engagement tier count
#[derive(Debug, Clone, Serialize)]
pub struct EngagementIndicators {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

/// Narrative report assembled from the numeric passes by threshold ladders
#[derive(Debug, Clone, Serialize)]
pub struct ComprehensiveReport {
    pub executive_summary: String,
    pub speech_pattern_analysis: SpeechPatternSection,
    pub repetition_analysis: RepetitionSection,
    pub emotional_stability: EmotionalStabilitySection,
    pub psychological_profile: ProfileSection,
    pub forensic_analysis: ForensicSection,
    pub final_recommendations: RecommendationsSection,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeechPatternSection {
    pub rate_analysis: String,
    pub consistency_rating: String,
    pub psychological_indicators: Vec<String>,
    pub forensic_assessment: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepetitionSection {
    pub overview: String,
    pub psychological_meaning: Vec<String>,
    pub excessive_words: Vec<String>,
    pub interpretation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmotionalStabilitySection {
    pub overall_rating: String,
    pub risk_assessment: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSection {
    pub communication_style: String,
    pub dominant_traits: Vec<String>,
    pub behavioral_indicators: Vec<String>,
    pub personality_assessment: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForensicSection {
    pub credibility_assessment: String,
    pub deception_indicators: String,
    pub interview_suitability: String,
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsSection {
    pub psychological_development: Vec<String>,
    pub communication_improvement: Vec<String>,
    pub professional_suitability: String,
    pub follow_up_suggestions: Vec<String>,
}
