use crate::models::{PersonalityProfile, Transcript};

use super::keywords::{
    AGREEABLENESS_WORDS, CONSCIENTIOUSNESS_WORDS, EXTRAVERSION_WORDS, NEUROTICISM_WORDS,
    OPENNESS_WORDS, presence_count,
};
use super::round1;

/// Trait tables in their fixed order; ties in the dominant-trait pick
/// resolve to the earlier entry
const TRAIT_TABLES: &[(&str, &[&str])] = &[
    ("openness", OPENNESS_WORDS),
    ("conscientiousness", CONSCIENTIOUSNESS_WORDS),
    ("extraversion", EXTRAVERSION_WORDS),
    ("agreeableness", AGREEABLENESS_WORDS),
    ("neuroticism", NEUROTICISM_WORDS),
];

/// Big-five keyword scoring: presence counts normalized to percentages
/// over the total number of indicators found
pub fn analyze_personality_traits(transcript: &Transcript) -> PersonalityProfile {
    let text = transcript.combined_text();

    let counts: Vec<usize> = TRAIT_TABLES
        .iter()
        .map(|(_, table)| presence_count(&text, table))
        .collect();
    let denominator = counts.iter().sum::<usize>().max(1);

    let percents: Vec<f64> = counts
        .iter()
        .map(|&count| round1(count as f64 / denominator as f64 * 100.0))
        .collect();

    let mut dominant = (TRAIT_TABLES[0].0, percents[0]);
    for (index, (name, _)) in TRAIT_TABLES.iter().enumerate().skip(1) {
        if percents[index] > dominant.1 {
            dominant = (name, percents[index]);
        }
    }

    PersonalityProfile {
        openness: percents[0],
        conscientiousness: percents[1],
        extraversion: percents[2],
        agreeableness: percents[3],
        neuroticism: percents[4],
        dominant_trait: (dominant.0.to_string(), dominant.1),
        personality_summary: trait_summary(dominant.0).to_string(),
    }
}

fn trait_summary(dominant: &str) -> &'static str {
    match dominant {
        "openness" => "شخصية منفتحة على التجارب الجديدة ومبدعة",
        "conscientiousness" => "شخصية منظمة ومسؤولة وملتزمة",
        "extraversion" => "شخصية اجتماعية ونشطة ومتفاعلة",
        "agreeableness" => "شخصية ودودة ومتعاونة ومتفهمة",
        "neuroticism" => "شخصية حساسة وقد تحتاج لإدارة الضغوط",
        _ => "شخصية متوازنة",
    }
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
    fn test_dominant_trait_and_summary() {
        // three agreeableness hits, one openness hit
        let t = transcript("أحب مساعدة الناس بكل تعاون واحترام وأجرب كل جديد");
        let profile = analyze_personality_traits(&t);
        assert_eq!(profile.dominant_trait.0, "agreeableness");
        assert_eq!(
            profile.personality_summary,
            "شخصية ودودة ومتعاونة ومتفهمة"
        );
        assert!(profile.agreeableness > profile.openness);
    }

    #[test]
    fn test_percentages_sum_to_hundred_when_hits_exist() {
        let t = transcript("فكرة جديدة مع خطة منظمة ونشاط وتعاون وقلق");
        let profile = analyze_personality_traits(&t);
        let sum = profile.openness
            + profile.conscientiousness
            + profile.extraversion
            + profile.agreeableness
            + profile.neuroticism;
        assert!((sum - 100.0).abs() < 0.5);
    }

    #[test]
    fn test_no_hits_yields_zeros_with_first_trait_dominant() {
        let t = transcript("حديث محايد تماما");
        let profile = analyze_personality_traits(&t);
        assert_eq!(profile.openness, 0.0);
        assert_eq!(profile.neuroticism, 0.0);
        // ties resolve to table order, so openness leads
        assert_eq!(profile.dominant_trait.0, "openness");
        assert_eq!(profile.dominant_trait.1, 0.0);
    }

    #[test]
    fn test_shared_words_count_for_both_traits() {
        // "قلق" appears in both the stress table and neuroticism; here it
        // scores neuroticism, and "مشكلة" scores it again
        let t = transcript("عندي قلق من كل مشكلة");
        let profile = analyze_personality_traits(&t);
        assert_eq!(profile.dominant_trait.0, "neuroticism");
        assert_eq!(profile.neuroticism, 100.0);
    }
}
