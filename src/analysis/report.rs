//! Narrative report assembly.
//!
//! Every selector here is an ordered threshold ladder over already-computed
//! numeric outputs; the exact thresholds and canned Arabic strings are part
//! of the report contract. Percentage inputs are the rounded values the
//! sub-reports expose, so a score sitting exactly on a boundary behaves the
//! same way it does in the serialized output.

use crate::models::{
    ComprehensiveReport, EmotionalStabilitySection, ForensicSection, ProfileSection,
    RecommendationsSection, RepetitionAnalysis, RepetitionSection, SentimentBreakdown,
    SpeechPatternSection,
};

use super::rules::{Rule, first_match};

/// Merge the numeric passes into the narrative report
pub fn generate_comprehensive_report(
    sentiment: &SentimentBreakdown,
    total_words: usize,
    speech_rate: f64,
    repetition: &RepetitionAnalysis,
) -> ComprehensiveReport {
    let positive_pct = sentiment.positive_pct();
    let negative_pct = sentiment.negative_pct();

    ComprehensiveReport {
        executive_summary: executive_summary(
            total_words,
            speech_rate,
            positive_pct,
            negative_pct,
            repetition.repetition_ratio,
        ),
        speech_pattern_analysis: SpeechPatternSection {
            rate_analysis: rate_analysis(speech_rate).to_string(),
            consistency_rating: if (1.5..=2.5).contains(&speech_rate) {
                "متسق ومنتظم".to_string()
            } else {
                "غير منتظم وقد يشير لتوتر".to_string()
            },
            psychological_indicators: speech_psychological_indicators(speech_rate),
            forensic_assessment: forensic_assessment(speech_rate).to_string(),
        },
        repetition_analysis: RepetitionSection {
            overview: format!("مستوى التكرار: {}", repetition.repetition_level),
            psychological_meaning: repetition.psychological_analysis.clone(),
            excessive_words: repetition.excessive_repetition.clone(),
            interpretation: repetition_interpretation(repetition.repetition_ratio).to_string(),
        },
        emotional_stability: EmotionalStabilitySection {
            overall_rating: stability_rating(negative_pct).to_string(),
            risk_assessment: risk_assessment(negative_pct, speech_rate).to_string(),
            recommendations: emotional_recommendations(negative_pct, positive_pct),
        },
        psychological_profile: ProfileSection {
            communication_style: communication_style(speech_rate, total_words).to_string(),
            dominant_traits: dominant_traits(positive_pct, negative_pct, speech_rate),
            behavioral_indicators: behavioral_indicators(speech_rate, negative_pct),
            personality_assessment: personality_assessment(positive_pct, negative_pct).to_string(),
        },
        forensic_analysis: ForensicSection {
            credibility_assessment: credibility_assessment(speech_rate).to_string(),
            deception_indicators: format!("مستوى المخاطر: {DEFAULT_DECEPTION_RISK}"),
            interview_suitability: interview_suitability(speech_rate, positive_pct).to_string(),
            risk_factors: risk_factors(speech_rate, negative_pct),
        },
        final_recommendations: RecommendationsSection {
            psychological_development: psychological_recommendations(
                positive_pct,
                negative_pct,
                speech_rate,
            ),
            communication_improvement: communication_recommendations(
                speech_rate,
                repetition.repetition_ratio,
            ),
            professional_suitability: professional_assessment(speech_rate, positive_pct).to_string(),
            follow_up_suggestions: vec![
                "إعادة تقييم بعد 3 أشهر".to_string(),
                "تطبيق التوصيات المقترحة".to_string(),
                "متابعة التحسن في المؤشرات".to_string(),
            ],
        },
    }
}

/// Risk level shown in the deception summary; the credibility pass carries
/// no risk-level field, so the summary always reports the low default
const DEFAULT_DECEPTION_RISK: &str = "منخفض";

fn executive_summary(
    total_words: usize,
    speech_rate: f64,
    positive_pct: f64,
    negative_pct: f64,
    repetition_pct: f64,
) -> String {
    let assessment = if positive_pct > 60.0 {
        "✅ شخصية متفائلة ومستقرة نفسياً"
    } else if negative_pct > 40.0 {
        "⚠️ يحتاج لدعم نفسي ومتابعة"
    } else {
        "📊 شخصية متوازنة نسبياً"
    };

    format!(
        "📋 الملخص التنفيذي للتحليل النفسي والجنائي:\n\
         \n\
         🔍 البيانات الأساسية:\n\
         • تم تحليل عينة صوتية تحتوي على {total_words} كلمة\n\
         • معدل الكلام: {speech_rate:.2} كلمة في الثانية\n\
         • نسبة المشاعر الإيجابية: {positive_pct}%\n\
         • نسبة المشاعر السلبية: {negative_pct}%\n\
         • نسبة تكرار الكلمات: {repetition_pct}%\n\
         \n\
         🎯 التقييم الشامل:\n\
         {assessment}\n\
         \n\
         🧠 نمط الشخصية المهيمن:\n\
         {classification}",
        classification = personality_classification(positive_pct, negative_pct, speech_rate),
    )
}

const CLASSIFICATION: &[Rule<(f64, f64, f64)>] = &[
    (
        |(positive, _, rate)| positive > 70.0 && rate > 2.0,
        "شخصية قيادية واثقة ومتفائلة",
    ),
    (
        |(positive, negative, _)| positive > 60.0 && negative < 20.0,
        "شخصية مستقرة وإيجابية",
    ),
    (|(_, negative, _)| negative > 40.0, "شخصية تحتاج لدعم نفسي"),
    (|(_, _, rate)| rate < 1.5, "شخصية حذرة ومتأنية"),
    (|(_, _, rate)| rate > 2.8, "شخصية متحمسة وقد تكون متوترة"),
];

fn personality_classification(positive: f64, negative: f64, rate: f64) -> &'static str {
    first_match(
        CLASSIFICATION,
        (positive, negative, rate),
        "شخصية متوازنة ومتكيفة",
    )
}

const RATE_ANALYSIS: &[Rule<f64>] = &[
    (|r| r > 3.0, "سرعة مفرطة - قد تشير إلى توتر شديد أو محاولة إخفاء معلومات"),
    (|r| r > 2.5, "سرعة عالية - شخص واثق ونشط، لكن قد يحتاج لتهدئة الإيقاع"),
    (|r| r > 2.0, "معدل ممتاز - يدل على ثقة وطلاقة في التعبير"),
    (|r| r > 1.5, "معدل طبيعي - يشير إلى تأني وتفكير قبل الكلام"),
];

fn rate_analysis(rate: f64) -> &'static str {
    first_match(RATE_ANALYSIS, rate, "بطء في الكلام - قد يشير إلى تردد أو حذر مفرط")
}

fn speech_psychological_indicators(rate: f64) -> Vec<String> {
    let indicators: &[&str] = if rate > 2.8 {
        &[
            "مؤشرات التوتر والقلق",
            "رغبة في الانتهاء بسرعة",
            "قد يخفي معلومات مهمة",
        ]
    } else if rate > 2.2 {
        &["ثقة عالية بالنفس", "طلاقة في التعبير", "شخصية اجتماعية"]
    } else if rate < 1.5 {
        &[
            "حذر في اختيار الكلمات",
            "تفكير عميق قبل الكلام",
            "قد يشير للتردد أو الخوف",
        ]
    } else {
        &[
            "توازن نفسي جيد",
            "قدرة على التحكم في الذات",
            "تفكير منطقي ومنظم",
        ]
    };
    indicators.iter().map(|s| s.to_string()).collect()
}

const FORENSIC_ASSESSMENT: &[Rule<f64>] = &[
    (|r| r > 3.0, "⚠️ مؤشر خطر عالي - سرعة مفرطة قد تخفي معلومات"),
    (|r| r < 1.2, "⚠️ مؤشر حذر - بطء مفرط قد يشير لكذب أو إخفاء"),
    (
        |r| (1.8..=2.3).contains(&r),
        "✅ نمط طبيعي - لا توجد مؤشرات خداع واضحة",
    ),
];

fn forensic_assessment(rate: f64) -> &'static str {
    first_match(
        FORENSIC_ASSESSMENT,
        rate,
        "📊 يحتاج متابعة - أنماط غير معتادة تستدعي التحقق",
    )
}

const REPETITION_INTERPRETATION: &[Rule<f64>] = &[
    (|pct| pct > 15.0, "تكرار مفرط - قد يشير إلى القلق أو محاولة الإقناع بالقوة"),
    (|pct| pct > 10.0, "تكرار عالي - قد يدل على التأكيد أو عدم الثقة في الرسالة"),
    (|pct| pct > 5.0, "تكرار طبيعي - يستخدم للتأكيد والوضوح"),
];

fn repetition_interpretation(repetition_pct: f64) -> &'static str {
    first_match(
        REPETITION_INTERPRETATION,
        repetition_pct,
        "تكرار منخفض - كلام متنوع ومتدفق",
    )
}

const STABILITY_RATING: &[Rule<f64>] = &[
    (|n| n < 15.0, "مستقر عاطفياً بدرجة ممتازة"),
    (|n| n < 25.0, "مستقر عاطفياً بدرجة جيدة"),
    (|n| n < 40.0, "استقرار عاطفي متوسط"),
];

fn stability_rating(negative_pct: f64) -> &'static str {
    first_match(
        STABILITY_RATING,
        negative_pct,
        "يحتاج لدعم في الاستقرار العاطفي",
    )
}

fn risk_assessment(negative_pct: f64, speech_rate: f64) -> &'static str {
    let mut risk_score = 0u32;

    if negative_pct > 50.0 {
        risk_score += 3;
    } else if negative_pct > 30.0 {
        risk_score += 2;
    } else if negative_pct > 15.0 {
        risk_score += 1;
    }

    if speech_rate > 3.5 || speech_rate < 1.0 {
        risk_score += 2;
    } else if speech_rate > 3.0 || speech_rate < 1.2 {
        risk_score += 1;
    }

    if risk_score >= 4 {
        "مخاطر عالية - يحتاج تدخل فوري"
    } else if risk_score >= 2 {
        "مخاطر متوسطة - يحتاج متابعة"
    } else {
        "مخاطر منخفضة - حالة طبيعية"
    }
}

fn emotional_recommendations(negative_pct: f64, positive_pct: f64) -> Vec<String> {
    let mut recommendations = Vec::new();

    if negative_pct > 40.0 {
        recommendations.extend([
            "ضرورة استشارة نفسية متخصصة".to_string(),
            "تطبيق تقنيات الاسترخاء والتأمل".to_string(),
            "ممارسة الرياضة والأنشطة الإيجابية".to_string(),
        ]);
    } else if negative_pct > 25.0 {
        recommendations.extend([
            "تطوير آليات إدارة الضغط".to_string(),
            "تحسين أنماط التفكير الإيجابي".to_string(),
        ]);
    }

    if positive_pct > 70.0 {
        recommendations.push("الاستفادة من الطاقة الإيجابية في القيادة".to_string());
    }

    recommendations
}

fn communication_style(speech_rate: f64, total_words: usize) -> &'static str {
    if speech_rate > 2.5 && total_words > 100 {
        "متحدث طلق وواثق - يفضل التفصيل"
    } else if speech_rate > 2.2 {
        "متحدث نشط - يحب المشاركة"
    } else if speech_rate < 1.8 {
        "متحدث متأني - يفكر قبل الكلام"
    } else {
        "متحدث متوازن - أسلوب مناسب"
    }
}

fn dominant_traits(positive_pct: f64, negative_pct: f64, speech_rate: f64) -> Vec<String> {
    let mut traits = Vec::new();

    if positive_pct > 60.0 {
        traits.push("متفائل وإيجابي".to_string());
    }
    if speech_rate > 2.3 {
        traits.push("نشط وحيوي".to_string());
    }
    if negative_pct < 20.0 {
        traits.push("مستقر نفسياً".to_string());
    }
    if speech_rate < 1.8 {
        traits.push("حذر ومتأني".to_string());
    }
    if speech_rate > 2.8 {
        traits.push("متحمس وقد يكون متوتر".to_string());
    }

    if traits.is_empty() {
        traits.push("شخصية متوازنة".to_string());
    }
    traits
}

fn behavioral_indicators(speech_rate: f64, negative_pct: f64) -> Vec<String> {
    let mut indicators = Vec::new();

    if speech_rate > 3.0 {
        indicators.push("قد يكون تحت ضغط أو توتر".to_string());
    }
    if negative_pct > 30.0 {
        indicators.push("يظهر علامات عدم الراحة".to_string());
    }

    indicators
}

const PERSONALITY_ASSESSMENT: &[Rule<(f64, f64)>] = &[
    (
        |(positive, negative)| positive > 70.0 && negative < 15.0,
        "شخصية قوية ومتفائلة - مناسبة للأدوار القيادية",
    ),
    (
        |(positive, negative)| positive > 50.0 && negative < 25.0,
        "شخصية متوازنة - قادرة على التكيف",
    ),
    (
        |(_, negative)| negative > 40.0,
        "تحتاج لتطوير الجانب النفسي والعاطفي",
    ),
];

fn personality_assessment(positive_pct: f64, negative_pct: f64) -> &'static str {
    first_match(
        PERSONALITY_ASSESSMENT,
        (positive_pct, negative_pct),
        "شخصية طبيعية ومقبولة",
    )
}

const CREDIBILITY_ASSESSMENT: &[Rule<f64>] = &[
    (
        |r| (1.8..=2.5).contains(&r),
        "مصداقية عالية - أنماط كلام طبيعية",
    ),
    (|r| r > 3.0 || r < 1.2, "تحتاج للتحقق - أنماط غير عادية"),
];

fn credibility_assessment(speech_rate: f64) -> &'static str {
    first_match(CREDIBILITY_ASSESSMENT, speech_rate, "مصداقية متوسطة")
}

fn interview_suitability(speech_rate: f64, positive_pct: f64) -> &'static str {
    let mut score = 0u32;
    if (1.5..=2.8).contains(&speech_rate) {
        score += 3;
    }
    if positive_pct > 50.0 {
        score += 2;
    }

    if score >= 4 {
        "ممتاز للمقابلات"
    } else if score >= 2 {
        "مناسب للمقابلات"
    } else {
        "يحتاج تحضير إضافي"
    }
}

fn risk_factors(speech_rate: f64, negative_pct: f64) -> Vec<String> {
    let mut risks = Vec::new();

    if speech_rate > 3.5 {
        risks.push("سرعة كلام مفرطة".to_string());
    }
    if negative_pct > 50.0 {
        risks.push("مشاعر سلبية عالية".to_string());
    }

    if risks.is_empty() {
        risks.push("لا توجد مخاطر واضحة".to_string());
    }
    risks
}

fn psychological_recommendations(
    positive_pct: f64,
    negative_pct: f64,
    speech_rate: f64,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if negative_pct > 30.0 {
        recommendations.push("العمل على تقنيات إدارة الضغوط والاسترخاء".to_string());
    }
    if speech_rate > 2.8 {
        recommendations.push("ممارسة التنفس العميق لتهدئة معدل الكلام".to_string());
    }
    if speech_rate < 1.5 {
        recommendations.push("تطوير الثقة بالنفس من خلال التدريب".to_string());
    }
    if positive_pct < 40.0 {
        recommendations.push("العمل على تحسين النظرة الإيجابية للحياة".to_string());
    }

    if recommendations.is_empty() {
        recommendations.push("الحفاظ على الأداء الحالي الجيد".to_string());
    }
    recommendations
}

fn communication_recommendations(speech_rate: f64, repetition_pct: f64) -> Vec<String> {
    let mut recommendations = Vec::new();

    if speech_rate > 2.8 {
        recommendations.push("تقليل سرعة الكلام للوضوح".to_string());
    }
    if repetition_pct > 12.0 {
        recommendations.push("تقليل تكرار الكلمات".to_string());
    }

    recommendations
}

const PROFESSIONAL_ASSESSMENT: &[Rule<(f64, f64)>] = &[
    (
        |(rate, positive)| positive > 60.0 && (1.8..=2.5).contains(&rate),
        "مناسب للأدوار المهنية المتقدمة",
    ),
    (|(_, positive)| positive > 40.0, "مناسب للأدوار المهنية العادية"),
];

fn professional_assessment(speech_rate: f64, positive_pct: f64) -> &'static str {
    first_match(
        PROFESSIONAL_ASSESSMENT,
        (speech_rate, positive_pct),
        "يحتاج تطوير مهني",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentiment(positive: &str, negative: &str) -> SentimentBreakdown {
        SentimentBreakdown {
            positive: positive.to_string(),
            neutral: "0.00%".to_string(),
            negative: negative.to_string(),
        }
    }

    fn repetition(ratio_pct: f64, level: &str) -> RepetitionAnalysis {
        RepetitionAnalysis {
            repetition_ratio: ratio_pct,
            total_words: 50,
            unique_words: 40,
            most_repeated_words: vec![],
            excessive_repetition: vec![],
            psychological_analysis: vec![],
            repetition_level: level.to_string(),
        }
    }

    #[test]
    fn test_classification_ladder_order() {
        // both the first and second rules match; the first wins
        assert_eq!(
            personality_classification(75.0, 10.0, 2.2),
            "شخصية قيادية واثقة ومتفائلة"
        );
        assert_eq!(
            personality_classification(65.0, 10.0, 1.9),
            "شخصية مستقرة وإيجابية"
        );
        assert_eq!(personality_classification(30.0, 45.0, 2.0), "شخصية تحتاج لدعم نفسي");
        assert_eq!(personality_classification(30.0, 10.0, 2.0), "شخصية متوازنة ومتكيفة");
    }

    #[test]
    fn test_risk_assessment_accumulation() {
        // negative > 50 (+3) with extreme rate (+2) → immediate intervention
        assert_eq!(risk_assessment(60.0, 0.5), "مخاطر عالية - يحتاج تدخل فوري");
        // negative 20 (+1) with borderline rate 3.2 (+1) → follow-up tier
        assert_eq!(risk_assessment(20.0, 3.2), "مخاطر متوسطة - يحتاج متابعة");
        assert_eq!(risk_assessment(10.0, 2.0), "مخاطر منخفضة - حالة طبيعية");
    }

    #[test]
    fn test_interview_suitability_scoring() {
        assert_eq!(interview_suitability(2.0, 60.0), "ممتاز للمقابلات");
        assert_eq!(interview_suitability(2.0, 30.0), "مناسب للمقابلات");
        assert_eq!(interview_suitability(3.5, 30.0), "يحتاج تحضير إضافي");
    }

    #[test]
    fn test_emotional_recommendation_tiers_are_exclusive() {
        let severe = emotional_recommendations(45.0, 10.0);
        assert_eq!(severe.len(), 3);
        assert_eq!(severe[0], "ضرورة استشارة نفسية متخصصة");

        let moderate = emotional_recommendations(30.0, 10.0);
        assert_eq!(moderate.len(), 2);

        let energized = emotional_recommendations(10.0, 75.0);
        assert_eq!(energized, vec!["الاستفادة من الطاقة الإيجابية في القيادة".to_string()]);
    }

    #[test]
    fn test_psychological_recommendations_fallback() {
        let fine = psychological_recommendations(50.0, 10.0, 2.0);
        assert_eq!(fine, vec!["الحفاظ على الأداء الحالي الجيد".to_string()]);

        let stressed = psychological_recommendations(30.0, 35.0, 3.0);
        assert_eq!(stressed.len(), 3);
    }

    #[test]
    fn test_report_sections_populated() {
        let report = generate_comprehensive_report(
            &sentiment("66.67%", "11.11%"),
            120,
            2.1,
            &repetition(8.0, "منخفض"),
        );

        assert!(report.executive_summary.contains("120 كلمة"));
        assert!(report.executive_summary.contains("66.67%"));
        assert_eq!(
            report.speech_pattern_analysis.consistency_rating,
            "متسق ومنتظم"
        );
        assert_eq!(
            report.speech_pattern_analysis.forensic_assessment,
            "✅ نمط طبيعي - لا توجد مؤشرات خداع واضحة"
        );
        assert_eq!(report.repetition_analysis.overview, "مستوى التكرار: منخفض");
        assert_eq!(
            report.forensic_analysis.deception_indicators,
            "مستوى المخاطر: منخفض"
        );
        assert_eq!(report.final_recommendations.follow_up_suggestions.len(), 3);
    }

    #[test]
    fn test_forensic_assessment_bands() {
        assert_eq!(
            forensic_assessment(3.2),
            "⚠️ مؤشر خطر عالي - سرعة مفرطة قد تخفي معلومات"
        );
        assert_eq!(
            forensic_assessment(1.0),
            "⚠️ مؤشر حذر - بطء مفرط قد يشير لكذب أو إخفاء"
        );
        assert_eq!(
            forensic_assessment(2.6),
            "📊 يحتاج متابعة - أنماط غير معتادة تستدعي التحقق"
        );
    }

    #[test]
    fn test_repetition_interpretation_tiers() {
        assert_eq!(
            repetition_interpretation(16.0),
            "تكرار مفرط - قد يشير إلى القلق أو محاولة الإقناع بالقوة"
        );
        assert_eq!(
            repetition_interpretation(3.0),
            "تكرار منخفض - كلام متنوع ومتدفق"
        );
    }
}
