//! Fixed keyword tables driving the scoring passes.
//!
//! Matching is substring-based, not whole-word: a table entry contained
//! inside a longer token still counts. Most passes count presence (one per
//! table entry found anywhere in the text); the hesitation pass counts
//! occurrences instead, see that module.

/// Assertive-confidence markers
pub const CONFIDENCE_INDICATORS: &[&str] = &[
    "أعتقد", "أؤكد", "متأكد", "بالتأكيد", "بثقة", "أعرف", "مقتنع",
];

/// Hedging/uncertainty markers
pub const UNCERTAINTY_INDICATORS: &[&str] = &[
    "ربما", "قد", "ممكن", "لا أعرف", "غير متأكد", "أظن", "يبدو",
];

/// Stress and distress vocabulary
pub const STRESS_INDICATORS: &[&str] = &[
    "توتر", "قلق", "خوف", "ضغط", "مشكلة", "صعب", "مؤلم", "أزمة",
];

/// Over-assertion phrases associated with persuasion attempts
pub const DECEPTION_ASSERTIONS: &[&str] = &[
    "في الواقع",
    "صدقني",
    "بصراحة",
    "والله",
    "أقسم",
    "لا أكذب",
    "حقيقة",
    "أؤكد لك",
    "بالفعل",
    "حقاً",
];

/// Verbal hedging phrases scored in the credibility pass
pub const HEDGING_PHRASES: &[&str] = &[
    "آآآ", "إممم", "يعني", "كيف أقول", "أقصد", "بمعنى", "أي", "ألا وهو", "كما تعلم",
];

/// Big-five trait vocabulary, in fixed trait order
pub const OPENNESS_WORDS: &[&str] = &[
    "جديد", "مختلف", "إبداع", "فكرة", "تجربة", "مغامرة", "تغيير",
];
pub const CONSCIENTIOUSNESS_WORDS: &[&str] = &[
    "منظم", "دقيق", "مسؤول", "الوقت", "خطة", "هدف", "إنجاز",
];
pub const EXTRAVERSION_WORDS: &[&str] = &[
    "اجتماع", "ناس", "أصدقاء", "حفلة", "نشاط", "طاقة", "متحمس",
];
pub const AGREEABLENESS_WORDS: &[&str] = &[
    "مساعدة", "تعاون", "لطيف", "صبر", "تفهم", "احترام", "سلام",
];
pub const NEUROTICISM_WORDS: &[&str] = &[
    "قلق", "توتر", "خوف", "حزن", "غضب", "ضغط", "مشكلة",
];

/// Function words dropped from the frequent-words listing
pub const STOP_WORDS: &[&str] = &[
    "في", "من", "على", "إلى", "عن", "مع", "هذا", "هذه", "ذلك", "التي", "الذي", "و", "أن",
    "لا", "ما", "كان", "كانت",
];

/// Security-relevant lexicon for the alerting pass
pub const SENSITIVE_WORDS: &[&str] = &[
    "تهديد",
    "سلاح",
    "خيانة",
    "تفجير",
    "اغتيال",
    "قتل",
    "عنف",
    "إرهاب",
    "مؤامرة",
    "اعتداء",
    "انفجار",
    "رصاص",
    "هجوم",
    "كمين",
    "حرب",
    "صراع",
    "دمار",
    "ذبح",
    "مسدس",
    "مجزرة",
    "موت",
    "مهاجمة",
    "تفخيخ",
    "قنص",
    "عدوان",
    "خطف",
    "ابتزاز",
    "جريمة",
    "دماء",
    "إصابة",
    "معركة",
    "قنبلة",
    "عبوة ناسفة",
    "اجتياح",
    "عصابة",
    "تحريض",
];

/// Analytical-depth markers for response-quality scoring
pub const DEPTH_KEYWORDS: &[&str] = &[
    "تحليل", "أثبت", "ناقش", "استنتج", "يفسر", "مقارنة", "تقييم", "أسباب", "نتائج", "أدلة",
];

/// Specificity markers for response-quality scoring
pub const SPECIFICITY_KEYWORDS: &[&str] = &[
    "تحديدًا",
    "بالضبط",
    "تشير الأبحاث",
    "في عام",
    "حسب دراسة",
    "في مجال",
    "وفقًا لـ",
    "تجربة",
    "اسم باحث",
    "نوع معين",
    "مكان معين",
];

/// Subset of depth markers carrying extra analytic weight
pub const ANALYTIC_MARKERS: &[&str] = &["تحليل", "أثبت", "استنتج", "ناقش"];

/// Domain/topic markers
pub const DOMAIN_MARKERS: &[&str] = &["مجال", "موضوع", "تخصص"];

/// Precision markers
pub const PRECISION_MARKERS: &[&str] = &["بالضبط", "تحديدًا", "على وجه التحديد", "بالتفصيل"];

/// Discourse-cohesion markers
pub const COHESION_MARKERS: &[&str] = &["لذلك", "بالتالي", "علاوة على ذلك", "من ناحية أخرى"];

/// Colloquial filler words, counted by exact-token occurrence.
/// Multi-word entries never match a single token and stay at zero; the
/// table is kept as-is so the constants remain auditable against the
/// published lexicon.
pub const FILLER_WORDS: &[&str] = &[
    "يعني", "هو", "بس", "كده", "اه", "ايوة", "طيب", "خلاص", "ما هو", "يا إما",
];

/// Hesitation markers, counted by substring occurrence
pub const HESITATION_MARKERS: &[&str] = &["ممم", "اااه", "هممم", "إيه", "ازاي", "يعني كده"];

/// Soft-skill categories with their keyword tables, in fixed order
pub const SOFT_SKILL_TABLES: &[(&str, &[&str])] = &[
    (
        "التواصل",
        &["تواصل", "إقناع", "استماع", "عرض", "شرح", "نقاش", "حوار", "توضيح"],
    ),
    (
        "القيادة",
        &["قيادة", "توجيه", "إلهام", "إدارة", "تحفيز", "ريادة", "مسؤولية"],
    ),
    (
        "العمل الجماعي",
        &["فريق", "تعاون", "تنسيق", "جماعي", "مشترك", "شراكة"],
    ),
    (
        "حل المشكلات",
        &["حل", "مشكلة", "تحدي", "تحليل", "حلول", "معالجة"],
    ),
    (
        "التفكير النقدي",
        &["تفكير", "نقد", "منطق", "أدلة", "تقييم", "استنتاج"],
    ),
    (
        "إدارة الوقت",
        &["تنظيم", "وقت", "جدول", "التزام", "أولوية", "تخطيط"],
    ),
    (
        "المرونة",
        &["تأقلم", "مرونة", "ظروف", "تغيير", "تكيف", "استجابة"],
    ),
    (
        "الإبداع",
        &["ابتكار", "إبداع", "أفكار", "خارج الصندوق", "خلاقة", "مبتكر"],
    ),
];

/// High-engagement markers (questions, opinions, proposals)
pub const HIGH_ENGAGEMENT: &[&str] = &[
    "لماذا", "كيف", "هل يمكن", "أعتقد", "برأيي", "اقتراح", "سؤال", "نقاش", "ما رأيكم",
];

/// Medium-engagement markers (appreciation, agreement)
pub const MEDIUM_ENGAGEMENT: &[&str] = &[
    "جميل", "مفيد", "شكرا", "ممتاز", "رائع", "أحببت", "موافق",
];

/// Low-engagement markers (bare acknowledgements)
pub const LOW_ENGAGEMENT: &[&str] = &[".", "...", "نعم", "لا"];

/// Number of table entries present anywhere in `text` (presence, not occurrences)
pub fn presence_count(text: &str, entries: &[&str]) -> usize {
    entries.iter().filter(|e| text.contains(*e)).count()
}

/// The table entries present anywhere in `text`, in table order
pub fn found_in<'a>(text: &str, entries: &[&'a str]) -> Vec<&'a str> {
    entries.iter().copied().filter(|e| text.contains(e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_is_substring_not_whole_word() {
        // "متأكد" inside the longer token "متأكدون" still counts
        let text = "نحن متأكدون من ذلك";
        assert_eq!(presence_count(text, CONFIDENCE_INDICATORS), 1);
    }

    #[test]
    fn test_presence_counts_each_entry_once() {
        let text = "متأكد متأكد متأكد وأعتقد ذلك";
        assert_eq!(presence_count(text, CONFIDENCE_INDICATORS), 2);
    }

    #[test]
    fn test_found_in_preserves_table_order() {
        let text = "أعرف ذلك وأنا متأكد";
        assert_eq!(found_in(text, CONFIDENCE_INDICATORS), vec!["متأكد", "أعرف"]);
    }
}
