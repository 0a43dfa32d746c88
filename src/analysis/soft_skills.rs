use std::collections::BTreeMap;

use crate::models::SoftSkillsAnalysis;

use super::keywords::SOFT_SKILL_TABLES;

/// Detect soft-skill categories from keyword presence.
///
/// A category is reported only when at least one of its keywords appears;
/// its strength is the fraction of the category table that was found.
pub fn detect_soft_skills(text: &str) -> SoftSkillsAnalysis {
    let mut detected: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut scores: BTreeMap<String, f64> = BTreeMap::new();

    for (skill, keywords) in SOFT_SKILL_TABLES {
        let found: Vec<String> = keywords
            .iter()
            .filter(|k| text.contains(*k))
            .map(|k| k.to_string())
            .collect();

        if !found.is_empty() {
            scores.insert(skill.to_string(), found.len() as f64 / keywords.len() as f64);
            detected.insert(skill.to_string(), found);
        }
    }

    SoftSkillsAnalysis {
        skills_count: detected.len(),
        detected_skills: detected,
        skill_scores: scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_categories_with_hits_only() {
        let analysis = detect_soft_skills("أعمل مع الفريق بكل تعاون وتنسيق");
        assert!(analysis.detected_skills.contains_key("العمل الجماعي"));
        assert!(!analysis.detected_skills.contains_key("الإبداع"));
        assert_eq!(analysis.skills_count, analysis.detected_skills.len());
    }

    #[test]
    fn test_score_is_found_fraction_of_table() {
        let analysis = detect_soft_skills("فريق تعاون تنسيق جماعي مشترك شراكة");
        assert_eq!(analysis.skill_scores.get("العمل الجماعي"), Some(&1.0));
    }

    #[test]
    fn test_empty_text_detects_nothing() {
        let analysis = detect_soft_skills("");
        assert_eq!(analysis.skills_count, 0);
        assert!(analysis.detected_skills.is_empty());
        assert!(analysis.skill_scores.is_empty());
    }

    #[test]
    fn test_found_keywords_listed_in_table_order() {
        let analysis = detect_soft_skills("قدرة على حل أي مشكلة أو تحدي");
        assert_eq!(
            analysis.detected_skills.get("حل المشكلات"),
            Some(&vec![
                "حل".to_string(),
                "مشكلة".to_string(),
                "تحدي".to_string()
            ])
        );
    }
}
