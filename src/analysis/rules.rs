//! Ordered threshold-rule evaluation.
//!
//! The narrative selectors are ordered threshold ladders over numeric
//! inputs; modeling them as explicit `(predicate, label)` tables keeps the
//! ladder order auditable. Later rules are unreachable once an earlier one
//! matches, so reordering a table changes behavior.

/// One ladder entry: the first predicate that matches selects its label
pub type Rule<T> = (fn(T) -> bool, &'static str);

/// Evaluate an ordered rule table, returning the first matching label
pub fn first_match<T: Copy>(rules: &[Rule<T>], input: T, default: &'static str) -> &'static str {
    rules
        .iter()
        .find(|(applies, _)| applies(input))
        .map(|(_, label)| *label)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LADDER: &[Rule<f64>] = &[(|v| v > 3.0, "high"), (|v| v > 1.0, "mid")];

    #[test]
    fn test_first_match_wins() {
        // 4.0 satisfies both predicates; the earlier rule takes precedence
        assert_eq!(first_match(LADDER, 4.0, "low"), "high");
        assert_eq!(first_match(LADDER, 2.0, "low"), "mid");
    }

    #[test]
    fn test_default_when_nothing_matches() {
        assert_eq!(first_match(LADDER, 0.5, "low"), "low");
    }

    #[test]
    fn test_tuple_input() {
        const COMPOUND: &[Rule<(f64, f64)>] = &[(|(a, b)| a > 1.0 && b < 1.0, "mixed")];
        assert_eq!(first_match(COMPOUND, (2.0, 0.5), "none"), "mixed");
        assert_eq!(first_match(COMPOUND, (2.0, 2.0), "none"), "none");
    }
}
