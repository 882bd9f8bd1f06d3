//! Content word-substitution filter applied before presenter submission.
//!
//! The presenter vendor's moderation rejects financial-advice phrasing
//! outright, so known trigger terms are swapped for neutral wording before
//! the script ever reaches the API. Matching is case-insensitive and bound
//! to whole words.

use regex::RegexBuilder;

/// Trigger terms and their neutral replacements.
///
/// Replacements must not themselves contain a trigger term.
pub const FILTERED_TERMS: &[(&str, &str)] = &[
    ("invest", "explore"),
    ("investment", "opportunity"),
    ("guaranteed", "expected"),
    ("profit", "benefit"),
    ("returns", "results"),
    ("get rich", "do well"),
    ("financial advice", "general information"),
    ("buy now", "take a look"),
];

/// Replace every trigger term in `script` with its neutral substitute.
///
/// Longer terms are applied first so that e.g. "investment" is rewritten as
/// a whole rather than having its "invest" prefix replaced.
pub fn filter_script(script: &str) -> String {
    let mut terms: Vec<(&str, &str)> = FILTERED_TERMS.to_vec();
    terms.sort_by_key(|(term, _)| std::cmp::Reverse(term.len()));

    let mut filtered = script.to_string();
    for (term, replacement) in terms {
        let pattern = format!(r"\b{}\b", regex::escape(term));
        // Pattern is built from a static table; compilation cannot fail.
        let re = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .unwrap_or_else(|e| panic!("Invalid filter pattern '{pattern}': {e}"));
        filtered = re.replace_all(&filtered, replacement).into_owned();
    }
    filtered
}

/// True if `script` still contains any trigger term, case-insensitively.
pub fn contains_filtered_term(script: &str) -> bool {
    let lower = script.to_lowercase();
    FILTERED_TERMS.iter().any(|(term, _)| lower.contains(term))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_known_terms() {
        let filtered = filter_script("You should invest for guaranteed profit");
        assert_eq!(filtered, "You should explore for expected benefit");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let filtered = filter_script("INVEST today. Guaranteed!");
        assert!(!contains_filtered_term(&filtered));
    }

    #[test]
    fn longer_terms_win_over_prefixes() {
        let filtered = filter_script("a great investment");
        assert_eq!(filtered, "a great opportunity");
    }

    #[test]
    fn phrases_are_replaced() {
        let filtered = filter_script("Buy now and get rich");
        assert!(!contains_filtered_term(&filtered));
        assert!(filtered.contains("take a look"));
    }

    #[test]
    fn clean_script_is_unchanged() {
        let script = "A calm walk through the park";
        assert_eq!(filter_script(script), script);
    }

    #[test]
    fn output_never_contains_a_filtered_term() {
        let inputs = [
            "invest invest INVEST",
            "guaranteed returns on your investment",
            "this is not financial advice, but buy now for profit",
        ];
        for input in inputs {
            let filtered = filter_script(input);
            assert!(
                !contains_filtered_term(&filtered),
                "filtered output still contains a trigger term: {filtered}"
            );
        }
    }

    #[test]
    fn word_boundaries_respected() {
        // "reinvest" contains "invest" but is not a whole-word match.
        let filtered = filter_script("reinvested dividends");
        assert_eq!(filtered, "reinvested dividends");
    }
}
