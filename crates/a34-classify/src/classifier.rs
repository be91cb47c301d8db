//! Multi-label text classification.

use a34_model::{Category, Classification};

use crate::rules::{CATEGORY_RULES, EXCLUSION_RULE};

/// Classify a legal text into inadmissibility categories.
///
/// Refugee-protection language short-circuits to `[refugee]`. Otherwise
/// every category rule is tried in order and all matches are kept; with no
/// match the result is `[other]`. The result is never empty.
pub fn classify(text: &str) -> Classification {
    if EXCLUSION_RULE.is_match(text) {
        return Classification::single(Category::Refugee);
    }
    Classification::from_matches(
        CATEGORY_RULES
            .iter()
            .filter(|rule| rule.is_match(text))
            .map(|rule| rule.category),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refugee_short_circuits() {
        let result = classify("The applicant is a Convention refugee facing terrorism charges");
        assert_eq!(result.labels(), [Category::Refugee]);
    }

    #[test]
    fn test_multi_label_in_rule_order() {
        let result =
            classify("The panel found serious indictable offences and a foreign conviction");
        assert_eq!(
            result.labels(),
            [Category::SeriousCriminality, Category::Criminality]
        );
    }

    #[test]
    fn test_no_match_is_other() {
        assert_eq!(classify("no relevant content").labels(), [Category::Other]);
        assert_eq!(classify("").labels(), [Category::Other]);
    }

    #[test]
    fn test_shared_phrase_fires_every_rule_containing_it() {
        let result = classify("there are reasonable grounds to believe");
        assert_eq!(
            result.labels(),
            [
                Category::Security,
                Category::HumanRights,
                Category::SeriousCriminality,
                Category::OrganizedCriminality,
            ]
        );
    }
}
