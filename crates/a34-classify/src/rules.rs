//! Inadmissibility patterns.
//!
//! Every pattern is case-insensitive and anchored on word boundaries at both
//! ends of the alternation, so `"sentences"` matches but `"presentence"` does
//! not.

use std::sync::LazyLock;

use a34_model::Category;
use regex::Regex;

/// A label paired with the pattern that assigns it.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    pattern: &'static LazyLock<Regex>,
}

impl CategoryRule {
    const fn new(category: Category, pattern: &'static LazyLock<Regex>) -> Self {
        Self { category, pattern }
    }

    /// Returns true if the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn pattern(&self) -> &'static str {
        LazyLock::force(self.pattern).as_str()
    }
}

/// Refugee-protection language. A match overrides every category rule.
static REFUGEE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(convention refugees?|persons? in need of protection|refugee claimants?|protected persons?)\b",
    )
    .expect("Invalid refugee regex")
});

static SECURITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(espionages?|against canada|canada[’'‘`s]* interests?|subversions?|democratic governments?|terrorisms?|dangers? to security|violences?|endangerments?|memberships?|complicity|reasonable grounds? to believe)\b",
    )
    .expect("Invalid security regex")
});

static HUMAN_RIGHTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(human rights?|international rights?|violations?|senior officials?|governments?|regimes?|genocides?|war crimes?|crimes? against humanity|participations?|contributions?|reasonable grounds? to believe|terrorisms?)\b",
    )
    .expect("Invalid human rights regex")
});

static SERIOUS_CRIMINALITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(criminal convictions?|foreign convictions?|imprisonments?|10 years|ten years|sentences?|over (6|six) months|serious indictable offences?|commissions?|reasonable grounds? to believe)\b",
    )
    .expect("Invalid serious criminality regex")
});

static CRIMINALITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(criminal convictions?|foreign convictions?|indictments?|indictable offences?|summary offences?|commissions?)\b",
    )
    .expect("Invalid criminality regex")
});

static ORGANIZED_CRIMINALITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(memberships?|criminal activities?|organized crimes?|acting in concert|people smuggling|traffickings?|money launderings?|proceeds? of crime|reasonable grounds? to believe)\b",
    )
    .expect("Invalid organized criminality regex")
});

static HEALTH_GROUNDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(dangers? to public health|dangers? to public safety|excessive demands? on health services|excessive demands? on social services)\b",
    )
    .expect("Invalid health grounds regex")
});

static FINANCIAL_REASONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(unable or unwilling to support (oneself|dependents?)|arrangements? for care and support|social assistances?)\b",
    )
    .expect("Invalid financial reasons regex")
});

static MISREPRESENTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(misrepresenting|withholding|material facts?|errors? in administration|non-disclosures?|omissions?|false statements?|false information)\b",
    )
    .expect("Invalid misrepresentation regex")
});

static NON_COMPLIANCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(contraventions?|non-compliances?|failures? to comply)\b")
        .expect("Invalid non-compliance regex")
});

static INADMISSIBLE_FAMILY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(inadmissible family members?|accompanying family members?)\b")
        .expect("Invalid inadmissible family regex")
});

/// The exclusion rule, evaluated before any category rule.
pub static EXCLUSION_RULE: CategoryRule = CategoryRule::new(Category::Refugee, &REFUGEE);

/// Category rules in evaluation order.
pub static CATEGORY_RULES: [CategoryRule; 10] = [
    CategoryRule::new(Category::Security, &SECURITY),
    CategoryRule::new(Category::HumanRights, &HUMAN_RIGHTS),
    CategoryRule::new(Category::SeriousCriminality, &SERIOUS_CRIMINALITY),
    CategoryRule::new(Category::Criminality, &CRIMINALITY),
    CategoryRule::new(Category::OrganizedCriminality, &ORGANIZED_CRIMINALITY),
    CategoryRule::new(Category::HealthGrounds, &HEALTH_GROUNDS),
    CategoryRule::new(Category::FinancialReasons, &FINANCIAL_REASONS),
    CategoryRule::new(Category::Misrepresentation, &MISREPRESENTATION),
    CategoryRule::new(Category::NonCompliance, &NON_COMPLIANCE),
    CategoryRule::new(Category::InadmissibleFamily, &INADMISSIBLE_FAMILY),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_follow_category_declaration_order() {
        let rule_order: Vec<Category> = std::iter::once(EXCLUSION_RULE.category)
            .chain(CATEGORY_RULES.iter().map(|rule| rule.category))
            .chain(std::iter::once(Category::Other))
            .collect();
        assert_eq!(rule_order, Category::ALL);
    }

    #[test]
    fn test_word_boundaries() {
        let serious = CategoryRule::new(Category::SeriousCriminality, &SERIOUS_CRIMINALITY);
        assert!(serious.is_match("two SENTENCES were imposed"));
        assert!(!serious.is_match("a presentence report"));
    }

    #[test]
    fn test_apostrophe_variants_in_canada_interests() {
        for text in ["Canada's interests", "Canada’s interest", "canadas interests"] {
            assert!(CATEGORY_RULES[0].is_match(text), "{text}");
        }
    }

    #[test]
    fn test_all_patterns_compile() {
        assert!(!EXCLUSION_RULE.pattern().is_empty());
        for rule in &CATEGORY_RULES {
            assert!(rule.pattern().starts_with("(?i)"));
        }
    }
}
