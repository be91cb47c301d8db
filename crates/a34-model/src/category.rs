//! Inadmissibility labels assigned by the text classifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A classifier label.
///
/// Declaration order is evaluation order: [`Category::Refugee`] is the
/// exclusion label, the ten grounds follow in rule order, and
/// [`Category::Other`] is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Refugee,
    Security,
    HumanRights,
    SeriousCriminality,
    Criminality,
    OrganizedCriminality,
    HealthGrounds,
    FinancialReasons,
    Misrepresentation,
    NonCompliance,
    InadmissibleFamily,
    Other,
}

impl Category {
    /// Every label in evaluation order.
    pub const ALL: [Category; 12] = [
        Self::Refugee,
        Self::Security,
        Self::HumanRights,
        Self::SeriousCriminality,
        Self::Criminality,
        Self::OrganizedCriminality,
        Self::HealthGrounds,
        Self::FinancialReasons,
        Self::Misrepresentation,
        Self::NonCompliance,
        Self::InadmissibleFamily,
        Self::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Refugee => "refugee",
            Self::Security => "security",
            Self::HumanRights => "human_rights",
            Self::SeriousCriminality => "serious_criminality",
            Self::Criminality => "criminality",
            Self::OrganizedCriminality => "organized_criminality",
            Self::HealthGrounds => "health_grounds",
            Self::FinancialReasons => "financial_reasons",
            Self::Misrepresentation => "misrepresentation",
            Self::NonCompliance => "non_compliance",
            Self::InadmissibleFamily => "inadmissible_family",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, duplicate-free, non-empty label list for one document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification(Vec<Category>);

impl Classification {
    /// A classification holding exactly one label.
    pub fn single(category: Category) -> Self {
        Self(vec![category])
    }

    /// Build from matched labels, keeping first occurrences only.
    ///
    /// Falls back to [`Category::Other`] when nothing matched, so the result
    /// is never empty.
    pub fn from_matches(matches: impl IntoIterator<Item = Category>) -> Self {
        let mut labels: Vec<Category> = Vec::new();
        for category in matches {
            if !labels.contains(&category) {
                labels.push(category);
            }
        }
        if labels.is_empty() {
            labels.push(Category::Other);
        }
        Self(labels)
    }

    pub fn labels(&self) -> &[Category] {
        &self.0
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0.contains(&category)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Renders as a list literal: `['security', 'human_rights']`.
impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, category) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{category}'")?;
        }
        f.write_str("]")
    }
}
