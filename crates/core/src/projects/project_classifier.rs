//! Keyword classification of projects into project types.
//!
//! Keyword sets overlap between types, so the rule order below is part of
//! the contract: the first matching rule wins and unmatched projects fall
//! back to [`ProjectType::Commercial`].

use std::collections::BTreeSet;

use super::ProjectType;

struct ClassificationRule {
    project_type: ProjectType,
    keywords: &'static [&'static str],
}

const RULES: [ClassificationRule; 5] = [
    ClassificationRule {
        project_type: ProjectType::Industrial,
        keywords: &["industrial", "pabrik", "manufaktur"],
    },
    ClassificationRule {
        project_type: ProjectType::Commercial,
        keywords: &["mall", "plaza", "office", "perkantoran"],
    },
    ClassificationRule {
        project_type: ProjectType::Residential,
        keywords: &["perumahan", "residence", "villa"],
    },
    ClassificationRule {
        project_type: ProjectType::Infrastructure,
        keywords: &["jembatan", "jalan", "infrastruktur"],
    },
    ClassificationRule {
        project_type: ProjectType::Healthcare,
        keywords: &["rumah sakit", "hospital", "klinik"],
    },
];

const DEFAULT_PROJECT_TYPE: ProjectType = ProjectType::Commercial;

impl ClassificationRule {
    fn matches(&self, name_lower: &str, tags: &BTreeSet<String>) -> bool {
        self.keywords.iter().any(|kw| name_lower.contains(kw))
            || tags.contains(self.project_type.as_str())
    }
}

/// Classifies a project by name keywords and tags.
pub fn classify(name: &str, tags: &BTreeSet<String>) -> ProjectType {
    let name_lower = name.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&name_lower, tags))
        .map(|rule| rule.project_type)
        .unwrap_or(DEFAULT_PROJECT_TYPE)
}
