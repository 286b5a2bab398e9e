use serde::Serialize;

use crate::types::Severity;

/// One class of brand-unsafe content, with the natural-language queries
/// used to probe the visual-search capability.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub search_queries: &'static [&'static str],
    pub severity: Severity,
    pub description: &'static str,
}

/// Category handled by the transcript extractor instead of visual search.
pub const LEXICAL_CATEGORY_ID: &str = "profanity";

pub static RISK_CATEGORIES: &[RiskCategory] = &[
    RiskCategory {
        id: "profanity",
        name: "Profanity",
        icon: "🤬",
        color: "bg-red-500",
        search_queries: &[
            "profanity or swear words or explicit language",
            "offensive language or cursing",
        ],
        severity: Severity::Medium,
        description: "Explicit language, swearing, or offensive speech",
    },
    RiskCategory {
        id: "sexual",
        name: "Sexual Content",
        icon: "💋",
        color: "bg-pink-500",
        search_queries: &[
            "sexual content or nudity or adult material",
            "suggestive content or intimate scenes",
        ],
        severity: Severity::High,
        description: "Sexual content, nudity, or adult material",
    },
    RiskCategory {
        id: "drugs_alcohol",
        name: "Drugs & Alcohol",
        icon: "🍺",
        color: "bg-yellow-500",
        search_queries: &[
            "smoking or drinking or alcohol consumption",
            "drugs or substance use or vaping",
            "cigarettes or beer or wine or pills",
        ],
        severity: Severity::Medium,
        description: "Drug use, alcohol consumption, or substance abuse",
    },
    RiskCategory {
        id: "violence",
        name: "Violence",
        icon: "🔫",
        color: "bg-red-600",
        search_queries: &[
            "violence or fighting or weapons",
            "blood or assault or aggressive behavior",
            "guns or knives or dangerous weapons",
        ],
        severity: Severity::Floor,
        description: "Violence, weapons, or aggressive behavior",
    },
    RiskCategory {
        id: "hate_speech",
        name: "Hate Speech",
        icon: "⚠️",
        color: "bg-orange-500",
        search_queries: &[
            "hate speech or discriminatory language",
            "slurs or derogatory language toward protected groups",
        ],
        severity: Severity::Floor,
        description: "Discriminatory language or hate speech",
    },
    RiskCategory {
        id: "sensitive_issues",
        name: "Sensitive Issues",
        icon: "🗞️",
        color: "bg-blue-500",
        search_queries: &[
            "political content or controversial topics",
            "war or terrorism or tragic events",
            "elections or protests or social unrest",
        ],
        severity: Severity::Medium,
        description: "Political content, news, or controversial topics",
    },
    RiskCategory {
        id: "sponsorship",
        name: "Sponsorship Issues",
        icon: "📣",
        color: "bg-green-500",
        search_queries: &[
            "sponsored content or paid partnership",
            "advertisement or promotional content",
            "brand mentions or product placement",
        ],
        severity: Severity::Low,
        description: "Undisclosed sponsorship or advertising content",
    },
];

pub fn category_by_id(id: &str) -> Option<&'static RiskCategory> {
    RISK_CATEGORIES.iter().find(|c| c.id == id)
}

/// The category the transcript extractor emits under. First registry
/// entry by construction, guarded by a test.
pub fn lexical_category() -> &'static RiskCategory {
    &RISK_CATEGORIES[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = RISK_CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), RISK_CATEGORIES.len());
    }

    #[test]
    fn lexical_category_exists() {
        let cat = category_by_id(LEXICAL_CATEGORY_ID).unwrap();
        assert_eq!(cat.name, "Profanity");
        assert_eq!(cat.severity, Severity::Medium);
    }

    #[test]
    fn lexical_category_is_first_entry() {
        assert_eq!(lexical_category().id, LEXICAL_CATEGORY_ID);
    }

    #[test]
    fn every_category_has_queries() {
        for cat in RISK_CATEGORIES {
            assert!(!cat.search_queries.is_empty(), "{} has no queries", cat.id);
        }
    }
}
