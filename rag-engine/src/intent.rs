//! Binary query intent classification via keyword-overlap scoring.
//!
//! A query is either personal shopping or business analytics; the label
//! gates which document rendering (and whether profit figures) the rest of
//! the pipeline exposes. Pure and deterministic, no external calls.

use serde::Serialize;

/// Detected purpose of a user query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QueryIntent {
    /// Consumer shopping context; consumer renderings only, no profit data.
    Personal,
    /// Business analytics context; business renderings with profit data.
    Business,
}

impl QueryIntent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "PERSONAL",
            Self::Business => "BUSINESS",
        }
    }
}

/// Keywords signaling a personal shopping context.
const PERSONAL_KEYWORDS: &[&str] = &[
    "shopping",
    "buy",
    "buying",
    "purchase",
    "purchasing",
    "gift",
    "gifts",
    "present",
    "presents",
    "souvenir",
    "souvenirs",
    "vacation",
    "travel",
    "trip",
    "holiday",
    "goa",
    "beach",
    "personal",
    "family",
    "friends",
    "myself",
    "me",
    "recommend",
    "recommendation",
    "suggest",
    "suggestion",
    "what to buy",
    "what should i buy",
    "what can i take",
    "need",
    "want",
    "looking for",
    "searching for",
];

/// Keywords signaling a business analytics context.
const BUSINESS_KEYWORDS: &[&str] = &[
    "business",
    "profit",
    "profitability",
    "revenue",
    "loss",
    "margin",
    "margins",
    "analysis",
    "analytics",
    "performance",
    "inventory",
    "stock",
    "quarterly",
    "annual",
    "strategy",
    "management",
    "optimization",
    "efficiency",
    "roi",
    "highest",
    "best",
    "top",
    "most profitable",
    "profit margins",
    "financial",
    "commercial",
    "enterprise",
    "corporate",
];

/// Classifies `query` as personal or business.
///
/// Counts how many keywords of each set occur (case-insensitive, substring)
/// in the query; business wins only with a strictly higher, non-zero score.
/// Personal is the default and the tie-break winner, so an empty query is
/// personal.
pub fn classify(query: &str) -> QueryIntent {
    let query_lower = query.to_lowercase();

    let personal_matches = count_matches(&query_lower, PERSONAL_KEYWORDS);
    let business_matches = count_matches(&query_lower, BUSINESS_KEYWORDS);

    if business_matches > personal_matches && business_matches > 0 {
        QueryIntent::Business
    } else {
        QueryIntent::Personal
    }
}

fn count_matches(query_lower: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| query_lower.contains(*k)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_only_keywords_classify_as_business() {
        assert_eq!(
            classify("show me profit margins by category"),
            QueryIntent::Business
        );
        assert_eq!(
            classify("quarterly revenue analysis for electronics inventory"),
            QueryIntent::Business
        );
    }

    #[test]
    fn personal_only_keywords_classify_as_personal() {
        assert_eq!(
            classify("I need a gift for my vacation"),
            QueryIntent::Personal
        );
        assert_eq!(
            classify("what should i buy for my family trip to goa"),
            QueryIntent::Personal
        );
    }

    #[test]
    fn empty_query_defaults_to_personal() {
        assert_eq!(classify(""), QueryIntent::Personal);
    }

    #[test]
    fn neutral_query_defaults_to_personal() {
        assert_eq!(classify("chairs"), QueryIntent::Personal);
    }

    #[test]
    fn classification_is_deterministic() {
        let query = "most profitable sub-category this year";
        let first = classify(query);
        for _ in 0..10 {
            assert_eq!(classify(query), first);
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("PROFIT MARGINS by category"), QueryIntent::Business);
    }

    #[test]
    fn serialized_label_is_uppercase() {
        assert_eq!(
            serde_json::to_string(&QueryIntent::Business).unwrap(),
            "\"BUSINESS\""
        );
        assert_eq!(QueryIntent::Personal.as_str(), "PERSONAL");
    }
}
