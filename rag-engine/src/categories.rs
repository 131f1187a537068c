//! Static category table used by the retrieval fallback ladder.
//!
//! One table for both trigger matching and filter construction; `name` is the
//! lowercase query form, `label` the indexed `category` value.

/// One known product category and its trigger keywords.
pub struct CategoryRule {
    /// Lowercase form, usable as a standalone search query.
    pub name: &'static str,
    /// Indexed category value, used in equality filters.
    pub label: &'static str,
    /// Query substrings that select this category.
    pub keywords: &'static [&'static str],
}

/// All known categories, in fallback iteration order.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        name: "clothing",
        label: "Clothing",
        keywords: &[
            "clothing",
            "clothes",
            "dress",
            "shirt",
            "trousers",
            "saree",
            "stole",
            "kurti",
            "hankerchief",
            "t-shirt",
            "gift",
            "family",
            "personal",
        ],
    },
    CategoryRule {
        name: "furniture",
        label: "Furniture",
        keywords: &[
            "furniture",
            "chair",
            "chairs",
            "bookcase",
            "bookcases",
            "table",
            "desk",
            "home office",
            "office",
            "home",
        ],
    },
    CategoryRule {
        name: "electronics",
        label: "Electronics",
        keywords: &[
            "electronics",
            "electronic",
            "phone",
            "phones",
            "printer",
            "printers",
            "game",
            "games",
            "affordable electronics",
            "tech",
            "gadget",
        ],
    },
];

/// Fixed domain terms tried first in the term-fallback stage.
pub const FALLBACK_TERMS: &[&str] = &[
    "clothing",
    "furniture",
    "electronics",
    "phone",
    "chair",
    "saree",
    "stole",
    "affordable",
    "gift",
    "office",
];

/// Returns the rules whose keywords intersect the lower-cased query.
///
/// An empty result means no category was detected; callers then fall back to
/// searching all categories.
pub fn matching_rules(query_lower: &str) -> Vec<&'static CategoryRule> {
    CATEGORY_RULES
        .iter()
        .filter(|rule| rule.keywords.iter().any(|k| query_lower.contains(k)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chair_query_selects_furniture() {
        let rules = matching_rules("what chairs should i buy for my vacation home");
        // "chair" hits Furniture; "gift"/"family"/"personal" are absent, but
        // "home" also only lives in the furniture list.
        assert!(rules.iter().any(|r| r.label == "Furniture"));
        assert!(!rules.iter().any(|r| r.label == "Electronics"));
    }

    #[test]
    fn unknown_terms_match_nothing() {
        assert!(matching_rules("weather forecast tomorrow").is_empty());
    }

    #[test]
    fn multiple_categories_can_match() {
        let rules = matching_rules("affordable electronics or a dress");
        let labels: Vec<_> = rules.iter().map(|r| r.label).collect();
        assert!(labels.contains(&"Electronics"));
        assert!(labels.contains(&"Clothing"));
    }

    #[test]
    fn table_iteration_order_is_stable() {
        let labels: Vec<_> = CATEGORY_RULES.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Clothing", "Furniture", "Electronics"]);
    }
}
