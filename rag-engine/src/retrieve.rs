//! Multi-stage fallback retrieval over the search store.
//!
//! Three tiers, short-circuited as soon as `max_results` hits accumulate:
//! direct search, category-guided search, term-by-term fallback. Identity is
//! the document id; first-seen wins on collision and engine relevance order
//! is preserved within a stage.
//!
//! Any underlying failure degrades to the well-formed empty result set — a
//! single query must never crash the pipeline.

use order_data::OrderDocument;
use search_store::{FilterExpr, SearchError, SearchResults, SearchStore};
use tracing::{debug, error, info, warn};

use crate::categories::{CATEGORY_RULES, FALLBACK_TERMS, matching_rules};

/// Runs the fallback ladder and returns at most `max_results` hits.
///
/// Infallible by design: failures are logged and converted to the empty
/// result shape (hits `[]`, zero stats).
pub async fn smart_search(
    store: &SearchStore,
    query: &str,
    max_results: usize,
    filter: Option<&FilterExpr>,
) -> SearchResults {
    match smart_search_inner(store, query, max_results, filter).await {
        Ok(results) => {
            info!(hits = results.hits.len(), "final search results");
            results
        }
        Err(e) => {
            error!(error = %e, "smart search failed, degrading to empty result");
            SearchResults::empty()
        }
    }
}

async fn smart_search_inner(
    store: &SearchStore,
    query: &str,
    max_results: usize,
    filter: Option<&FilterExpr>,
) -> Result<SearchResults, SearchError> {
    let query_lower = query.to_lowercase();

    // Stage 1: direct search with the caller-supplied filter.
    let mut results = store.search(query, max_results, filter).await?;
    info!(hits = results.hits.len(), "direct search completed");

    // Stage 2: category-guided search when the direct pass under-fills.
    if results.hits.len() < max_results {
        debug!("insufficient results, doing category-guided search");

        let rules = {
            let matched = matching_rules(&query_lower);
            if matched.is_empty() {
                debug!("no specific category detected, searching all categories");
                CATEGORY_RULES.iter().collect()
            } else {
                matched
            }
        };

        let mut accumulated: Vec<OrderDocument> = Vec::new();
        for rule in rules {
            let category_filter = FilterExpr::eq("category", rule.label);

            let by_query = store
                .search(query, max_results * 2, Some(&category_filter))
                .await?;
            if !by_query.hits.is_empty() {
                debug!(category = rule.label, hits = by_query.hits.len(), "category search");
                accumulated.extend(by_query.hits);
            } else {
                // Broader retry: the category name itself as the query.
                let by_name = store
                    .search(rule.name, max_results, Some(&category_filter))
                    .await?;
                if !by_name.hits.is_empty() {
                    debug!(category = rule.label, hits = by_name.hits.len(), "broader category search");
                    accumulated.extend(by_name.hits);
                }
            }
        }

        let unique = dedup_by_id(accumulated, max_results);
        if unique.is_empty() {
            warn!("category search found no results");
        } else {
            debug!(hits = unique.len(), "category search completed");
            // Engine stats stay those of the direct pass.
            results.hits = unique;
        }
    }

    // Stage 3: term fallback when still short.
    if results.hits.len() < max_results {
        debug!("doing final term-fallback search");

        let query_words = query_lower.split_whitespace().filter(|w| w.len() > 2);
        let terms: Vec<&str> = FALLBACK_TERMS.iter().copied().chain(query_words).collect();

        for term in terms {
            if results.hits.len() >= max_results {
                break;
            }
            let needed = max_results - results.hits.len();
            let term_results = store.search(term, needed, None).await?;
            if term_results.hits.is_empty() {
                continue;
            }
            if results.hits.is_empty() {
                // Nothing accumulated yet: adopt this result wholesale.
                results = term_results;
            } else {
                merge_unique(&mut results.hits, term_results.hits, max_results);
            }
        }
        debug!(hits = results.hits.len(), "term-fallback search completed");
    }

    Ok(results)
}

/// Deduplicates `hits` by document id, keeping the first occurrence and
/// first-seen order, truncated to `cap`.
fn dedup_by_id(hits: Vec<OrderDocument>, cap: usize) -> Vec<OrderDocument> {
    let mut unique: Vec<OrderDocument> = Vec::new();
    for hit in hits {
        if unique.len() >= cap {
            break;
        }
        if !unique.iter().any(|u| u.id == hit.id) {
            unique.push(hit);
        }
    }
    unique
}

/// Merges not-yet-seen hits into `existing`, preserving order of first
/// appearance and never growing beyond `cap`.
fn merge_unique(existing: &mut Vec<OrderDocument>, new_hits: Vec<OrderDocument>, cap: usize) {
    for hit in new_hits {
        if existing.len() >= cap {
            break;
        }
        if !existing.iter().any(|u| u.id == hit.id) {
            existing.push(hit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_store::SearchConfig;

    fn doc(id: &str) -> OrderDocument {
        OrderDocument {
            id: id.to_string(),
            order_id: format!("B-{id}"),
            amount: 100.0,
            profit: 10.0,
            quantity: 3,
            category: "Furniture".to_string(),
            sub_category: "Chairs".to_string(),
            content: String::new(),
            business_content: String::new(),
            amount_range: order_data::AmountRange::Medium,
            profit_range: order_data::ProfitRange::LowProfit,
            quantity_range: order_data::QuantityRange::Medium,
        }
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let hits = vec![doc("a"), doc("b"), doc("a"), doc("c"), doc("b")];
        let unique = dedup_by_id(hits, 10);
        let ids: Vec<_> = unique.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn dedup_truncates_at_cap() {
        let hits = vec![doc("a"), doc("b"), doc("c"), doc("d")];
        assert_eq!(dedup_by_id(hits, 2).len(), 2);
    }

    #[test]
    fn merge_skips_seen_ids_and_respects_cap() {
        let mut existing = vec![doc("a"), doc("b")];
        merge_unique(&mut existing, vec![doc("b"), doc("c"), doc("d")], 3);
        let ids: Vec<_> = existing.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn merge_over_batches_never_duplicates() {
        let batches = vec![
            vec![doc("1"), doc("2")],
            vec![doc("2"), doc("3"), doc("1")],
            vec![doc("4"), doc("4"), doc("5")],
        ];
        let mut merged: Vec<OrderDocument> = Vec::new();
        for batch in batches {
            merge_unique(&mut merged, batch, 100);
        }
        let ids: Vec<_> = merged.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    // The engine raising on every call must degrade to a well-formed empty
    // result, not an error. An unreachable loopback port stands in for a
    // broken engine.
    #[tokio::test]
    async fn failing_engine_degrades_to_empty() {
        let cfg = SearchConfig::new_default("http://127.0.0.1:9", "ecommerce_orders");
        let store = SearchStore::new(cfg).unwrap();

        let results = smart_search(&store, "chairs for the office", 5, None).await;
        assert!(results.hits.is_empty());
        assert_eq!(results.estimated_total_hits, 0);
        assert_eq!(results.processing_time_ms, 0);
    }
}
