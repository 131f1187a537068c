//! Response envelope types returned by the query pipeline.

use order_data::OrderDocument;
use search_store::IndexStats;
use serde::Serialize;

use crate::intent::QueryIntent;
use crate::prompt::select_content;

/// Final per-query response: answer, sources, timings, search stats.
#[derive(Clone, Debug, Serialize)]
pub struct QueryResponse {
    pub query: String,
    pub answer: String,
    /// Detected intent label (`PERSONAL` / `BUSINESS`).
    pub intent: QueryIntent,
    pub sources: Vec<SourceSummary>,
    /// Seconds spent in retrieval.
    pub search_time: f64,
    /// Seconds spent in generation; 0.0 when generation was skipped.
    pub llm_time: f64,
    /// Seconds for the whole query.
    pub total_time: f64,
    pub search_stats: SearchStats,
}

/// One retrieved source, summarized with the intent-appropriate rendering.
#[derive(Clone, Debug, Serialize)]
pub struct SourceSummary {
    pub order_id: String,
    pub category: String,
    pub sub_category: String,
    pub amount: f64,
    /// Signed profit string (`+$X.XX` / `-$X.XX` / `$0.00`); only present
    /// for business intent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit: Option<String>,
    pub content: String,
}

impl SourceSummary {
    /// Summarizes a hit for the given intent. Profit figures are exposed
    /// only to business queries.
    pub fn from_document(doc: &OrderDocument, intent: QueryIntent) -> Self {
        let profit = match intent {
            QueryIntent::Business => Some(format_signed_profit(doc.profit)),
            QueryIntent::Personal => None,
        };
        Self {
            order_id: doc.order_id.clone(),
            category: doc.category.clone(),
            sub_category: doc.sub_category.clone(),
            amount: doc.amount,
            profit,
            content: select_content(doc, intent).to_string(),
        }
    }
}

/// Engine-side statistics attached to a response.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct SearchStats {
    pub total_hits: u64,
    pub processing_time_ms: u64,
}

/// Component health snapshot.
#[derive(Clone, Debug, Serialize)]
pub struct SystemInfo {
    pub search_engine_healthy: bool,
    pub search_engine_url: String,
    pub llm_healthy: bool,
    pub model: String,
    /// Absent when the engine cannot be queried.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_stats: Option<IndexStats>,
}

/// Formats a profit value with an explicit sign: `+$X.XX`, `-$X.XX`, or
/// `$0.00` for break-even.
pub fn format_signed_profit(profit: f64) -> String {
    if profit > 0.0 {
        format!("+${profit:.2}")
    } else if profit < 0.0 {
        format!("-${:.2}", profit.abs())
    } else {
        "$0.00".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_profit_formatting() {
        assert_eq!(format_signed_profit(12.345), "+$12.35");
        assert_eq!(format_signed_profit(-5.0), "-$5.00");
        assert_eq!(format_signed_profit(0.0), "$0.00");
    }

    fn doc() -> OrderDocument {
        OrderDocument {
            id: "order_0".to_string(),
            order_id: "B-25601".to_string(),
            amount: 50.0,
            profit: -5.0,
            quantity: 1,
            category: "Furniture".to_string(),
            sub_category: "Chairs".to_string(),
            content: "consumer text".to_string(),
            business_content: "business text".to_string(),
            amount_range: order_data::AmountRange::Low,
            profit_range: order_data::ProfitRange::Loss,
            quantity_range: order_data::QuantityRange::Small,
        }
    }

    #[test]
    fn personal_summary_hides_profit() {
        let s = SourceSummary::from_document(&doc(), QueryIntent::Personal);
        assert!(s.profit.is_none());
        assert_eq!(s.content, "consumer text");
    }

    #[test]
    fn business_summary_shows_signed_profit() {
        let s = SourceSummary::from_document(&doc(), QueryIntent::Business);
        assert_eq!(s.profit.as_deref(), Some("-$5.00"));
        assert_eq!(s.content, "business text");
    }
}
