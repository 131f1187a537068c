//! Normalized result shapes produced by the adapter.
//!
//! The engine's wire payloads carry optional statistics; this module is where
//! they are pinned down to the explicit shapes the rest of the system relies
//! on. Callers never see an absent hit list or missing counters.

use order_data::OrderDocument;
use serde::{Deserialize, Serialize};

/// Search results with guaranteed statistics.
#[derive(Clone, Debug, Default)]
pub struct SearchResults {
    /// Hits in engine relevance order.
    pub hits: Vec<OrderDocument>,
    /// Engine-estimated total; falls back to `hits.len()` when unreported.
    pub estimated_total_hits: u64,
    /// Engine-side processing time; 0 when unreported.
    pub processing_time_ms: u64,
}

impl SearchResults {
    /// The well-formed empty result set.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Index statistics in a single explicit shape.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    #[serde(default)]
    pub number_of_documents: u64,
    #[serde(default)]
    pub is_indexing: bool,
}

/// Raw search response as returned by the engine.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSearchResponse {
    #[serde(default)]
    pub hits: Vec<OrderDocument>,
    #[serde(default)]
    pub estimated_total_hits: Option<u64>,
    #[serde(default)]
    pub processing_time_ms: Option<u64>,
}

impl RawSearchResponse {
    /// Normalizes the wire payload into [`SearchResults`].
    pub(crate) fn normalize(self) -> SearchResults {
        let estimated_total_hits = self
            .estimated_total_hits
            .unwrap_or(self.hits.len() as u64);
        SearchResults {
            estimated_total_hits,
            processing_time_ms: self.processing_time_ms.unwrap_or(0),
            hits: self.hits,
        }
    }
}
