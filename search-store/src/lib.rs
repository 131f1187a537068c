//! High-level search facade: index lifecycle + querying over Meilisearch.
//!
//! This crate provides a clean API to:
//! - Rebuild the order index from scratch (drop, create, configure, upsert)
//! - Run full-text searches with structured filters and normalized stats
//!
//! The engine's endpoints and wire payloads stay behind [`MeiliFacade`]; the
//! rest of the application only sees typed results.

mod config;
mod errors;
mod filter;
mod ingest;
mod meili_facade;
mod results;

pub use config::SearchConfig;
pub use errors::SearchError;
pub use filter::{CmpOp, FilterExpr};
pub use results::{IndexStats, SearchResults};

use meili_facade::MeiliFacade;
use order_data::OrderDocument;
use tracing::trace;

/// High-level facade that wires configuration and the engine client.
///
/// This is the single entry point recommended for application code.
pub struct SearchStore {
    cfg: SearchConfig,
    client: MeiliFacade,
}

impl SearchStore {
    /// Constructs a new store from the given configuration.
    ///
    /// # Errors
    /// Returns [`SearchError::Config`] on invalid configuration.
    pub fn new(cfg: SearchConfig) -> Result<Self, SearchError> {
        trace!("SearchStore::new index={}", cfg.index_uid);
        let client = MeiliFacade::new(&cfg)?;
        Ok(Self { cfg, client })
    }

    /// Returns `true` when the engine is reachable and healthy.
    pub async fn health(&self) -> bool {
        self.client.health().await
    }

    /// Explicit index existence check.
    ///
    /// # Errors
    /// Returns transport errors; a missing index is `Ok(false)`.
    pub async fn index_exists(&self) -> Result<bool, SearchError> {
        self.client.index_exists().await
    }

    /// Creates the index when it does not exist yet.
    ///
    /// # Errors
    /// Returns transport/status errors from the existence check or creation.
    pub async fn ensure_index(&self) -> Result<(), SearchError> {
        if !self.client.index_exists().await? {
            self.client.create_index().await?;
        }
        Ok(())
    }

    /// Full index rebuild from the given document set.
    ///
    /// Returns the number of documents submitted.
    ///
    /// # Errors
    /// Setup failures propagate; nothing here is degraded.
    pub async fn rebuild_index(&self, documents: &[OrderDocument]) -> Result<usize, SearchError> {
        ingest::rebuild_index(&self.cfg, &self.client, documents).await
    }

    /// One search call with normalized statistics.
    ///
    /// # Errors
    /// Returns transport/status/decode errors; callers own any
    /// degrade-to-empty policy.
    pub async fn search(
        &self,
        query: &str,
        limit: usize,
        filter: Option<&FilterExpr>,
    ) -> Result<SearchResults, SearchError> {
        trace!("SearchStore::search limit={limit} filtered={}", filter.is_some());
        self.client.search(query, limit, filter).await
    }

    /// Index statistics in the adapter's explicit shape.
    pub async fn index_stats(&self) -> Result<IndexStats, SearchError> {
        self.client.stats().await
    }

    /// The configured index uid.
    pub fn index_uid(&self) -> &str {
        &self.cfg.index_uid
    }

    /// The configured engine endpoint.
    pub fn url(&self) -> &str {
        &self.cfg.url
    }
}
