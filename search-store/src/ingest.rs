//! Index rebuild pipeline: drop → create → configure → batched upsert → wait.
//!
//! The index is fully rebuilt on every setup run; there are no incremental
//! update semantics. The bounded poll loop at the end is the only wait logic
//! in the system.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::SearchConfig;
use crate::errors::SearchError;
use crate::meili_facade::{IndexSettings, MeiliFacade};

use order_data::OrderDocument;

/// Attributes matched by full-text search, in relevance order.
const SEARCHABLE_ATTRIBUTES: &[&str] = &[
    "content",
    "category",
    "sub_category",
    "order_id",
    "amount",
    "profit",
    "quantity",
];

/// Attributes usable in filter expressions.
const FILTERABLE_ATTRIBUTES: &[&str] = &[
    "category",
    "sub_category",
    "amount_range",
    "profit_range",
    "quantity_range",
];

/// Attributes usable in sort specs.
const SORTABLE_ATTRIBUTES: &[&str] = &["amount", "profit", "quantity"];

/// Grace period between dropping the old index and creating the new one,
/// letting the engine settle the asynchronous delete task.
const DELETE_SETTLE_SECS: u64 = 2;

/// Drops any existing index, recreates it, pushes settings, then upserts all
/// documents in batches and waits for background indexing to finish.
///
/// Returns the number of documents submitted.
///
/// # Errors
/// Any failure here is a setup error and propagates to the caller.
pub async fn rebuild_index(
    cfg: &SearchConfig,
    client: &MeiliFacade,
    documents: &[OrderDocument],
) -> Result<usize, SearchError> {
    if client.index_exists().await? {
        client.delete_index().await?;
        sleep(Duration::from_secs(DELETE_SETTLE_SECS)).await;
    }

    client.create_index().await?;
    client
        .update_settings(&IndexSettings {
            searchable_attributes: SEARCHABLE_ATTRIBUTES,
            filterable_attributes: FILTERABLE_ATTRIBUTES,
            sortable_attributes: SORTABLE_ATTRIBUTES,
        })
        .await?;

    add_documents(cfg, client, documents).await?;
    Ok(documents.len())
}

/// Upserts `documents` in batches of `cfg.upsert_batch`, then polls index
/// stats until the engine reports indexing finished (bounded by
/// `cfg.max_index_wait_secs`).
pub async fn add_documents(
    cfg: &SearchConfig,
    client: &MeiliFacade,
    documents: &[OrderDocument],
) -> Result<(), SearchError> {
    info!(count = documents.len(), "adding documents to index");

    let batch_size = cfg.upsert_batch.max(1);
    for batch in documents.chunks(batch_size) {
        client.add_documents(batch).await?;
    }

    wait_for_indexing(cfg, client).await
}

/// Bounded poll loop on index stats until `is_indexing` clears.
///
/// Times out softly: a still-indexing engine after the deadline is logged,
/// not an error, since queries against a partially indexed set degrade
/// gracefully.
async fn wait_for_indexing(cfg: &SearchConfig, client: &MeiliFacade) -> Result<(), SearchError> {
    let mut waited = 0u64;
    while waited < cfg.max_index_wait_secs {
        let stats = client.stats().await?;
        if !stats.is_indexing {
            debug!(waited_secs = waited, "indexing completed");
            return Ok(());
        }
        sleep(Duration::from_secs(cfg.poll_interval_secs)).await;
        waited += cfg.poll_interval_secs;
    }
    warn!(
        max_wait_secs = cfg.max_index_wait_secs,
        "indexing still in progress after max wait"
    );
    Ok(())
}
