//! Top-level query pipeline: retrieval → intent → prompt → generation →
//! response envelope.
//!
//! Per query the flow is straight-line and request-at-a-time: search is
//! timed, an empty hit set short-circuits to a canned answer with zero
//! generation time, otherwise a single LLM call produces the final answer.
//! Nothing is shared or persisted across queries.

use std::time::Instant;

use llm_service::{GenerateOptions, LlmConfig, OpenRouterService};
use search_store::{FilterExpr, SearchConfig, SearchStore};
use tracing::{info, warn};

use crate::cfg::EngineConfig;
use crate::error::EngineError;
use crate::intent::classify;
use crate::prompt::build_messages;
use crate::response::{QueryResponse, SearchStats, SourceSummary, SystemInfo};
use crate::retrieve::smart_search;

/// Canned answer for the no-results terminal state.
pub const NO_RESULTS_ANSWER: &str = "I couldn't find any relevant data to answer \
your question. Please try rephrasing your query.";

/// Sampling temperature for answer generation.
const GENERATION_TEMPERATURE: f32 = 0.3;
/// Token budget for answer generation.
const GENERATION_MAX_TOKENS: u32 = 800;

/// Per-query overrides; unset fields fall back to the engine config.
#[derive(Clone, Debug, Default)]
pub struct QueryOptions {
    /// Desired hit count (default: `EngineConfig::max_search_results`).
    pub max_results: Option<usize>,
    /// Extra filter applied to the direct search stage.
    pub filter: Option<FilterExpr>,
    /// Model identifier override for this query.
    pub model: Option<String>,
}

/// The assembled RAG system: search store + LLM service + config.
pub struct RagPipeline {
    cfg: EngineConfig,
    store: SearchStore,
    llm: OpenRouterService,
}

impl RagPipeline {
    /// Wires the pipeline from explicit configs.
    ///
    /// # Errors
    /// Returns config/validation errors from either adapter.
    pub fn new(
        cfg: EngineConfig,
        search_cfg: SearchConfig,
        llm_cfg: LlmConfig,
    ) -> Result<Self, EngineError> {
        let store = SearchStore::new(search_cfg)?;
        let llm = OpenRouterService::new(llm_cfg)?;
        Ok(Self { cfg, store, llm })
    }

    /// Wires the pipeline from environment variables.
    ///
    /// # Errors
    /// A missing `OPENROUTER_API_KEY` surfaces here as a fatal config error.
    pub fn from_env() -> Result<Self, EngineError> {
        Self::new(
            EngineConfig::from_env(),
            SearchConfig::from_env(),
            LlmConfig::from_env()?,
        )
    }

    /// Sets up the search index: health check, full data load, full rebuild.
    ///
    /// Returns the number of documents indexed.
    ///
    /// # Errors
    /// Setup failures are fatal and propagate: unreachable engine, missing
    /// or malformed data file, failed index operations.
    pub async fn setup_index(&self) -> Result<usize, EngineError> {
        if !self.store.health().await {
            return Err(EngineError::EngineUnavailable(self.store.url().to_string()));
        }

        let documents = order_data::load_documents(&self.cfg.data_file)?;
        let count = self.store.rebuild_index(&documents).await?;
        info!(count, index = self.store.index_uid(), "index rebuilt");
        Ok(count)
    }

    /// Processes one user query end to end.
    ///
    /// Retrieval never fails (degrade-to-empty); an empty hit set returns
    /// the canned answer with `llm_time == 0.0`. A generation failure is an
    /// error for this query only.
    ///
    /// # Errors
    /// Returns [`EngineError::Llm`] when the generation call fails.
    pub async fn query(
        &self,
        user_query: &str,
        opts: QueryOptions,
    ) -> Result<QueryResponse, EngineError> {
        let started = Instant::now();
        info!(query = user_query, "processing query");

        let max_results = opts.max_results.unwrap_or(self.cfg.max_search_results);
        let results = smart_search(&self.store, user_query, max_results, opts.filter.as_ref()).await;
        let search_time = started.elapsed().as_secs_f64();

        let search_stats = SearchStats {
            total_hits: results.estimated_total_hits,
            processing_time_ms: results.processing_time_ms,
        };

        let intent = classify(user_query);

        if results.hits.is_empty() {
            warn!("no relevant documents found for query");
            return Ok(QueryResponse {
                query: user_query.to_string(),
                answer: NO_RESULTS_ANSWER.to_string(),
                intent,
                sources: Vec::new(),
                search_time,
                llm_time: 0.0,
                total_time: started.elapsed().as_secs_f64(),
                search_stats: SearchStats {
                    total_hits: 0,
                    processing_time_ms: 0,
                },
            });
        }

        let messages = build_messages(user_query, &results.hits, intent);

        let llm_started = Instant::now();
        let answer = self
            .llm
            .generate(
                &messages,
                &GenerateOptions {
                    model: opts.model,
                    temperature: Some(GENERATION_TEMPERATURE),
                    max_tokens: Some(GENERATION_MAX_TOKENS),
                },
            )
            .await?;
        let llm_time = llm_started.elapsed().as_secs_f64();

        let sources = results
            .hits
            .iter()
            .map(|doc| SourceSummary::from_document(doc, intent))
            .collect();

        let total_time = started.elapsed().as_secs_f64();
        info!(
            intent = intent.as_str(),
            search_time, llm_time, total_time, "query completed"
        );

        Ok(QueryResponse {
            query: user_query.to_string(),
            answer,
            intent,
            sources,
            search_time,
            llm_time,
            total_time,
            search_stats,
        })
    }

    /// Component health snapshot: engine reachability, LLM reachability and
    /// index statistics when available.
    pub async fn system_info(&self) -> SystemInfo {
        let search_engine_healthy = self.store.health().await;
        let index_stats = match self.store.index_stats().await {
            Ok(stats) => Some(stats),
            Err(_) => None,
        };
        SystemInfo {
            search_engine_healthy,
            search_engine_url: self.store.url().to_string(),
            llm_healthy: self.llm.health().await,
            model: self.llm.model().to_string(),
            index_stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::QueryIntent;

    fn offline_pipeline() -> RagPipeline {
        let search_cfg = SearchConfig::new_default("http://127.0.0.1:9", "ecommerce_orders");
        let llm_cfg = LlmConfig {
            model: "anthropic/claude-3-haiku".into(),
            endpoint: "http://127.0.0.1:9".into(),
            api_key: "sk-test".into(),
            max_tokens: Some(800),
            temperature: Some(0.3),
            timeout_secs: 1,
        };
        RagPipeline::new(EngineConfig::default(), search_cfg, llm_cfg).unwrap()
    }

    // A dead search engine must degrade to the canned answer: no error, no
    // LLM call, total time still measured.
    #[tokio::test]
    async fn dead_engine_yields_canned_answer() {
        let pipeline = offline_pipeline();
        let response = pipeline
            .query("what chairs should i buy", QueryOptions::default())
            .await
            .unwrap();

        assert_eq!(response.answer, NO_RESULTS_ANSWER);
        assert!(response.sources.is_empty());
        assert_eq!(response.llm_time, 0.0);
        assert!(response.total_time > 0.0);
        assert!(response.search_time > 0.0);
        assert_eq!(response.search_stats.total_hits, 0);
        assert_eq!(response.search_stats.processing_time_ms, 0);
        assert_eq!(response.intent, QueryIntent::Personal);
    }

    #[tokio::test]
    async fn setup_fails_fast_when_engine_unreachable() {
        let pipeline = offline_pipeline();
        assert!(matches!(
            pipeline.setup_index().await,
            Err(EngineError::EngineUnavailable(_))
        ));
    }
}
