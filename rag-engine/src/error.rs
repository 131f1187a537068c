//! Typed error for the engine crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Errors from loading or parsing the order dataset.
    #[error("data error: {0}")]
    Data(#[from] order_data::OrderDataError),

    /// Errors from the search-store adapter (setup-time only; query-time
    /// search failures are degraded, not raised).
    #[error("search error: {0}")]
    Search(#[from] search_store::SearchError),

    /// Errors from the LLM adapter.
    #[error("llm error: {0}")]
    Llm(#[from] llm_service::LlmError),

    /// The search engine did not answer its health probe at setup.
    #[error("search engine is not reachable at {0}")]
    EngineUnavailable(String),
}
