//! Core RAG query engine for the e-commerce order assistant.
//!
//! Per query: classify the intent (personal shopping vs. business
//! analytics), run the multi-stage fallback retrieval against the search
//! store, assemble a context-separated prompt, call the hosted LLM once, and
//! wrap everything in a response envelope with timings and search stats.
//!
//! [`RagPipeline`] is the single entry point recommended for application
//! code; the pure pieces ([`classify`], [`build_messages`],
//! [`smart_search`]) are exported for direct use.

mod categories;
mod cfg;
mod error;
mod intent;
mod pipeline;
mod prompt;
mod response;
mod retrieve;
pub mod telemetry;

pub use cfg::EngineConfig;
pub use error::EngineError;
pub use intent::{QueryIntent, classify};
pub use pipeline::{NO_RESULTS_ANSWER, QueryOptions, RagPipeline};
pub use prompt::{SYSTEM_PROMPT, USER_PROMPT_TEMPLATE, build_messages};
pub use response::{
    QueryResponse, SearchStats, SourceSummary, SystemInfo, format_signed_profit,
};
pub use retrieve::smart_search;
pub use telemetry::LoggingConfig;
