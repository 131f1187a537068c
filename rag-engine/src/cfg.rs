//! Runtime configuration for the query pipeline, loaded from environment
//! variables with defaults.

use std::path::PathBuf;

/// Config bag for the engine. All fields have defaults via [`from_env`].
///
/// [`from_env`]: EngineConfig::from_env
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Default number of hits a query retrieves.
    pub max_search_results: usize,
    /// Path of the order CSV loaded at setup time.
    pub data_file: PathBuf,
}

impl EngineConfig {
    /// Build from environment variables with sensible defaults:
    /// `MAX_SEARCH_RESULTS` (default 5), `DATA_FILE`
    /// (default `data/Order Details.csv`).
    pub fn from_env() -> Self {
        Self {
            max_search_results: parse("MAX_SEARCH_RESULTS", 5usize),
            data_file: env("DATA_FILE", "data/Order Details.csv").into(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_search_results: 5,
            data_file: "data/Order Details.csv".into(),
        }
    }
}

fn env(k: &str, dflt: &str) -> String {
    std::env::var(k).unwrap_or_else(|_| dflt.to_string())
}

fn parse<T: std::str::FromStr>(k: &str, dflt: T) -> T {
    std::env::var(k)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(dflt)
}
