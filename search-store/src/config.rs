//! Runtime configuration for the search engine connection and index.

use crate::errors::SearchError;

/// Configuration for the search-store adapter.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Meilisearch HTTP endpoint, e.g. `http://localhost:7700`.
    pub url: String,
    /// Optional master/admin key; sent as a bearer token when present.
    pub api_key: Option<String>,
    /// Target index uid.
    pub index_uid: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Document upsert batch size.
    pub upsert_batch: usize,
    /// Max seconds to wait for background indexing after an upsert.
    pub max_index_wait_secs: u64,
    /// Poll interval (seconds) while waiting for indexing to finish.
    pub poll_interval_secs: u64,
}

impl SearchConfig {
    /// Creates a default config for the given endpoint and index uid.
    pub fn new_default(url: impl Into<String>, index_uid: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            index_uid: index_uid.into(),
            timeout_secs: 30,
            upsert_batch: 100,
            max_index_wait_secs: 30,
            poll_interval_secs: 1,
        }
    }

    /// Builds the config from environment variables with defaults:
    /// `MEILISEARCH_URL` (default `http://localhost:7700`),
    /// `MEILISEARCH_MASTER_KEY` (optional), `INDEX_NAME`
    /// (default `ecommerce_orders`).
    pub fn from_env() -> Self {
        let mut cfg = Self::new_default(
            env_or("MEILISEARCH_URL", "http://localhost:7700"),
            env_or("INDEX_NAME", "ecommerce_orders"),
        );
        cfg.api_key = std::env::var("MEILISEARCH_MASTER_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        cfg
    }

    /// Validates config values.
    ///
    /// # Errors
    /// Returns [`SearchError::Config`] on empty url/index or a zero batch size.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.url.trim().is_empty() {
            return Err(SearchError::Config("url is empty".into()));
        }
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(SearchError::Config(
                "url must start with http:// or https://".into(),
            ));
        }
        if self.index_uid.trim().is_empty() {
            return Err(SearchError::Config("index_uid is empty".into()));
        }
        if self.upsert_batch == 0 {
            return Err(SearchError::Config("upsert_batch must be > 0".into()));
        }
        Ok(())
    }
}

fn env_or(key: &str, dflt: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| dflt.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = SearchConfig::new_default("http://localhost:7700", "ecommerce_orders");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let mut cfg = SearchConfig::new_default("localhost:7700", "orders");
        assert!(cfg.validate().is_err());

        cfg.url = "http://localhost:7700".into();
        cfg.upsert_batch = 0;
        assert!(cfg.validate().is_err());

        cfg.upsert_batch = 100;
        cfg.index_uid = " ".into();
        assert!(cfg.validate().is_err());
    }
}
