//! Thin adapter around the Meilisearch HTTP API to isolate engine usage.
//!
//! This facade concentrates every engine interaction behind a minimal API and
//! keeps the rest of the application decoupled from the engine's endpoints and
//! wire payloads. It is also the only place that translates engine responses
//! into the explicit result/stats shapes from [`crate::results`].

use reqwest::{StatusCode, header};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::errors::{SearchError, make_snippet};
use crate::filter::FilterExpr;
use crate::results::{IndexStats, RawSearchResponse, SearchResults};

use order_data::OrderDocument;
use std::time::Duration;

/// Facade over the engine's HTTP API for one configured index.
pub struct MeiliFacade {
    http: reqwest::Client,
    base: String,
    index_uid: String,
}

impl MeiliFacade {
    /// Creates a new facade from the given configuration.
    ///
    /// Builds an HTTP client with the configured timeout; when an API key is
    /// present it is sent as a bearer token on every request.
    ///
    /// # Errors
    /// Returns [`SearchError::Config`] on invalid configuration and
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(cfg: &SearchConfig) -> Result<Self, SearchError> {
        cfg.validate()?;

        let mut headers = header::HeaderMap::new();
        if let Some(key) = &cfg.api_key {
            let value = header::HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|e| SearchError::Config(format!("invalid api key header: {e}")))?;
            headers.insert(header::AUTHORIZATION, value);
        }
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .default_headers(headers)
            .build()?;

        info!(
            url = %cfg.url,
            index = %cfg.index_uid,
            authenticated = cfg.api_key.is_some(),
            "search engine client initialized"
        );

        Ok(Self {
            http,
            base: cfg.url.trim_end_matches('/').to_string(),
            index_uid: cfg.index_uid.clone(),
        })
    }

    /// Returns `true` when the engine answers its health endpoint.
    pub async fn health(&self) -> bool {
        let url = format!("{}/health", self.base);
        match self.http.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                debug!(error = %e, "health check failed");
                false
            }
        }
    }

    /// Explicit existence check for the configured index.
    ///
    /// # Errors
    /// Returns an error on transport failures or unexpected statuses; a plain
    /// 404 means "does not exist" and is not an error.
    pub async fn index_exists(&self) -> Result<bool, SearchError> {
        let url = format!("{}/indexes/{}", self.base, self.index_uid);
        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if status.is_success() {
            Ok(true)
        } else if status == StatusCode::NOT_FOUND {
            Ok(false)
        } else {
            Err(status_error(status, url, resp).await)
        }
    }

    /// Creates the configured index with `id` as primary key.
    pub async fn create_index(&self) -> Result<(), SearchError> {
        let url = format!("{}/indexes", self.base);
        let body = CreateIndexRequest {
            uid: &self.index_uid,
            primary_key: "id",
        };
        let resp = self.http.post(&url).json(&body).send().await?;
        if !resp.status().is_success() {
            return Err(status_error(resp.status(), url, resp).await);
        }
        info!(index = %self.index_uid, "index created");
        Ok(())
    }

    /// Deletes the configured index. A missing index is not an error.
    pub async fn delete_index(&self) -> Result<(), SearchError> {
        let url = format!("{}/indexes/{}", self.base, self.index_uid);
        let resp = self.http.delete(&url).send().await?;
        let status = resp.status();
        if status.is_success() {
            info!(index = %self.index_uid, "index deleted");
            Ok(())
        } else if status == StatusCode::NOT_FOUND {
            Ok(())
        } else {
            Err(status_error(status, url, resp).await)
        }
    }

    /// Pushes searchable/filterable/sortable attribute settings.
    pub async fn update_settings(&self, settings: &IndexSettings) -> Result<(), SearchError> {
        let url = format!("{}/indexes/{}/settings", self.base, self.index_uid);
        let resp = self.http.patch(&url).json(settings).send().await?;
        if !resp.status().is_success() {
            return Err(status_error(resp.status(), url, resp).await);
        }
        debug!(index = %self.index_uid, "index settings updated");
        Ok(())
    }

    /// Upserts one batch of documents.
    pub async fn add_documents(&self, batch: &[OrderDocument]) -> Result<(), SearchError> {
        let url = format!("{}/indexes/{}/documents", self.base, self.index_uid);
        let resp = self.http.post(&url).json(batch).send().await?;
        if !resp.status().is_success() {
            return Err(status_error(resp.status(), url, resp).await);
        }
        debug!(count = batch.len(), "document batch accepted");
        Ok(())
    }

    /// Fetches index statistics in the adapter's explicit shape.
    pub async fn stats(&self) -> Result<IndexStats, SearchError> {
        let url = format!("{}/indexes/{}/stats", self.base, self.index_uid);
        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(status_error(resp.status(), url, resp).await);
        }
        resp.json::<IndexStats>()
            .await
            .map_err(|e| SearchError::Decode(format!("index stats: {e}")))
    }

    /// Runs one search call and normalizes the response.
    ///
    /// # Errors
    /// Returns transport/status/decode errors; degrade-to-empty policy lives
    /// with the caller, not here.
    pub async fn search(
        &self,
        query: &str,
        limit: usize,
        filter: Option<&FilterExpr>,
    ) -> Result<SearchResults, SearchError> {
        let url = format!("{}/indexes/{}/search", self.base, self.index_uid);
        let body = SearchRequest {
            q: query,
            limit,
            filter: filter.map(FilterExpr::to_engine_syntax),
        };

        let resp = self.http.post(&url).json(&body).send().await?;
        if !resp.status().is_success() {
            return Err(status_error(resp.status(), url, resp).await);
        }

        let raw: RawSearchResponse = resp
            .json()
            .await
            .map_err(|e| SearchError::Decode(format!("search response: {e}")))?;
        let results = raw.normalize();

        debug!(
            query,
            hits = results.hits.len(),
            processing_time_ms = results.processing_time_ms,
            "search completed"
        );
        Ok(results)
    }
}

async fn status_error(status: StatusCode, url: String, resp: reqwest::Response) -> SearchError {
    let text = resp.text().await.unwrap_or_default();
    SearchError::Status {
        status,
        url,
        snippet: make_snippet(&text),
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

#[derive(Debug, Serialize)]
struct CreateIndexRequest<'a> {
    uid: &'a str,
    #[serde(rename = "primaryKey")]
    primary_key: &'a str,
}

/// Attribute settings pushed to the index after (re)creation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSettings {
    pub searchable_attributes: &'static [&'static str],
    pub filterable_attributes: &'static [&'static str],
    pub sortable_attributes: &'static [&'static str],
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    q: &'a str,
    limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<String>,
}
