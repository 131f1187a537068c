//! OpenRouter chat-completion service.
//!
//! Thin client over the OpenAI-compatible REST surface. Constructed from a
//! complete [`LlmConfig`]; internally keeps a preconfigured `reqwest::Client`
//! with timeout and default headers.

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::LlmConfig;
use crate::errors::{LlmError, Result, make_snippet, validate_http_endpoint};
use crate::message::ChatMessage;

/// Per-call overrides; `None` fields fall back to the service config.
#[derive(Clone, Debug, Default)]
pub struct GenerateOptions {
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// Thin client for the OpenRouter API.
///
/// High-level operations:
/// - [`OpenRouterService::generate`]    — single, non-streaming chat completion
/// - [`OpenRouterService::list_models`] — available model listing
/// - [`OpenRouterService::health`]      — connectivity probe
#[derive(Debug)]
pub struct OpenRouterService {
    client: reqwest::Client,
    cfg: LlmConfig,
    url_chat: String,
    url_models: String,
}

impl OpenRouterService {
    /// Creates a new service from the given config.
    ///
    /// Validates the endpoint scheme and builds an HTTP client with bearer
    /// auth, attribution headers and the configured timeout.
    ///
    /// # Errors
    /// - [`LlmError::Config`] for an invalid endpoint
    /// - [`LlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmConfig) -> Result<Self> {
        validate_http_endpoint("OPENROUTER_BASE_URL", &cfg.endpoint)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", cfg.api_key)).map_err(|e| {
                LlmError::Decode(format!("invalid API key header: {e}"))
            })?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        // OpenRouter attribution headers.
        headers.insert(
            "HTTP-Referer",
            header::HeaderValue::from_static("https://github.com/shop-rag-backend"),
        );
        headers.insert(
            "X-Title",
            header::HeaderValue::from_static("Shop RAG Backend"),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .default_headers(headers)
            .build()?;

        let base = cfg.endpoint.trim_end_matches('/').to_string();
        let url_chat = format!("{base}/chat/completions");
        let url_models = format!("{base}/models");

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = cfg.timeout_secs,
            "OpenRouterService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_chat,
            url_models,
        })
    }

    /// Performs a **non-streaming** chat completion request.
    ///
    /// The answer is extracted from `choices[0].message.content`.
    ///
    /// # Errors
    /// - [`LlmError::HttpStatus`] for non-2xx responses
    /// - [`LlmError::HttpTransport`] for client/network failures (incl. timeout)
    /// - [`LlmError::Decode`] if the JSON cannot be parsed
    /// - [`LlmError::EmptyChoices`] if no choice carries content
    pub async fn generate(
        &self,
        messages: &[ChatMessage],
        opts: &GenerateOptions,
    ) -> Result<String> {
        let started = Instant::now();
        let model = opts.model.as_deref().unwrap_or(&self.cfg.model);
        let body = ChatCompletionRequest {
            model,
            messages,
            temperature: opts.temperature.or(self.cfg.temperature),
            max_tokens: opts.max_tokens.or(self.cfg.max_tokens),
        };

        debug!(
            model,
            message_count = messages.len(),
            "POST {}", self.url_chat
        );

        let resp = self.client.post(&self.url_chat).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url_chat.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                %url,
                %snippet,
                model,
                latency_ms = started.elapsed().as_millis(),
                "chat completion returned non-success status"
            );

            return Err(LlmError::HttpStatus {
                status,
                url,
                snippet,
            });
        }

        let out: ChatCompletionResponse = resp.json().await.map_err(|e| {
            LlmError::Decode(format!(
                "serde error: {e}; expected `choices[0].message.content`"
            ))
        })?;

        let content = out
            .choices
            .into_iter()
            .find_map(|c| c.message.content)
            .ok_or(LlmError::EmptyChoices)?;

        info!(
            model,
            latency_ms = started.elapsed().as_millis(),
            "chat completion completed"
        );

        Ok(content)
    }

    /// Lists models available behind the configured endpoint.
    ///
    /// # Errors
    /// - [`LlmError::HttpStatus`] for non-2xx responses
    /// - [`LlmError::Decode`] if the JSON cannot be parsed
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let resp = self.client.get(&self.url_models).send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url_models.clone();
            let text = resp.text().await.unwrap_or_default();
            return Err(LlmError::HttpStatus {
                status,
                url,
                snippet: make_snippet(&text),
            });
        }
        let out: ModelsResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::Decode(format!("models response: {e}")))?;
        Ok(out.data)
    }

    /// Connectivity probe: `true` when the model listing answers non-empty.
    pub async fn health(&self) -> bool {
        match self.list_models().await {
            Ok(models) => !models.is_empty(),
            Err(e) => {
                debug!(error = %e, "llm connectivity probe failed");
                false
            }
        }
    }

    /// The configured default model identifier.
    pub fn model(&self) -> &str {
        &self.cfg.model
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Minimal request body for `/chat/completions` (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Minimal response for `/chat/completions`.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageOut,
}

#[derive(Debug, Deserialize)]
struct ChatMessageOut {
    content: Option<String>,
}

/// One entry of the `/models` listing.
#[derive(Clone, Debug, Deserialize)]
pub struct ModelInfo {
    pub id: String,
}

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    data: Vec<ModelInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ChatRole;

    fn test_cfg() -> LlmConfig {
        LlmConfig {
            model: "anthropic/claude-3-haiku".into(),
            endpoint: "https://openrouter.ai/api/v1".into(),
            api_key: "sk-test".into(),
            max_tokens: Some(800),
            temperature: Some(0.3),
            timeout_secs: 10,
        }
    }

    #[test]
    fn request_payload_shape() {
        let messages = vec![
            ChatMessage::system("be useful"),
            ChatMessage::user("hello"),
        ];
        let body = ChatCompletionRequest {
            model: "anthropic/claude-3-haiku",
            messages: &messages,
            temperature: Some(0.3),
            max_tokens: None,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "anthropic/claude-3-haiku");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hello");
        // unset max_tokens must be skipped entirely
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn response_content_extraction() {
        let out: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"the answer"}}]}"#,
        )
        .unwrap();
        let content = out.choices.into_iter().find_map(|c| c.message.content);
        assert_eq!(content.as_deref(), Some("the answer"));
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let mut cfg = test_cfg();
        cfg.endpoint = "openrouter.ai/api/v1".into();
        assert!(matches!(
            OpenRouterService::new(cfg),
            Err(LlmError::Config(_))
        ));
    }

    #[test]
    fn message_roles_serialize_lowercase() {
        let m = ChatMessage {
            role: ChatRole::Assistant,
            content: "ok".into(),
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["role"], "assistant");
    }
}
