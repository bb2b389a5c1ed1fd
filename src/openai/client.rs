// OpenAI chat-completions client

use crate::config::{LoggingConfig, OpenAiConfig};
use crate::error::{ProxyError, Result};
use crate::metrics;
use crate::models::CompletionRequest;
use crate::utils::logging::sanitize;
use bytes::Bytes;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// Client for the OpenAI chat-completions API.
///
/// Sends one request per call, with no retries. The API key is checked on
/// every call so a missing key never results in network traffic.
pub struct OpenAiClient {
    http_client: Client,
    config: OpenAiConfig,
    sanitize_logs: bool,
}

impl OpenAiClient {
    /// Create a new client. Connection pooling is left to `reqwest`.
    pub fn new(config: &OpenAiConfig, logging: &LoggingConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .tcp_nodelay(true)
            .use_rustls_tls();

        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http_client = builder
            .build()
            .map_err(|e| ProxyError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client for {}", config.api_base_url);

        Ok(Self {
            http_client,
            config: config.clone(),
            sanitize_logs: logging.sanitize_tokens,
        })
    }

    /// Full URL of the chat-completions endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.api_base_url.trim_end_matches('/'))
    }

    /// Get the configured model
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Whether an API key is available for upstream calls.
    pub fn has_api_key(&self) -> bool {
        self.config.api_key().is_some()
    }

    /// Send a chat-completion request and return the upstream body verbatim.
    ///
    /// Fails with [`ProxyError::Config`] before any I/O when no key is set,
    /// with [`ProxyError::Upstream`] on a non-2xx status, and with
    /// [`ProxyError::Transport`] when the request cannot be completed. The
    /// body is checked to be JSON but never re-encoded.
    pub async fn chat_completion(&self, request: &CompletionRequest) -> Result<Bytes> {
        let model = request.model.as_str();

        let api_key = match self.config.api_key() {
            Some(key) => key,
            None => {
                metrics::record_upstream_call(model, "config_error", None);
                return Err(ProxyError::Config("OpenAI API key is not set".to_string()));
            }
        };

        let url = self.endpoint();
        debug!("Calling chat completions at {} for model: {}", url, model);

        let start = Instant::now();
        let result = self.send(&url, api_key, request).await;
        let elapsed = start.elapsed().as_secs_f64();

        metrics::record_upstream_call(model, call_outcome(&result), Some(elapsed));

        result
    }

    async fn send(&self, url: &str, api_key: &str, request: &CompletionRequest) -> Result<Bytes> {
        let response = self
            .http_client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("OpenAI request failed: {}", e);
                ProxyError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                "OpenAI API error: HTTP {} - Response body: {}",
                status,
                self.loggable(&error_text)
            );
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;

        if let Err(e) = serde_json::from_slice::<serde::de::IgnoredAny>(&body) {
            error!("Upstream returned a non-JSON body: {}", e);
            return Err(ProxyError::InvalidUpstreamBody(e.to_string()));
        }

        debug!("Received {} byte completion response", body.len());
        Ok(body)
    }

    fn loggable(&self, text: &str) -> String {
        let text: String = text.chars().take(1000).collect();
        if self.sanitize_logs {
            sanitize(&text)
        } else {
            text
        }
    }
}

/// Metrics label for a finished upstream call.
fn call_outcome(result: &Result<Bytes>) -> &'static str {
    match result {
        Ok(_) => "success",
        Err(ProxyError::Upstream { .. }) => "upstream_error",
        Err(ProxyError::InvalidUpstreamBody(_)) => "invalid_body",
        Err(_) => "transport_error",
    }
}
