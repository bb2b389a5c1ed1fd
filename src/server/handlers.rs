// HTTP request handlers

use super::routes::AppState;
use crate::error::{json_response, ProxyError, Result};
use crate::metrics;
use crate::models::ConversionRequest;
use crate::translation::build_completion_request;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, error, info};

/// Path of the conversion endpoint.
pub const TO_HTML_PATH: &str = "/api/toHtml";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    // Conversions fail until a key is configured
    let key_check = if state.openai_client.has_api_key() {
        HealthCheck {
            status: "ok".to_string(),
            message: "API key configured".to_string(),
        }
    } else {
        overall_status = HealthStatus::Degraded;
        HealthCheck {
            status: "warning".to_string(),
            message: format!("{} is not set", crate::config::API_KEY_ENV),
        }
    };
    checks.insert("api_key".to_string(), key_check);

    let upstream_check = HealthCheck {
        status: "ok".to_string(),
        message: format!(
            "Endpoint: {}, model: {}",
            state.openai_client.endpoint(),
            state.openai_client.model()
        ),
    };
    checks.insert("upstream".to_string(), upstream_check);

    Json(HealthResponse {
        status: overall_status,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for `POST /api/toHtml`.
///
/// Replies 200 with the upstream completion body untouched, or with a
/// `{ "error": ... }` envelope. Both carry the JSON content type.
pub async fn to_html_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let start = Instant::now();

    let response = match convert(&state, &body).await {
        Ok(completion) => json_response(StatusCode::OK, completion),
        Err(e) => {
            error!("Conversion failed: {}", e);
            e.into_response()
        }
    };

    let status = response.status();
    info!(
        "Conversion finished: status={}, elapsed_ms={}",
        status.as_u16(),
        start.elapsed().as_millis()
    );
    metrics::record_request(TO_HTML_PATH, status.as_u16(), start.elapsed().as_secs_f64());

    response
}

async fn convert(state: &AppState, body: &[u8]) -> Result<Bytes> {
    let req: ConversionRequest = serde_json::from_slice(body)
        .map_err(|e| ProxyError::InvalidRequest(format!("JSON deserialization error: {}", e)))?;

    debug!(
        "Received conversion request: image reference of {} bytes ({})",
        req.image.len(),
        image_kind(&req.image)
    );

    let completion_req = build_completion_request(&req, &state.config.openai);
    state.openai_client.chat_completion(&completion_req).await
}

// Short label for logs; data URIs can be megabytes
fn image_kind(image: &str) -> &str {
    if image.starts_with("data:") {
        image
            .split_once(',')
            .map(|(prefix, _)| prefix)
            .unwrap_or("data URI")
    } else {
        "url"
    }
}

/// Handler for `GET /metrics` (Prometheus text exposition)
pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics::gather_metrics(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_kind_labels() {
        assert_eq!(image_kind("data:image/png;base64,iVBORw0KGgo"), "data:image/png;base64");
        assert_eq!(image_kind("data:nocomma"), "data URI");
        assert_eq!(image_kind("https://example.com/a.png"), "url");
    }
}
