// HTTP middleware

use crate::error::ProxyError;
use axum::body::to_bytes;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

// Framework rejection bodies are short plain-text messages
const REJECTION_BODY_LIMIT: usize = 64 * 1024;

/// Request ID layers: generate `x-request-id` when absent, echo it back.
pub fn request_id_layers() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    (
        SetRequestIdLayer::x_request_id(MakeRequestUuid),
        PropagateRequestIdLayer::x_request_id(),
    )
}

/// Rewrite non-JSON error responses produced outside the handler (body limit,
/// body buffering, wrong method) into the `{ "error": ... }` envelope.
pub async fn json_rejections(response: Response) -> Response {
    let status = response.status();
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"));

    if is_json || !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let body = to_bytes(response.into_body(), REJECTION_BODY_LIMIT)
        .await
        .unwrap_or_default();
    let text = String::from_utf8_lossy(&body).trim().to_string();
    let message = if text.is_empty() {
        status.canonical_reason().unwrap_or("request rejected").to_string()
    } else {
        text
    };

    tracing::warn!("Request rejected before conversion: HTTP {} - {}", status.as_u16(), message);

    let mut rewritten = ProxyError::Rejected { status, message }.into_response();
    if let Some(allow) = allow {
        rewritten.headers_mut().insert(header::ALLOW, allow);
    }
    rewritten
}

