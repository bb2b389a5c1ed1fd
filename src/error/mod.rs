// Error types for the wire2html proxy

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Content type carried by every response of the conversion endpoint.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("OpenAI API responded with status {status}")]
    Upstream { status: u16 },

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid upstream response: {0}")]
    InvalidUpstreamBody(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Request rejected: {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProxyError {
    /// HTTP status reported to the caller.
    ///
    /// Upstream failures are never mapped through; they collapse to 500 like
    /// every other server-side failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Rejected { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Build a response with a JSON body and the endpoint's content type.
pub fn json_response(status: StatusCode, body: impl Into<axum::body::Body>) -> Response {
    (status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body.into()).into_response()
}

// Convert ProxyError into the `{ "error": ... }` envelope
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.to_string() });
        json_response(self.status_code(), body.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_maps_to_500() {
        let err = ProxyError::Upstream { status: 429 };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            JSON_CONTENT_TYPE
        );
    }

    #[test]
    fn test_rejection_keeps_its_status() {
        let err = ProxyError::Rejected {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "length limit exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "Request rejected: length limit exceeded");
        assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_invalid_request_maps_to_400() {
        let err = ProxyError::InvalidRequest("missing field `image`".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
