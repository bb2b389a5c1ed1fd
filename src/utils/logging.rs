//! Structured logging and secret redaction utilities.
//!
//! This module configures the `tracing` ecosystem for the application and
//! provides a helper that keeps OpenAI credentials out of log lines.

use crate::config::LoggingConfig;
use crate::error::{ProxyError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

lazy_static! {
    static ref API_KEY_PATTERN: Regex = Regex::new(r"sk-[A-Za-z0-9_\-*.]{4,}").unwrap();
    static ref BEARER_PATTERN: Regex = Regex::new(r"(?i)bearer\s+[^\s'\x22]+").unwrap();
}

/// Initializes the global tracing subscriber for the application.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ProxyError::Config(format!("invalid log level '{}': {}", config.level, e)))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match config.format.as_str() {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        _ => registry.with(tracing_subscriber::fmt::layer().pretty()).try_init(),
    };

    result.map_err(|e| ProxyError::Internal(format!("failed to install tracing subscriber: {}", e)))
}

/// Masks OpenAI API keys (`sk-...`) and bearer tokens in `input`.
///
/// Upstream 401 bodies echo a partially masked key back, so error bodies
/// go through this before they are logged.
pub fn sanitize(input: &str) -> String {
    let result = API_KEY_PATTERN.replace_all(input, "[REDACTED_API_KEY]");
    BEARER_PATTERN
        .replace_all(&result, "Bearer [REDACTED]")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_api_key() {
        let input = r#"{"error":{"message":"Incorrect API key provided: sk-abc12***************wxyz."}}"#;
        let output = sanitize(input);
        assert!(output.contains("[REDACTED_API_KEY]"));
        assert!(!output.contains("sk-abc12"));
    }

    #[test]
    fn test_sanitize_bearer_token() {
        let output = sanitize("Authorization: Bearer secret-token-value");
        assert_eq!(output, "Authorization: Bearer [REDACTED]");
    }

    #[test]
    fn test_sanitize_leaves_plain_text() {
        let input = "OpenAI API responded with status 500";
        assert_eq!(sanitize(input), input);
    }
}
