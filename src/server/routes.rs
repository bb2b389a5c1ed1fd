// HTTP routes configuration

use super::handlers::{health_handler, metrics_handler, to_html_handler, TO_HTML_PATH};
use super::middleware::{json_rejections, request_id_layers};
use crate::config::AppConfig;
use crate::openai::OpenAiClient;
use axum::{
    extract::DefaultBodyLimit,
    middleware::map_response,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Immutable state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub openai_client: Arc<OpenAiClient>,
}

pub fn create_router(config: AppConfig, openai_client: OpenAiClient) -> Router {
    let max_body_bytes = config.server.max_body_bytes;
    let state = AppState {
        config: Arc::new(config),
        openai_client: Arc::new(openai_client),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route(
            TO_HTML_PATH,
            post(to_html_handler)
                // Screenshots arrive as base64 data URIs; replace axum's 2MB default
                .layer(DefaultBodyLimit::max(max_body_bytes))
                .layer(map_response(json_rejections)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state)
}
