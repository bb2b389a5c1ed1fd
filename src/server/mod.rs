//! Axum-based HTTP server for the wire2html proxy.
//!
//! Accepts wireframe screenshots on `POST /api/toHtml`, forwards them to the
//! OpenAI chat-completions API, and relays the completion back.
//!
//! # Components
//!
//! - `handlers`: Conversion, health and metrics endpoints.
//! - `middleware`: Request ID tracking layers.
//! - `routes`: The router that ties state, handlers and layers together.

mod handlers;
mod middleware;
mod routes;

pub use handlers::TO_HTML_PATH;
pub use routes::{create_router, AppState};
