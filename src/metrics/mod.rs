// Metrics module for Prometheus observability

mod registry;

pub use registry::{gather_metrics, REQUESTS_TOTAL, REQUEST_DURATION, UPSTREAM_CALLS, UPSTREAM_DURATION};

/// Helper to record inbound request metrics
pub fn record_request(endpoint: &str, status_code: u16, duration_secs: f64) {
    REQUESTS_TOTAL
        .with_label_values(&[endpoint, &status_code.to_string()])
        .inc();

    REQUEST_DURATION
        .with_label_values(&[endpoint])
        .observe(duration_secs);
}

/// Helper to record an upstream call; duration is only observed for calls
/// that reached the network.
pub fn record_upstream_call(model: &str, outcome: &str, duration_secs: Option<f64>) {
    UPSTREAM_CALLS.with_label_values(&[model, outcome]).inc();

    if let Some(secs) = duration_secs {
        UPSTREAM_DURATION.with_label_values(&[model]).observe(secs);
    }
}
