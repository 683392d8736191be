use crate::services::documents::ClientError;
use prometheus::{Encoder, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::OnceLock;

// Global registry
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

// Metrics
pub static HTTP_REQUESTS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static HTTP_REQUEST_DURATION_SECONDS: OnceLock<HistogramVec> = OnceLock::new();
pub static DOCUMENT_CLIENT_CALLS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

pub fn init_metrics() {
    let registry = Registry::new();

    let requests_total = IntCounterVec::new(
        Opts::new("http_requests_total", "Total number of HTTP requests"),
        &["method", "path", "status"],
    )
    .expect("metric can be created");

    let request_duration = HistogramVec::new(
        prometheus::HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request duration in seconds",
        ),
        &["method", "path", "status"],
    )
    .expect("metric can be created");

    // The mode label is what makes mock-served data observable in dashboards.
    let client_calls = IntCounterVec::new(
        Opts::new(
            "document_client_calls_total",
            "Document API client calls by operation, client mode and outcome",
        ),
        &["operation", "mode", "outcome"],
    )
    .expect("metric can be created");

    registry
        .register(Box::new(requests_total.clone()))
        .expect("collector can be registered");
    registry
        .register(Box::new(request_duration.clone()))
        .expect("collector can be registered");
    registry
        .register(Box::new(client_calls.clone()))
        .expect("collector can be registered");

    // Initialize globals
    let _ = REGISTRY.set(registry);
    let _ = HTTP_REQUESTS_TOTAL.set(requests_total);
    let _ = HTTP_REQUEST_DURATION_SECONDS.set(request_duration);
    let _ = DOCUMENT_CLIENT_CALLS_TOTAL.set(client_calls);
}

/// Record one served HTTP request. A no-op until [`init_metrics`] ran.
pub fn record_http_request(method: &str, path: &str, status: &str, seconds: f64) {
    if let Some(total) = HTTP_REQUESTS_TOTAL.get() {
        total.with_label_values(&[method, path, status]).inc();
    }
    if let Some(duration) = HTTP_REQUEST_DURATION_SECONDS.get() {
        duration
            .with_label_values(&[method, path, status])
            .observe(seconds);
    }
}

/// Record one document API client call. A no-op until [`init_metrics`] ran.
pub fn record_client_call<T>(operation: &str, mode: &str, result: &Result<T, ClientError>) {
    if let Some(counter) = DOCUMENT_CLIENT_CALLS_TOTAL.get() {
        let outcome = if result.is_ok() { "ok" } else { "error" };
        counter
            .with_label_values(&[operation, mode, outcome])
            .inc();
    }
}

pub fn get_metrics() -> String {
    let Some(registry) = REGISTRY.get() else {
        return String::new();
    };

    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    if encoder.encode(&registry.gather(), &mut buffer).is_err() {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
