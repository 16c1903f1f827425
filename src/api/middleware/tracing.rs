//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Span builder that tags API requests with the operation name.
///
/// `/api/hash` gets `operation=hash`, `/api/redirect/k3x9qa` gets
/// `operation=redirect`; other paths get `operation=-`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperationSpan;

impl MakeSpan<Body> for OperationSpan {
    fn make_span(&mut self, request: &Request<Body>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            operation = operation_from_path(request.uri().path()),
        )
    }
}

/// Extracts the operation segment of an `/api/...` path.
fn operation_from_path(path: &str) -> &str {
    path.strip_prefix("/api/")
        .and_then(|rest| rest.split('/').next())
        .filter(|segment| !segment.is_empty())
        .unwrap_or("-")
}

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// - One `INFO` span per request with method, URI and operation name
/// - Response logged at `INFO` with status and latency in milliseconds
/// - Server errors logged at `ERROR`
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/api/hash operation=hash}: finished processing request latency=3 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, OperationSpan> {
    TraceLayer::new_for_http()
        .make_span_with(OperationSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_from_path() {
        assert_eq!(operation_from_path("/api/hash"), "hash");
        assert_eq!(operation_from_path("/api/redirect/abc123"), "redirect");
        assert_eq!(operation_from_path("/health"), "-");
        assert_eq!(operation_from_path("/api/"), "-");
    }
}
