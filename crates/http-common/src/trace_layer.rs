use std::time::Duration;

use axum::http::{Request, Response, header};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::{DefaultOnRequest, MakeSpan, OnResponse, TraceLayer},
};
use tracing::{Span, error, info, info_span, warn};

/// Opens one span per request, tagged with the negotiated content type.
#[derive(Clone, Copy, Debug, Default)]
pub struct CustomMakeSpan;

impl<B> MakeSpan<B> for CustomMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let header_value = |name: header::HeaderName| {
            request
                .headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("unknown")
                .to_owned()
        };

        info_span!(
            "Request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
            content_type = %header_value(header::CONTENT_TYPE),
            user_agent = %header_value(header::USER_AGENT),
        )
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CustomOnResponse;

impl<B> OnResponse<B> for CustomOnResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, _span: &Span) {
        let status = response.status();
        let latency_ms = latency.as_millis() as u64;

        if status.is_server_error() {
            error!(%status, latency_ms, "🌋 HTTP request finished");
        } else if status.is_client_error() {
            warn!(%status, latency_ms, "⚠️ HTTP request finished");
        } else if status.is_redirection() {
            info!(%status, latency_ms, "🔄 HTTP request finished");
        } else {
            info!(%status, latency_ms, "✅ HTTP request finished");
        }
    }
}

/// `TraceLayer` wired with the span and response hooks above.
pub fn trace_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    CustomMakeSpan,
    DefaultOnRequest,
    CustomOnResponse,
> {
    TraceLayer::new_for_http()
        .make_span_with(CustomMakeSpan)
        .on_response(CustomOnResponse)
}
