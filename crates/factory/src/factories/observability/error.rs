use opentelemetry_otlp::ExporterBuildError;
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("Failed to create trace exporter: {0}")]
    TraceExporter(#[source] ExporterBuildError),
    #[error("Failed to create metric exporter: {0}")]
    MetricExporter(#[source] ExporterBuildError),
    #[error("Failed to install tracing subscriber: {0}")]
    Subscriber(#[from] TryInitError),
}
