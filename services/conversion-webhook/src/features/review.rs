use build_conversion::{ConversionError, ConversionOptions, convert};
use kube::core::{
    Status,
    conversion::{ConversionRequest, ConversionResponse, ConversionReview},
};
use serde_json::Value;
use tracing::{Span, field::Empty, info, warn};

use crate::utilities::metrics;

struct ObjectFailure {
    index: usize,
    kind: String,
    name: String,
    error: ConversionError,
}

/// Answers one ConversionReview.
///
/// Every object is converted and logged on its own, but the response carries
/// a single result: it succeeds only when all objects converted, otherwise it
/// fails with a message naming each object that did not.
#[tracing::instrument(
    name = "conversion.review",
    skip_all,
    fields(uid = Empty, desired_api_version = Empty, objects = Empty)
)]
pub fn review(review: ConversionReview, options: &ConversionOptions) -> ConversionReview {
    let mut request = match ConversionRequest::try_from(review) {
        Ok(request) => request,
        Err(err) => {
            warn!(error = %err, "⚠️ ConversionReview carries no usable request");
            metrics::record_review("invalid");
            let status = Status::failure(&err.to_string(), "InvalidRequest");
            return ConversionResponse::invalid(status).into_review();
        }
    };

    let objects = std::mem::take(&mut request.objects);
    let desired_api_version = request.desired_api_version.clone();

    let span = Span::current();
    span.record("uid", request.uid.as_str());
    span.record("desired_api_version", desired_api_version.as_str());
    span.record("objects", objects.len());

    let mut converted = Vec::with_capacity(objects.len());
    let mut failures = Vec::new();

    for (index, object) in objects.iter().enumerate() {
        let kind = str_field(object, "kind");
        let from = str_field(object, "apiVersion");

        match convert(object, &desired_api_version, options) {
            Ok(value) => {
                metrics::record_object(kind, from, &desired_api_version, "success");
                converted.push(value);
            }
            Err(error) => {
                metrics::record_object(kind, from, &desired_api_version, "failure");
                let name = qualified_name(object);
                warn!(
                    index,
                    kind,
                    name = %name,
                    error = %error,
                    "⚠️ Object conversion failed"
                );
                failures.push(ObjectFailure {
                    index,
                    kind: kind.to_owned(),
                    name,
                    error,
                });
            }
        }
    }

    if failures.is_empty() {
        info!(converted = converted.len(), "✅ ConversionReview succeeded");
        metrics::record_review("success");
        return ConversionResponse::for_request(request)
            .success(converted)
            .into_review();
    }

    let reason = match failures.as_slice() {
        [only] => only.error.reason(),
        _ => "ConversionFailed",
    };
    let message = failure_message(&failures, objects.len());
    warn!(failed = failures.len(), "❌ ConversionReview failed");
    metrics::record_review("failure");

    ConversionResponse::for_request(request)
        .failure(Status::failure(&message, reason))
        .into_review()
}

fn failure_message(failures: &[ObjectFailure], total: usize) -> String {
    let details = failures
        .iter()
        .map(|failure| {
            format!(
                "object {} ({} {}): {}",
                failure.index, failure.kind, failure.name, failure.error
            )
        })
        .collect::<Vec<_>>()
        .join("; ");

    format!("{} of {} objects failed to convert: {}", failures.len(), total, details)
}

fn str_field<'a>(object: &'a Value, field: &str) -> &'a str {
    object.get(field).and_then(Value::as_str).unwrap_or("unknown")
}

fn qualified_name(object: &Value) -> String {
    let name = object
        .pointer("/metadata/name")
        .and_then(Value::as_str)
        .unwrap_or("<unnamed>");

    match object.pointer("/metadata/namespace").and_then(Value::as_str) {
        Some(namespace) => format!("{namespace}/{name}"),
        None => name.to_owned(),
    }
}
