use once_cell::sync::Lazy;
use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Meter},
};

static METER: Lazy<Meter> = Lazy::new(|| global::meter("conversion-webhook"));

/// ConversionReview documents handled.
///
/// Labels:
/// - `outcome`: success, failure, invalid
pub static CONVERSION_REVIEWS_TOTAL: Lazy<Counter<u64>> = Lazy::new(|| {
    METER
        .u64_counter("conversion_reviews_total")
        .with_description("Total number of ConversionReview requests")
        .with_unit("{reviews}")
        .build()
});

/// Objects converted inside reviews.
///
/// Labels:
/// - `kind`: Build, BuildRun, BuildStrategy, ClusterBuildStrategy or whatever was sent
/// - `from`, `to`: API versions
/// - `outcome`: success, failure
pub static CONVERSION_OBJECTS_TOTAL: Lazy<Counter<u64>> = Lazy::new(|| {
    METER
        .u64_counter("conversion_objects_total")
        .with_description("Total number of objects passed through the converter")
        .with_unit("{objects}")
        .build()
});

pub fn record_review(outcome: &'static str) {
    CONVERSION_REVIEWS_TOTAL.add(1, &[KeyValue::new("outcome", outcome)]);
}

pub fn record_object(kind: &str, from: &str, to: &str, outcome: &'static str) {
    CONVERSION_OBJECTS_TOTAL.add(
        1,
        &[
            KeyValue::new("kind", kind.to_owned()),
            KeyValue::new("from", from.to_owned()),
            KeyValue::new("to", to.to_owned()),
            KeyValue::new("outcome", outcome),
        ],
    );
}
