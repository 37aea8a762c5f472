use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, header},
    response::IntoResponse,
};
use build_conversion::ConversionOptions;
use kube::core::conversion::ConversionReview;
use tracing::{Span, field::Empty};

use crate::{
    error::AppError,
    features::{encoding::Encoding, review},
};

#[tracing::instrument(name = "convert_handler", skip_all, fields(encoding = Empty), err)]
pub async fn convert_handler(
    State(options): State<ConversionOptions>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let encoding = Encoding::from_headers(&headers);
    Span::current().record("encoding", tracing::field::display(encoding));

    let incoming: ConversionReview = encoding.decode(&body)?;
    let answered = review::review(incoming, &options);
    let body = encoding.encode(&answered)?;

    Ok(([(header::CONTENT_TYPE, encoding.content_type())], body))
}
