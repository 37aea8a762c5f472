use axum::{Router, extract::DefaultBodyLimit};
use http_common::{router::base_routes, trace_layer::trace_layer};

use crate::{config::Config, features, utilities::app_state::AppState};

// The API server batches objects into one review; leave room for large lists.
const MAX_REVIEW_BYTES: usize = 16 * 1024 * 1024;

pub fn app(
    cargo_pkg_name: &'static str,
    cargo_pkg_version: &'static str,
    cfg: &Config,
) -> Router {
    let app_state = AppState::init(cfg);

    Router::new()
        .merge(features::get_routes())
        .merge(base_routes(cargo_pkg_name, cargo_pkg_version))
        .layer(DefaultBodyLimit::max(MAX_REVIEW_BYTES))
        .with_state(app_state)
        .layer(trace_layer())
}
