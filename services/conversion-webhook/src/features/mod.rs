pub mod encoding;
pub mod handlers;
pub mod review;

use axum::{Router, routing::post};

use crate::utilities::app_state::AppState;

pub fn get_routes() -> Router<AppState> {
    Router::new().route("/convert", post(handlers::convert_handler))
}
