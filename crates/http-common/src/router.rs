use axum::{Router, routing::get};

use crate::handlers::{health_handler, not_found_handler, ready_handler, root_handler};

/// Service banner, probes and the 404 fallback, shared by every service.
pub fn base_routes<S>(cargo_pkg_name: &'static str, cargo_pkg_version: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/",
            get(move || root_handler(cargo_pkg_name, cargo_pkg_version)),
        )
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .fallback(not_found_handler)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = base_routes::<()>("conversion-webhook", "0.1.0")
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn root_reports_the_service() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!({ "service": "conversion-webhook", "version": "0.1.0", "status": "ok" })
        );
    }

    #[tokio::test]
    async fn probes_answer() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap()["status"], "healthy");

        let (status, _) = get("/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_404() {
        let (status, body) = get("/apis/shipwright.io").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, b"nothing to see here");
    }
}
