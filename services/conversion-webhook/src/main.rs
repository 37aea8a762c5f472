pub mod app;
pub mod config;
pub mod error;
pub mod features;
pub mod utilities;

use std::{path::PathBuf, time::Duration};

use anyhow::anyhow;
use axum_server::Handle;
use factory::factories::observability::Observability;
use tracing::info;
use utility::shutdown_signal::shutdown_signal;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow!("Failed to install rustls crypto provider"))?;

    // These are baked at COMPILE time
    let cargo_manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let cargo_crate_name = env!("CARGO_CRATE_NAME");
    let cargo_pkg_name = env!("CARGO_PKG_NAME");
    let cargo_pkg_version = env!("CARGO_PKG_VERSION");

    // Load service-specific .env
    dotenvy::from_path(cargo_manifest_dir.join(".env")).ok();
    // Load workspace root .env as fallback
    dotenvy::dotenv().ok();

    let config_path = dotenvy::var("CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| cargo_manifest_dir.join("config.json"));
    let config = Config::init(config_path).await?;

    let _guard =
        Observability::init(&config.observability, cargo_crate_name, cargo_pkg_version)?;

    let app = app::app(cargo_pkg_name, cargo_pkg_version, &config);

    match config.tls.as_ref().filter(|tls| tls.is_configured()) {
        Some(tls) => {
            let rustls_config = tls.build_rustls_config()?;
            let handle = Handle::new();
            tokio::spawn(graceful_shutdown(handle.clone()));

            info!(
                "🚀 {} service running at https://{}",
                cargo_pkg_name, config.server_address
            );
            axum_server::bind_rustls(config.server_address, rustls_config)
                .handle(handle)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            let listener = tokio::net::TcpListener::bind(config.server_address).await?;

            info!(
                "🚀 {} service running at http://{} without TLS",
                cargo_pkg_name, config.server_address
            );
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
    }

    info!("👋 Shutting down gracefully...");

    Ok(())
}

async fn graceful_shutdown(handle: Handle) {
    shutdown_signal().await;
    handle.graceful_shutdown(Some(Duration::from_secs(10)));
}
