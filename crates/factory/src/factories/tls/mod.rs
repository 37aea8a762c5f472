pub mod error;
pub mod implementation;

use std::path::PathBuf;

use serde::Deserialize;

/// Serving certificate and key, each given inline as PEM or as a file path.
/// Inline material wins when both are set.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct TlsConfig {
    pub cert: Option<String>,
    pub cert_path: Option<PathBuf>,
    pub key: Option<String>,
    pub key_path: Option<PathBuf>,
}
