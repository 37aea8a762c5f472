use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TlsError {
    #[error("Missing {0}")]
    Missing(&'static str),
    #[error("Couldn't open {context} {path:?}: {source}")]
    Open {
        context: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    #[error("Failed to read {context} PEM: {source}")]
    Pem {
        context: &'static str,
        source: io::Error,
    },
    #[error("Unsupported PEM type for {0}")]
    UnsupportedPem(&'static str),
    #[error("No {0} found in PEM")]
    Empty(&'static str),
    #[error("Invalid TLS server configuration: {0}")]
    Rustls(#[from] rustls::Error),
}
