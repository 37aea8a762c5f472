use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor},
    path::PathBuf,
    sync::Arc,
};

use axum_server::tls_rustls::RustlsConfig;
use rustls::{
    ServerConfig,
    crypto::ring,
    pki_types::{CertificateDer, PrivateKeyDer},
};
use rustls_pemfile::{Item, read_one};

use crate::factories::tls::{TlsConfig, error::TlsError};

const CERTIFICATE: &str = "TLS certificate";
const PRIVATE_KEY: &str = "TLS private key";

impl TlsConfig {
    /// True when any serving material is configured at all.
    pub fn is_configured(&self) -> bool {
        self.cert.is_some()
            || self.cert_path.is_some()
            || self.key.is_some()
            || self.key_path.is_some()
    }

    /// Server config for `axum_server::bind_rustls`, advertising h2 and http/1.1.
    pub fn build_rustls_config(&self) -> Result<RustlsConfig, TlsError> {
        Ok(RustlsConfig::from_config(Arc::new(self.build_server_config()?)))
    }

    pub fn build_server_config(&self) -> Result<ServerConfig, TlsError> {
        let certs = Self::with_reader(&self.cert, &self.cert_path, CERTIFICATE, |reader| {
            Self::read_cert_chain(reader)
        })?;
        let key = Self::with_reader(&self.key, &self.key_path, PRIVATE_KEY, |reader| {
            Self::read_private_key(reader)
        })?;

        let mut config = ServerConfig::builder_with_provider(Arc::new(ring::default_provider()))
            .with_safe_default_protocol_versions()?
            .with_no_client_auth()
            .with_single_cert(certs, key)?;
        config.alpn_protocols = vec![b"h2".to_vec(), b"http/1.1".to_vec()];

        Ok(config)
    }

    fn with_reader<T>(
        data: &Option<String>,
        path: &Option<PathBuf>,
        context: &'static str,
        f: impl FnOnce(&mut dyn BufRead) -> Result<T, TlsError>,
    ) -> Result<T, TlsError> {
        if let Some(data) = data {
            let mut reader = Cursor::new(data.as_bytes());
            f(&mut reader)
        } else if let Some(path) = path {
            let file = File::open(path).map_err(|source| TlsError::Open {
                context,
                path: path.clone(),
                source,
            })?;
            let mut reader = BufReader::new(file);
            f(&mut reader)
        } else {
            Err(TlsError::Missing(context))
        }
    }

    fn read_cert_chain(reader: &mut dyn BufRead) -> Result<Vec<CertificateDer<'static>>, TlsError> {
        let mut certs = Vec::new();

        loop {
            match read_one(reader) {
                Ok(Some(Item::X509Certificate(cert))) => certs.push(cert),
                Ok(Some(_)) => return Err(TlsError::UnsupportedPem(CERTIFICATE)),
                Ok(None) => break,
                Err(source) => {
                    return Err(TlsError::Pem {
                        context: CERTIFICATE,
                        source,
                    });
                }
            }
        }

        if certs.is_empty() {
            return Err(TlsError::Empty(CERTIFICATE));
        }

        Ok(certs)
    }

    fn read_private_key(reader: &mut dyn BufRead) -> Result<PrivateKeyDer<'static>, TlsError> {
        match read_one(reader) {
            Ok(Some(Item::Pkcs8Key(key))) => Ok(PrivateKeyDer::Pkcs8(key)),
            Ok(Some(Item::Pkcs1Key(key))) => Ok(PrivateKeyDer::Pkcs1(key)),
            Ok(Some(Item::Sec1Key(key))) => Ok(PrivateKeyDer::Sec1(key)),
            Ok(Some(_)) => Err(TlsError::UnsupportedPem(PRIVATE_KEY)),
            Ok(None) => Err(TlsError::Empty(PRIVATE_KEY)),
            Err(source) => Err(TlsError::Pem {
                context: PRIVATE_KEY,
                source,
            }),
        }
    }
}
