use std::{net::SocketAddr, path::PathBuf};

use build_conversion::ConversionOptions;
use config::{ConfigBuilder, ConfigError, Environment, File, builder::AsyncState};
use factory::factories::{observability::ObservabilityConfig, tls::TlsConfig};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub server_address: SocketAddr,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// Plain HTTP is served when absent, e.g. behind a TLS terminating proxy.
    pub tls: Option<TlsConfig>,
    #[serde(default)]
    pub conversion: ConversionOptions,
}

impl Config {
    /// Reads the JSON file at `path`, then applies environment overrides such
    /// as `CONVERSION__DECODE_POLICY=lenient`.
    pub async fn init(path: PathBuf) -> Result<Self, ConfigError> {
        let cfg = ConfigBuilder::<AsyncState>::default()
            .add_source(File::from(path))
            .add_source(Environment::default().separator("__"))
            .build()
            .await?;

        cfg.try_deserialize()
    }
}
