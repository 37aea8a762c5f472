use axum::extract::FromRef;
use build_conversion::ConversionOptions;

use crate::config::Config;

#[derive(FromRef, Clone)]
pub struct AppState {
    pub config: Config,
    pub conversion_options: ConversionOptions,
}

impl AppState {
    pub fn init(cfg: &Config) -> Self {
        Self {
            config: cfg.clone(),
            conversion_options: cfg.conversion,
        }
    }
}
