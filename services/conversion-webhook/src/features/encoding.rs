use std::fmt;

use axum::http::{HeaderMap, header};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::AppError;

/// Wire encoding of a ConversionReview, chosen from the request's content
/// type. The response is written back in the same encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Yaml,
}

impl Encoding {
    /// Anything that is not a YAML media type is treated as JSON.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let media_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(|value| value.trim().to_ascii_lowercase());

        match media_type.as_deref() {
            Some("application/yaml" | "application/x-yaml" | "text/yaml") => Encoding::Yaml,
            _ => Encoding::Json,
        }
    }

    pub const fn content_type(&self) -> &'static str {
        match self {
            Encoding::Json => "application/json",
            Encoding::Yaml => "application/yaml",
        }
    }

    pub fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, AppError> {
        let decoded = match self {
            Encoding::Json => serde_json::from_slice(body).map_err(|err| err.to_string()),
            Encoding::Yaml => serde_yaml::from_slice(body).map_err(|err| err.to_string()),
        };
        decoded.map_err(|err| {
            AppError::BadRequest(format!("invalid {self} ConversionReview: {err}"))
        })
    }

    pub fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, AppError> {
        match self {
            Encoding::Json => {
                serde_json::to_vec(value).map_err(|err| AppError::Encode(err.to_string()))
            }
            Encoding::Yaml => serde_yaml::to_string(value)
                .map(String::into_bytes)
                .map_err(|err| AppError::Encode(err.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Json => f.write_str("JSON"),
            Encoding::Yaml => f.write_str("YAML"),
        }
    }
}
