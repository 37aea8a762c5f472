use build_core::{ApiVersion, ResourceKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("object is missing the {0:?} field")]
    MissingField(&'static str),

    #[error("unsupported Kind {0:?}")]
    UnsupportedKind(String),

    #[error("unexpected conversion version from {0:?}")]
    UnexpectedSourceVersion(String),

    #[error("unexpected conversion version to {0:?}")]
    UnexpectedTargetVersion(String),

    #[error("failed to decode {version} {kind}: {source}")]
    Decode {
        kind: ResourceKind,
        version: ApiVersion,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {version} {kind}: {source}")]
    Invalid {
        kind: ResourceKind,
        version: ApiVersion,
        #[source]
        source: build_core::Error,
    },

    #[error("failed to encode {version} {kind}: {source}")]
    Encode {
        kind: ResourceKind,
        version: ApiVersion,
        #[source]
        source: serde_json::Error,
    },
}

impl ConversionError {
    /// Short machine-readable reason reported next to the message.
    pub fn reason(&self) -> &'static str {
        match self {
            ConversionError::MissingField(_) => "MissingField",
            ConversionError::UnsupportedKind(_) => "UnsupportedKind",
            ConversionError::UnexpectedSourceVersion(_)
            | ConversionError::UnexpectedTargetVersion(_) => "UnsupportedVersion",
            ConversionError::Decode { .. } => "DecodeFailed",
            ConversionError::Invalid { .. } => "Invalid",
            ConversionError::Encode { .. } => "EncodeFailed",
        }
    }
}
