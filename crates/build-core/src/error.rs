use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported api version {0:?}")]
    UnsupportedApiVersion(String),
    #[error("unsupported Kind {0:?}")]
    UnsupportedKind(String),
    #[error("unknown source type {0:?}, expected \"Git\" or \"OCI\"")]
    UnknownSourceType(String),
    #[error("source of type {0} is missing its {1} section")]
    MissingSourcePayload(&'static str, &'static str),
    #[error("source of type {0} must not also declare {1}")]
    ConflictingSourcePayload(&'static str, &'static str),
    #[error("param value name must not be empty")]
    EmptyParamName,
    #[error("param value {0:?} sets both a single value and a list of values")]
    AmbiguousParamValue(String),
    #[error("build run must reference a Build by name or embed a Build spec")]
    MissingBuildReference,
    #[error("build run must not both reference a Build by name and embed a Build spec")]
    ConflictingBuildReference,
}
