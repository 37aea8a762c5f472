use serde::Deserialize;

/// What to do with an object whose content does not fit the typed schema.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DecodePolicy {
    /// Report the object as failed.
    #[default]
    Strict,
    /// Log the error and convert the object from its metadata alone.
    Lenient,
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConversionOptions {
    #[serde(default)]
    pub decode_policy: DecodePolicy,
}

impl ConversionOptions {
    pub fn lenient() -> Self {
        Self {
            decode_policy: DecodePolicy::Lenient,
        }
    }
}
