use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::error::Error;

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectKeyRef {
    pub name: String,
    pub key: String,
    pub format: Option<String>,
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SingleValue {
    pub value: Option<String>,
    pub config_map_value: Option<ObjectKeyRef>,
    pub secret_value: Option<ObjectKeyRef>,
}

impl SingleValue {
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.config_map_value.is_none() && self.secret_value.is_none()
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParamValue {
    pub name: String,
    #[serde(flatten)]
    pub single_value: SingleValue,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<SingleValue>,
}

impl ParamValue {
    pub fn single(name: impl Into<String>, value: SingleValue) -> Self {
        Self {
            name: name.into(),
            single_value: value,
            values: Vec::new(),
        }
    }

    pub fn list(name: impl Into<String>, values: Vec<SingleValue>) -> Self {
        Self {
            name: name.into(),
            single_value: SingleValue::default(),
            values,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.name.is_empty() {
            return Err(Error::EmptyParamName);
        }
        if !self.single_value.is_empty() && !self.values.is_empty() {
            return Err(Error::AmbiguousParamValue(self.name.clone()));
        }
        Ok(())
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Array,
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub r#type: Option<ParameterType>,
    pub default: Option<String>,
    pub defaults: Option<Vec<String>>,
}
