use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{EnvVar, Volume};
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{ParamValue, Source, Trigger};
use crate::{crds::common::{Duration, LocalObjectReference}, error::Error};

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildStrategyKind {
    BuildStrategy,
    ClusterBuildStrategy,
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    #[serde(default)]
    pub name: String,
    pub kind: Option<BuildStrategyKind>,
    pub api_version: Option<String>,
}

/// Image to push (or, for the legacy builder field, to build with).
#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub image: String,
    pub insecure: Option<bool>,
    pub credentials: Option<LocalObjectReference>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildRetention {
    pub failed_limit: Option<u32>,
    pub succeeded_limit: Option<u32>,
    pub ttl_after_failed: Option<Duration>,
    pub ttl_after_succeeded: Option<Duration>,
}

/// Volume that overrides one declared by the strategy.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct BuildVolume {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub volume: Volume,
}

#[skip_serializing_none]
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[kube(
    group = "shipwright.io",
    version = "v1alpha1",
    kind = "Build",
    plural = "builds",
    namespaced,
    schema = "disabled",
    status = "BuildStatus",
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct BuildSpec {
    #[serde(default, skip_serializing_if = "Source::is_empty")]
    pub source: Source,
    pub trigger: Option<Trigger>,
    #[serde(default)]
    pub strategy: Strategy,
    /// Deprecated, the v1beta1 API has no counterpart.
    pub builder: Option<Image>,
    /// Deprecated, the v1beta1 API has no counterpart.
    pub dockerfile: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub param_values: Vec<ParamValue>,
    #[serde(default)]
    pub output: Image,
    pub timeout: Option<Duration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<EnvVar>,
    pub retention: Option<BuildRetention>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<BuildVolume>,
}

impl BuildSpec {
    pub fn strategy_name(&self) -> &str {
        &self.strategy.name
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.param_values.iter().try_for_each(ParamValue::validate)
    }
}

impl Build {
    pub fn validate(&self) -> Result<(), Error> {
        self.spec.validate()
    }
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuildStatus {
    pub registered: Option<String>,
    pub reason: Option<String>,
    pub message: Option<String>,
}
