use k8s_openapi::{api::core::v1::EnvVar, apimachinery::pkg::apis::meta::v1::Time};
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{BuildSpec, BuildVolume, Image, ParamValue};
use crate::{crds::common::Duration, error::Error};

/// Service account value that asks the controller to generate one per run.
pub const GENERATE_SERVICE_ACCOUNT: &str = ".generate";

/// Either an embedded Build spec or the name of an existing Build.
#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ReferencedBuild {
    pub spec: Option<BuildSpec>,
    pub name: Option<String>,
}

impl ReferencedBuild {
    /// Exactly one of `spec` and `name` has to be set.
    pub fn validate(&self) -> Result<(), Error> {
        match (&self.spec, &self.name) {
            (Some(spec), None) => spec.validate(),
            (None, Some(name)) if !name.is_empty() => Ok(()),
            (Some(_), Some(_)) => Err(Error::ConflictingBuildReference),
            (None, _) => Err(Error::MissingBuildReference),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildRunRequestedState {
    #[serde(rename = "BuildRunCanceled")]
    Canceled,
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildRunRetention {
    pub ttl_after_failed: Option<Duration>,
    pub ttl_after_succeeded: Option<Duration>,
}

#[skip_serializing_none]
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[kube(
    group = "shipwright.io",
    version = "v1beta1",
    kind = "BuildRun",
    plural = "buildruns",
    namespaced,
    schema = "disabled",
    status = "BuildRunStatus",
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct BuildRunSpec {
    #[serde(default)]
    pub build: ReferencedBuild,
    pub service_account: Option<String>,
    pub timeout: Option<Duration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub param_values: Vec<ParamValue>,
    pub output: Option<Image>,
    pub state: Option<BuildRunRequestedState>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<EnvVar>,
    pub retention: Option<BuildRunRetention>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<BuildVolume>,
}

impl BuildRunSpec {
    pub fn validate(&self) -> Result<(), Error> {
        self.build.validate()?;
        self.param_values.iter().try_for_each(ParamValue::validate)
    }
}

impl BuildRun {
    pub fn validate(&self) -> Result<(), Error> {
        self.spec.validate()
    }
}

// -----------------------------------------------------------------------------
// Status
// -----------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GitSourceResult {
    pub commit_sha: Option<String>,
    pub commit_author: Option<String>,
    pub branch_name: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct OciArtifactSourceResult {
    #[serde(default)]
    pub digest: String,
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SourceResult {
    pub name: String,
    pub git: Option<GitSourceResult>,
    pub oci_artifact: Option<OciArtifactSourceResult>,
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Output {
    pub digest: Option<String>,
    pub size: Option<i64>,
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub r#type: String,
    pub status: String,
    pub last_transition_time: Option<Time>,
    pub reason: Option<String>,
    pub message: Option<String>,
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub pod: Option<String>,
    pub container: Option<String>,
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FailureDetails {
    pub reason: Option<String>,
    pub message: Option<String>,
    pub location: Option<Location>,
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuildRunStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceResult>,
    pub output: Option<Output>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    pub task_run_name: Option<String>,
    pub start_time: Option<Time>,
    pub completion_time: Option<Time>,
    pub build_spec: Option<BuildSpec>,
    pub failure_details: Option<FailureDetails>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn referenced_build_accepts_a_name_or_an_embedded_spec() {
        let by_name: BuildRunSpec = serde_json::from_value(json!({
            "build": { "name": "buildkit-build" },
            "serviceAccount": GENERATE_SERVICE_ACCOUNT
        }))
        .unwrap();
        assert_eq!(by_name.build.name.as_deref(), Some("buildkit-build"));
        assert_eq!(by_name.build.spec, None);
        assert_eq!(by_name.service_account.as_deref(), Some(".generate"));

        let embedded: BuildRunSpec = serde_json::from_value(json!({
            "build": { "spec": { "strategy": { "name": "buildkit" } } }
        }))
        .unwrap();
        assert_eq!(
            embedded.build.spec.as_ref().map(BuildSpec::strategy_name),
            Some("buildkit")
        );
    }

    #[test]
    fn build_reference_needs_exactly_one_form() {
        let neither = ReferencedBuild::default();
        assert_eq!(neither.validate(), Err(Error::MissingBuildReference));

        let empty_name = ReferencedBuild {
            spec: None,
            name: Some(String::new()),
        };
        assert_eq!(empty_name.validate(), Err(Error::MissingBuildReference));

        let both = ReferencedBuild {
            spec: Some(BuildSpec::default()),
            name: Some("buildkit-build".to_string()),
        };
        assert_eq!(both.validate(), Err(Error::ConflictingBuildReference));

        let embedded = ReferencedBuild {
            spec: Some(BuildSpec {
                param_values: vec![ParamValue::single("", Default::default())],
                ..Default::default()
            }),
            name: None,
        };
        assert_eq!(embedded.validate(), Err(Error::EmptyParamName));
    }
}
