use k8s_openapi::{api::core::v1::EnvVar, apimachinery::pkg::apis::meta::v1::Time};
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{BuildSpec, BuildVolume, Image, ParamValue};
use crate::{crds::common::Duration, error::Error};

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuildRef {
    pub name: String,
    pub api_version: Option<String>,
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ServiceAccount {
    pub name: Option<String>,
    pub generate: Option<bool>,
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
    version = "v1alpha1",
    kind = "BuildRun",
    plural = "buildruns",
    namespaced,
    schema = "disabled",
    status = "BuildRunStatus",
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct BuildRunSpec {
    /// Build spec embedded in the run. Takes precedence over `build_ref`.
    pub build_spec: Option<BuildSpec>,
    pub build_ref: Option<BuildRef>,
    pub service_account: Option<ServiceAccount>,
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
        if let Some(build_spec) = &self.build_spec {
            build_spec.validate()?;
        }
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
pub struct BundleSourceResult {
    #[serde(default)]
    pub digest: String,
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceResult {
    pub name: String,
    pub git: Option<GitSourceResult>,
    pub bundle: Option<BundleSourceResult>,
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
pub struct FailedAt {
    pub pod: Option<String>,
    pub container: Option<String>,
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FailureDetails {
    pub reason: Option<String>,
    pub message: Option<String>,
    pub location: Option<FailedAt>,
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
    pub latest_task_run_ref: Option<String>,
    pub start_time: Option<Time>,
    pub completion_time: Option<Time>,
    /// Snapshot of the Build spec the run was executed with.
    pub build_spec: Option<BuildSpec>,
    pub failure_details: Option<FailureDetails>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn buildrun_references_a_build_by_name() {
        let run: BuildRun = serde_json::from_value(json!({
            "apiVersion": "shipwright.io/v1alpha1",
            "kind": "BuildRun",
            "metadata": { "name": "buildkit-run" },
            "spec": {
                "buildRef": { "name": "buildkit-build" },
                "serviceAccount": { "generate": true },
                "state": "BuildRunCanceled"
            }
        }))
        .unwrap();

        assert_eq!(run.spec.build_spec, None);
        assert_eq!(
            run.spec.build_ref.map(|r| r.name),
            Some("buildkit-build".to_string())
        );
        assert_eq!(
            run.spec.service_account,
            Some(ServiceAccount {
                name: None,
                generate: Some(true),
            })
        );
        assert_eq!(run.spec.state, Some(BuildRunRequestedState::Canceled));
    }

    #[test]
    fn embedded_spec_params_are_validated() {
        let run: BuildRunSpec = serde_json::from_value(json!({
            "buildSpec": {
                "strategy": { "name": "buildkit" },
                "paramValues": [{ "name": "", "value": "unnamed" }]
            }
        }))
        .unwrap();

        assert_eq!(run.validate(), Err(Error::EmptyParamName));
    }

    #[test]
    fn status_keeps_condition_timestamps() {
        let status: BuildRunStatus = serde_json::from_value(json!({
            "conditions": [{
                "type": "Succeeded",
                "status": "False",
                "lastTransitionTime": "2023-05-04T10:00:00Z",
                "reason": "Failed",
                "message": "step-build failed"
            }],
            "failureDetails": {
                "reason": "Failed",
                "location": { "pod": "buildkit-run-pod", "container": "step-build" }
            },
            "latestTaskRunRef": "buildkit-run-xyz"
        }))
        .unwrap();

        assert_eq!(status.conditions.len(), 1);
        assert!(status.conditions[0].last_transition_time.is_some());
        assert_eq!(
            status
                .failure_details
                .and_then(|details| details.location)
                .and_then(|location| location.container),
            Some("step-build".to_string())
        );
        assert_eq!(status.latest_task_run_ref.as_deref(), Some("buildkit-run-xyz"));
    }
}
