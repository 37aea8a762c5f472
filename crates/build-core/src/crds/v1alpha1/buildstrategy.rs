use k8s_openapi::api::core::v1::{Container, Volume};
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::Parameter;

/// A strategy step is a plain core/v1 container.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct BuildStep {
    pub container: Container,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildStrategySecurityContext {
    pub run_as_user: i64,
    pub run_as_group: i64,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct BuildStrategyVolume {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overridable: Option<bool>,
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
    kind = "BuildStrategy",
    plural = "buildstrategies",
    namespaced,
    schema = "disabled",
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct BuildStrategySpec {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub build_steps: Vec<BuildStep>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    pub security_context: Option<BuildStrategySecurityContext>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<BuildStrategyVolume>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn build_steps_decode_as_containers() {
        let strategy: BuildStrategy = serde_json::from_value(json!({
            "apiVersion": "shipwright.io/v1alpha1",
            "kind": "BuildStrategy",
            "metadata": { "name": "buildah" },
            "spec": {
                "buildSteps": [{
                    "name": "build-and-push",
                    "image": "quay.io/containers/buildah:v1.31.0",
                    "command": ["/bin/bash"],
                    "args": ["-c", "buildah bud ."],
                    "workingDir": "$(params.shp-source-root)"
                }],
                "securityContext": { "runAsUser": 1000, "runAsGroup": 1000 },
                "volumes": [{ "name": "buildah-images", "overridable": true, "emptyDir": {} }]
            }
        }))
        .unwrap();

        let step = &strategy.spec.build_steps[0].container;
        assert_eq!(step.name, "build-and-push");
        assert_eq!(step.args.as_deref().map(<[String]>::len), Some(2));
        assert_eq!(
            strategy.spec.security_context,
            Some(BuildStrategySecurityContext {
                run_as_user: 1000,
                run_as_group: 1000,
            })
        );
        assert_eq!(strategy.spec.volumes[0].overridable, Some(true));
        assert_eq!(strategy.spec.volumes[0].volume.name, "buildah-images");
    }
}
