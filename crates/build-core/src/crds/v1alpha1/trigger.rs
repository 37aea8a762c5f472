use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};

use crate::crds::common::LocalObjectReference;

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerType {
    GitHub,
    Image,
    Pipeline,
    ObjectRef,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GitHubEventName {
    PullRequest,
    Push,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WhenGitHub {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<GitHubEventName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct WhenImage {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct WhenObjectRef {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub selector: BTreeMap<String, String>,
}

/// One condition under which the Build is triggered.
#[serde_as]
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TriggerWhen {
    // Manifests in the wild carry `name:` with no value.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,
    pub r#type: TriggerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<WhenGitHub>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<WhenImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_ref: Option<WhenObjectRef>,
}

impl TriggerWhen {
    pub fn new(name: impl Into<String>, r#type: TriggerType) -> Self {
        Self {
            name: name.into(),
            r#type,
            github: None,
            image: None,
            object_ref: None,
        }
    }

    /// Branches this condition filters on for the given trigger type. Only
    /// GitHub webhooks carry branches today.
    pub fn branches(&self, r#type: TriggerType) -> &[String] {
        match (r#type, &self.github) {
            (TriggerType::GitHub, Some(github)) => &github.branches,
            _ => &[],
        }
    }
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub when: Vec<TriggerWhen>,
    pub secret_ref: Option<LocalObjectReference>,
}
