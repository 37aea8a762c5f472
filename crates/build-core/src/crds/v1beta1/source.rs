use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::error::Error;

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PruneOption {
    Never,
    AfterPull,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceType {
    Git,
    OciArtifact,
}

impl SourceType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SourceType::Git => "Git",
            SourceType::OciArtifact => "OCI",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Git {
    pub url: Option<String>,
    pub revision: Option<String>,
    pub clone_secret: Option<String>,
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OciArtifact {
    pub image: String,
    pub prune: Option<PruneOption>,
    pub pull_secret: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceOrigin {
    Git(Git),
    OciArtifact(OciArtifact),
}

impl SourceOrigin {
    pub fn source_type(&self) -> SourceType {
        match self {
            SourceOrigin::Git(_) => SourceType::Git,
            SourceOrigin::OciArtifact(_) => SourceType::OciArtifact,
        }
    }
}

/// Build source, tagged on the wire by `type`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "SourceFields", into = "SourceFields")]
pub struct Source {
    pub context_dir: Option<String>,
    pub origin: SourceOrigin,
}

impl Source {
    pub fn git(git: Git) -> Self {
        Self {
            context_dir: None,
            origin: SourceOrigin::Git(git),
        }
    }

    pub fn oci_artifact(artifact: OciArtifact) -> Self {
        Self {
            context_dir: None,
            origin: SourceOrigin::OciArtifact(artifact),
        }
    }

    pub fn source_type(&self) -> SourceType {
        self.origin.source_type()
    }
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct SourceFields {
    r#type: Option<String>,
    context_dir: Option<String>,
    git: Option<Git>,
    oci_artifact: Option<OciArtifact>,
}

impl TryFrom<SourceFields> for Source {
    type Error = Error;

    fn try_from(fields: SourceFields) -> Result<Self, Self::Error> {
        let source_type = match fields.r#type.as_deref() {
            Some("Git") => SourceType::Git,
            Some("OCI") => SourceType::OciArtifact,
            None | Some("") if fields.git.is_none() && fields.oci_artifact.is_some() => {
                SourceType::OciArtifact
            }
            None | Some("") => SourceType::Git,
            Some(other) => return Err(Error::UnknownSourceType(other.to_owned())),
        };

        let origin = match (source_type, fields.git, fields.oci_artifact) {
            (SourceType::Git, git, None) => SourceOrigin::Git(git.unwrap_or_default()),
            (SourceType::Git, _, Some(_)) => {
                return Err(Error::ConflictingSourcePayload("Git", "ociArtifact"));
            }
            (SourceType::OciArtifact, None, Some(artifact)) => SourceOrigin::OciArtifact(artifact),
            (SourceType::OciArtifact, Some(_), _) => {
                return Err(Error::ConflictingSourcePayload("OCI", "git"));
            }
            (SourceType::OciArtifact, None, None) => {
                return Err(Error::MissingSourcePayload("OCI", "ociArtifact"));
            }
        };

        Ok(Source {
            context_dir: fields.context_dir,
            origin,
        })
    }
}

impl From<Source> for SourceFields {
    fn from(source: Source) -> Self {
        let r#type = Some(source.source_type().as_str().to_owned());
        let (git, oci_artifact) = match source.origin {
            SourceOrigin::Git(git) => (Some(git), None),
            SourceOrigin::OciArtifact(artifact) => (None, Some(artifact)),
        };

        SourceFields {
            r#type,
            context_dir: source.context_dir,
            git,
            oci_artifact,
        }
    }
}
