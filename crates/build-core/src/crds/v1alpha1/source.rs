use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use tracing::warn;

use crate::crds::common::LocalObjectReference;

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PruneOption {
    Never,
    AfterPull,
}

/// Container image that carries the source code as a bundle.
#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BundleContainer {
    pub image: String,
    pub prune: Option<PruneOption>,
}

/// Where the source code comes from. The wire format tells the two apart only
/// by which fields are set; decoding settles it once so that callers can match.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceOrigin {
    Git {
        url: Option<String>,
        revision: Option<String>,
    },
    Bundle(BundleContainer),
}

impl Default for SourceOrigin {
    fn default() -> Self {
        SourceOrigin::Git {
            url: None,
            revision: None,
        }
    }
}

/// Build source. `credentials` is shared by both origins: it is the clone
/// secret for Git and the pull secret for bundles.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(from = "SourceFields", into = "SourceFields")]
pub struct Source {
    pub origin: SourceOrigin,
    pub context_dir: Option<String>,
    pub credentials: Option<LocalObjectReference>,
}

impl Source {
    pub fn git(url: impl Into<String>) -> Self {
        Self {
            origin: SourceOrigin::Git {
                url: Some(url.into()),
                revision: None,
            },
            ..Default::default()
        }
    }

    pub fn bundle(bundle: BundleContainer) -> Self {
        Self {
            origin: SourceOrigin::Bundle(bundle),
            ..Default::default()
        }
    }

    /// True when nothing at all was declared, which is how a Build without a
    /// source looks on the wire.
    pub fn is_empty(&self) -> bool {
        self.origin == SourceOrigin::default()
            && self.context_dir.is_none()
            && self.credentials.is_none()
    }

    pub fn url(&self) -> Option<&str> {
        match &self.origin {
            SourceOrigin::Git { url, .. } => url.as_deref(),
            SourceOrigin::Bundle(_) => None,
        }
    }

    pub fn revision(&self) -> Option<&str> {
        match &self.origin {
            SourceOrigin::Git { revision, .. } => revision.as_deref(),
            SourceOrigin::Bundle(_) => None,
        }
    }

    pub fn bundle_container(&self) -> Option<&BundleContainer> {
        match &self.origin {
            SourceOrigin::Bundle(bundle) => Some(bundle),
            SourceOrigin::Git { .. } => None,
        }
    }
}

#[skip_serializing_none]
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct SourceFields {
    url: Option<String>,
    bundle_container: Option<BundleContainer>,
    revision: Option<String>,
    context_dir: Option<String>,
    credentials: Option<LocalObjectReference>,
}

impl From<SourceFields> for Source {
    fn from(fields: SourceFields) -> Self {
        let origin = match fields.bundle_container {
            Some(bundle) => {
                if fields.url.is_some() || fields.revision.is_some() {
                    warn!(
                        image = %bundle.image,
                        "⚠️ Source declares both a bundle container and a git url, keeping the bundle"
                    );
                }
                SourceOrigin::Bundle(bundle)
            }
            None => SourceOrigin::Git {
                url: fields.url,
                revision: fields.revision,
            },
        };

        Source {
            origin,
            context_dir: fields.context_dir,
            credentials: fields.credentials,
        }
    }
}

impl From<Source> for SourceFields {
    fn from(source: Source) -> Self {
        let (url, revision, bundle_container) = match source.origin {
            SourceOrigin::Git { url, revision } => (url, revision, None),
            SourceOrigin::Bundle(bundle) => (None, None, Some(bundle)),
        };

        SourceFields {
            url,
            bundle_container,
            revision,
            context_dir: source.context_dir,
            credentials: source.credentials,
        }
    }
}
