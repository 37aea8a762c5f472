use std::{fmt, str::FromStr};

use crate::error::Error;

pub const GROUP: &str = "shipwright.io";

/// The two schema generations served for every convertible kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    V1Alpha1,
    V1Beta1,
}

impl ApiVersion {
    pub const ALL: [ApiVersion; 2] = [ApiVersion::V1Alpha1, ApiVersion::V1Beta1];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1Alpha1 => "shipwright.io/v1alpha1",
            ApiVersion::V1Beta1 => "shipwright.io/v1beta1",
        }
    }

    pub const fn version(&self) -> &'static str {
        match self {
            ApiVersion::V1Alpha1 => "v1alpha1",
            ApiVersion::V1Beta1 => "v1beta1",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApiVersion::ALL
            .into_iter()
            .find(|version| version.as_str() == s)
            .ok_or_else(|| Error::UnsupportedApiVersion(s.to_owned()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Build,
    BuildRun,
    BuildStrategy,
    ClusterBuildStrategy,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Build,
        ResourceKind::BuildRun,
        ResourceKind::BuildStrategy,
        ResourceKind::ClusterBuildStrategy,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Build => "Build",
            ResourceKind::BuildRun => "BuildRun",
            ResourceKind::BuildStrategy => "BuildStrategy",
            ResourceKind::ClusterBuildStrategy => "ClusterBuildStrategy",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnsupportedKind(s.to_owned()))
    }
}
