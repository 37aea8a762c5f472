//! Current `shipwright.io/v1beta1` schema.

mod build;
mod buildrun;
mod buildstrategy;
mod parameter;
mod source;
mod trigger;

pub use build::{
    Build, BuildRetention, BuildSpec, BuildStatus, BuildStrategyKind, BuildVolume, Image, Strategy,
};
pub use buildrun::{
    BuildRun, BuildRunRequestedState, BuildRunRetention, BuildRunSpec, BuildRunStatus, Condition,
    FailureDetails, GENERATE_SERVICE_ACCOUNT, GitSourceResult, Location, OciArtifactSourceResult,
    Output, ReferencedBuild, SourceResult,
};
pub use buildstrategy::{
    BuildStrategy, BuildStrategySecurityContext, BuildStrategySpec, BuildStrategyVolume, Step,
};
pub use parameter::{ObjectKeyRef, ParamValue, Parameter, ParameterType, SingleValue};
pub use source::{Git, OciArtifact, PruneOption, Source, SourceOrigin, SourceType};
pub use trigger::{
    GitHubEventName, Trigger, TriggerType, TriggerWhen, WhenGitHub, WhenImage, WhenObjectRef,
};

pub use crate::crds::common::Duration;
