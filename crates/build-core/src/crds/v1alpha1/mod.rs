//! Legacy `shipwright.io/v1alpha1` schema.

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
    BuildRef, BuildRun, BuildRunRequestedState, BuildRunRetention, BuildRunSpec, BuildRunStatus,
    BundleSourceResult, Condition, FailedAt, FailureDetails, GitSourceResult, Output,
    ServiceAccount, SourceResult,
};
pub use buildstrategy::{
    BuildStep, BuildStrategy, BuildStrategySecurityContext, BuildStrategySpec, BuildStrategyVolume,
};
pub use parameter::{ObjectKeyRef, ParamValue, Parameter, ParameterType, SingleValue};
pub use source::{BundleContainer, PruneOption, Source, SourceOrigin};
pub use trigger::{
    GitHubEventName, Trigger, TriggerType, TriggerWhen, WhenGitHub, WhenImage, WhenObjectRef,
};

pub use crate::crds::common::{Duration, LocalObjectReference};
