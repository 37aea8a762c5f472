use build_core::{
    v1alpha1,
    v1beta1::{self, GENERATE_SERVICE_ACCOUNT},
};

use super::build;
use crate::fields::{output, params, retention, volumes};

pub fn into_v1beta1(run: v1alpha1::BuildRun) -> v1beta1::BuildRun {
    let mut converted = v1beta1::BuildRun::new("", spec_into_v1beta1(run.spec));
    converted.metadata = run.metadata;
    converted.status = run.status.map(status_into_v1beta1);
    converted
}

/// Status is only projected forward, a v1beta1 status is not carried back.
pub fn into_v1alpha1(run: v1beta1::BuildRun) -> v1alpha1::BuildRun {
    let mut converted = v1alpha1::BuildRun::new("", spec_into_v1alpha1(run.spec));
    converted.metadata = run.metadata;
    converted
}

pub fn spec_into_v1beta1(spec: v1alpha1::BuildRunSpec) -> v1beta1::BuildRunSpec {
    // An embedded spec wins over the reference.
    let build = match spec.build_spec {
        Some(embedded) => v1beta1::ReferencedBuild {
            spec: Some(build::spec_into_v1beta1(embedded)),
            name: None,
        },
        None => v1beta1::ReferencedBuild {
            spec: None,
            name: spec.build_ref.map(|build_ref| build_ref.name),
        },
    };

    let service_account = spec
        .service_account
        .and_then(|account| match (account.generate, account.name) {
            (Some(true), _) => Some(GENERATE_SERVICE_ACCOUNT.to_owned()),
            (_, name) => name,
        });

    v1beta1::BuildRunSpec {
        build,
        service_account,
        timeout: spec.timeout,
        param_values: params::list_into_v1beta1(spec.param_values),
        output: spec.output.map(output::into_v1beta1),
        state: spec.state.map(|state| match state {
            v1alpha1::BuildRunRequestedState::Canceled => {
                v1beta1::BuildRunRequestedState::Canceled
            }
        }),
        env: spec.env,
        retention: spec.retention.map(retention::buildrun_into_v1beta1),
        volumes: volumes::build_into_v1beta1(spec.volumes),
    }
}

pub fn spec_into_v1alpha1(spec: v1beta1::BuildRunSpec) -> v1alpha1::BuildRunSpec {
    let (build_spec, build_ref) = match spec.build.spec {
        Some(embedded) => (Some(build::spec_into_v1alpha1(embedded)), None),
        None => (
            None,
            spec.build.name.map(|name| v1alpha1::BuildRef {
                name,
                api_version: None,
            }),
        ),
    };

    let service_account = spec.service_account.map(|name| {
        if name == GENERATE_SERVICE_ACCOUNT {
            v1alpha1::ServiceAccount {
                name: None,
                generate: Some(true),
            }
        } else {
            v1alpha1::ServiceAccount {
                name: Some(name),
                generate: None,
            }
        }
    });

    v1alpha1::BuildRunSpec {
        build_spec,
        build_ref,
        service_account,
        timeout: spec.timeout,
        param_values: params::list_into_v1alpha1(spec.param_values),
        output: spec.output.map(output::into_v1alpha1),
        state: spec.state.map(|state| match state {
            v1beta1::BuildRunRequestedState::Canceled => {
                v1alpha1::BuildRunRequestedState::Canceled
            }
        }),
        env: spec.env,
        retention: spec.retention.map(retention::buildrun_into_v1alpha1),
        volumes: volumes::build_into_v1alpha1(spec.volumes),
    }
}

pub fn status_into_v1beta1(status: v1alpha1::BuildRunStatus) -> v1beta1::BuildRunStatus {
    v1beta1::BuildRunStatus {
        sources: status
            .sources
            .into_iter()
            .map(|source| v1beta1::SourceResult {
                name: source.name,
                git: source.git.map(|git| v1beta1::GitSourceResult {
                    commit_sha: git.commit_sha,
                    commit_author: git.commit_author,
                    branch_name: git.branch_name,
                }),
                oci_artifact: source
                    .bundle
                    .map(|bundle| v1beta1::OciArtifactSourceResult {
                        digest: bundle.digest,
                    }),
            })
            .collect(),
        output: status.output.map(|output| v1beta1::Output {
            digest: output.digest,
            size: output.size,
        }),
        conditions: status
            .conditions
            .into_iter()
            .map(|condition| v1beta1::Condition {
                r#type: condition.r#type,
                status: condition.status,
                last_transition_time: condition.last_transition_time,
                reason: condition.reason,
                message: condition.message,
            })
            .collect(),
        task_run_name: status.latest_task_run_ref,
        start_time: status.start_time,
        completion_time: status.completion_time,
        build_spec: status.build_spec.map(build::spec_into_v1beta1),
        failure_details: status
            .failure_details
            .map(|details| v1beta1::FailureDetails {
                reason: details.reason,
                message: details.message,
                location: details.location.map(|location| v1beta1::Location {
                    pod: location.pod,
                    container: location.container,
                }),
            }),
    }
}
