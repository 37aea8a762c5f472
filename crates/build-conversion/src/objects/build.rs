use build_core::{v1alpha1, v1beta1};
use tracing::debug;

use crate::fields::{output, params, retention, source, strategy, trigger, volumes};

pub fn into_v1beta1(build: v1alpha1::Build) -> v1beta1::Build {
    let mut converted = v1beta1::Build::new("", spec_into_v1beta1(build.spec));
    converted.metadata = build.metadata;
    converted.status = build.status.map(|status| v1beta1::BuildStatus {
        registered: status.registered,
        reason: status.reason,
        message: status.message,
    });
    converted
}

pub fn into_v1alpha1(build: v1beta1::Build) -> v1alpha1::Build {
    let mut converted = v1alpha1::Build::new("", spec_into_v1alpha1(build.spec));
    converted.metadata = build.metadata;
    converted.status = build.status.map(|status| v1alpha1::BuildStatus {
        registered: status.registered,
        reason: status.reason,
        message: status.message,
    });
    converted
}

pub fn spec_into_v1beta1(spec: v1alpha1::BuildSpec) -> v1beta1::BuildSpec {
    if spec.builder.is_some() || spec.dockerfile.is_some() {
        debug!(
            strategy = spec.strategy_name(),
            "dropping deprecated builder and dockerfile fields"
        );
    }

    v1beta1::BuildSpec {
        source: source::into_v1beta1(spec.source),
        trigger: spec.trigger.map(trigger::into_v1beta1),
        strategy: strategy::into_v1beta1(spec.strategy),
        param_values: params::list_into_v1beta1(spec.param_values),
        output: output::into_v1beta1(spec.output),
        timeout: spec.timeout,
        env: spec.env,
        retention: spec.retention.map(retention::build_into_v1beta1),
        volumes: volumes::build_into_v1beta1(spec.volumes),
    }
}

pub fn spec_into_v1alpha1(spec: v1beta1::BuildSpec) -> v1alpha1::BuildSpec {
    v1alpha1::BuildSpec {
        source: source::into_v1alpha1(spec.source),
        trigger: spec.trigger.map(trigger::into_v1alpha1),
        strategy: strategy::into_v1alpha1(spec.strategy),
        builder: None,
        dockerfile: None,
        param_values: params::list_into_v1alpha1(spec.param_values),
        output: output::into_v1alpha1(spec.output),
        timeout: spec.timeout,
        env: spec.env,
        retention: spec.retention.map(retention::build_into_v1alpha1),
        volumes: volumes::build_into_v1alpha1(spec.volumes),
    }
}
