use build_core::{v1alpha1, v1beta1};
use k8s_openapi::api::core::v1::Container;

use crate::fields::volumes;

pub fn into_v1beta1(strategy: v1alpha1::BuildStrategy) -> v1beta1::BuildStrategy {
    let spec = strategy.spec;
    let mut converted = v1beta1::BuildStrategy::new(
        "",
        v1beta1::BuildStrategySpec {
            steps: spec.build_steps.into_iter().map(step_into_v1beta1).collect(),
            parameters: spec
                .parameters
                .into_iter()
                .map(|parameter| v1beta1::Parameter {
                    name: parameter.name,
                    description: parameter.description,
                    r#type: parameter.r#type.map(|kind| match kind {
                        v1alpha1::ParameterType::String => v1beta1::ParameterType::String,
                        v1alpha1::ParameterType::Array => v1beta1::ParameterType::Array,
                    }),
                    default: parameter.default,
                    defaults: parameter.defaults,
                })
                .collect(),
            security_context: spec.security_context.map(|context| {
                v1beta1::BuildStrategySecurityContext {
                    run_as_user: context.run_as_user,
                    run_as_group: context.run_as_group,
                }
            }),
            volumes: volumes::strategy_into_v1beta1(spec.volumes),
        },
    );
    converted.metadata = strategy.metadata;
    converted
}

pub fn into_v1alpha1(strategy: v1beta1::BuildStrategy) -> v1alpha1::BuildStrategy {
    let spec = strategy.spec;
    let mut converted = v1alpha1::BuildStrategy::new(
        "",
        v1alpha1::BuildStrategySpec {
            build_steps: spec.steps.into_iter().map(step_into_v1alpha1).collect(),
            parameters: spec
                .parameters
                .into_iter()
                .map(|parameter| v1alpha1::Parameter {
                    name: parameter.name,
                    description: parameter.description,
                    r#type: parameter.r#type.map(|kind| match kind {
                        v1beta1::ParameterType::String => v1alpha1::ParameterType::String,
                        v1beta1::ParameterType::Array => v1alpha1::ParameterType::Array,
                    }),
                    default: parameter.default,
                    defaults: parameter.defaults,
                })
                .collect(),
            security_context: spec.security_context.map(|context| {
                v1alpha1::BuildStrategySecurityContext {
                    run_as_user: context.run_as_user,
                    run_as_group: context.run_as_group,
                }
            }),
            volumes: volumes::strategy_into_v1alpha1(spec.volumes),
        },
    );
    converted.metadata = strategy.metadata;
    converted
}

/// Container fields outside the step subset are dropped.
fn step_into_v1beta1(step: v1alpha1::BuildStep) -> v1beta1::Step {
    let container = step.container;
    v1beta1::Step {
        name: container.name,
        image: container.image,
        command: container.command,
        args: container.args,
        working_dir: container.working_dir,
        env: container.env,
        resources: container.resources,
        volume_mounts: container.volume_mounts,
        image_pull_policy: container.image_pull_policy,
        security_context: container.security_context,
    }
}

fn step_into_v1alpha1(step: v1beta1::Step) -> v1alpha1::BuildStep {
    v1alpha1::BuildStep {
        container: Container {
            name: step.name,
            image: step.image,
            command: step.command,
            args: step.args,
            working_dir: step.working_dir,
            env: step.env,
            resources: step.resources,
            volume_mounts: step.volume_mounts,
            image_pull_policy: step.image_pull_policy,
            security_context: step.security_context,
            ..Default::default()
        },
    }
}
