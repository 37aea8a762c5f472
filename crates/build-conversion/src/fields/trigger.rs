use build_core::{
    v1alpha1::{self, LocalObjectReference},
    v1beta1,
};

pub fn into_v1beta1(trigger: v1alpha1::Trigger) -> v1beta1::Trigger {
    v1beta1::Trigger {
        when: trigger.when.into_iter().map(when_into_v1beta1).collect(),
        trigger_secret: trigger.secret_ref.map(|secret| secret.name),
    }
}

pub fn into_v1alpha1(trigger: v1beta1::Trigger) -> v1alpha1::Trigger {
    v1alpha1::Trigger {
        when: trigger.when.into_iter().map(when_into_v1alpha1).collect(),
        secret_ref: trigger.trigger_secret.map(LocalObjectReference::new),
    }
}

// The GitHub payload is always allocated, whatever the trigger type.
fn when_into_v1beta1(when: v1alpha1::TriggerWhen) -> v1beta1::TriggerWhen {
    let branches = when.branches(v1alpha1::TriggerType::GitHub).to_vec();
    let events = when
        .github
        .map(|github| github.events)
        .unwrap_or_default()
        .into_iter()
        .map(|event| match event {
            v1alpha1::GitHubEventName::PullRequest => v1beta1::GitHubEventName::PullRequest,
            v1alpha1::GitHubEventName::Push => v1beta1::GitHubEventName::Push,
        })
        .collect();

    v1beta1::TriggerWhen {
        name: when.name,
        r#type: match when.r#type {
            v1alpha1::TriggerType::GitHub => v1beta1::TriggerType::GitHub,
            v1alpha1::TriggerType::Image => v1beta1::TriggerType::Image,
            v1alpha1::TriggerType::Pipeline => v1beta1::TriggerType::Pipeline,
            v1alpha1::TriggerType::ObjectRef => v1beta1::TriggerType::ObjectRef,
        },
        github: Some(v1beta1::WhenGitHub { events, branches }),
        image: when.image.map(|image| v1beta1::WhenImage { names: image.names }),
        object_ref: when.object_ref.map(|object| v1beta1::WhenObjectRef {
            name: object.name,
            status: object.status,
            selector: object.selector,
        }),
    }
}

fn when_into_v1alpha1(when: v1beta1::TriggerWhen) -> v1alpha1::TriggerWhen {
    let branches = when.branches(v1beta1::TriggerType::GitHub).to_vec();
    let events = when
        .github
        .map(|github| github.events)
        .unwrap_or_default()
        .into_iter()
        .map(|event| match event {
            v1beta1::GitHubEventName::PullRequest => v1alpha1::GitHubEventName::PullRequest,
            v1beta1::GitHubEventName::Push => v1alpha1::GitHubEventName::Push,
        })
        .collect();

    v1alpha1::TriggerWhen {
        name: when.name,
        r#type: match when.r#type {
            v1beta1::TriggerType::GitHub => v1alpha1::TriggerType::GitHub,
            v1beta1::TriggerType::Image => v1alpha1::TriggerType::Image,
            v1beta1::TriggerType::Pipeline => v1alpha1::TriggerType::Pipeline,
            v1beta1::TriggerType::ObjectRef => v1alpha1::TriggerType::ObjectRef,
        },
        github: Some(v1alpha1::WhenGitHub { events, branches }),
        image: when.image.map(|image| v1alpha1::WhenImage { names: image.names }),
        object_ref: when.object_ref.map(|object| v1alpha1::WhenObjectRef {
            name: object.name,
            status: object.status,
            selector: object.selector,
        }),
    }
}
