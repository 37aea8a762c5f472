use build_core::{
    v1alpha1::{self, LocalObjectReference},
    v1beta1,
};

/// The legacy source becomes a tagged union. A bundle container always
/// selects the OCI variant; the shared credentials land in the variant's own
/// secret field.
pub fn into_v1beta1(source: v1alpha1::Source) -> Option<v1beta1::Source> {
    if source.is_empty() {
        return None;
    }

    let secret = source
        .credentials
        .map(|credentials| credentials.name)
        .filter(|name| !name.is_empty());

    let origin = match source.origin {
        v1alpha1::SourceOrigin::Bundle(bundle) => {
            v1beta1::SourceOrigin::OciArtifact(v1beta1::OciArtifact {
                image: bundle.image,
                prune: bundle.prune.map(prune_into_v1beta1),
                pull_secret: secret,
            })
        }
        v1alpha1::SourceOrigin::Git { url, revision } => v1beta1::SourceOrigin::Git(v1beta1::Git {
            url,
            revision,
            clone_secret: secret,
        }),
    };

    Some(v1beta1::Source {
        context_dir: source.context_dir,
        origin,
    })
}

/// Collapses the variant specific secret back into the shared credentials
/// slot. `context_dir` is copied whatever the variant.
pub fn into_v1alpha1(source: Option<v1beta1::Source>) -> v1alpha1::Source {
    let Some(source) = source else {
        return v1alpha1::Source::default();
    };

    let (origin, secret) = match source.origin {
        v1beta1::SourceOrigin::OciArtifact(artifact) => (
            v1alpha1::SourceOrigin::Bundle(v1alpha1::BundleContainer {
                image: artifact.image,
                prune: artifact.prune.map(prune_into_v1alpha1),
            }),
            artifact.pull_secret,
        ),
        v1beta1::SourceOrigin::Git(git) => (
            v1alpha1::SourceOrigin::Git {
                url: git.url,
                revision: git.revision,
            },
            git.clone_secret,
        ),
    };

    v1alpha1::Source {
        origin,
        context_dir: source.context_dir,
        credentials: secret
            .filter(|name| !name.is_empty())
            .map(LocalObjectReference::new),
    }
}

fn prune_into_v1beta1(prune: v1alpha1::PruneOption) -> v1beta1::PruneOption {
    match prune {
        v1alpha1::PruneOption::Never => v1beta1::PruneOption::Never,
        v1alpha1::PruneOption::AfterPull => v1beta1::PruneOption::AfterPull,
    }
}

fn prune_into_v1alpha1(prune: v1beta1::PruneOption) -> v1alpha1::PruneOption {
    match prune {
        v1beta1::PruneOption::Never => v1alpha1::PruneOption::Never,
        v1beta1::PruneOption::AfterPull => v1alpha1::PruneOption::AfterPull,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oci_source() -> v1beta1::Source {
        v1beta1::Source {
            context_dir: Some("docker-build".to_string()),
            origin: v1beta1::SourceOrigin::OciArtifact(v1beta1::OciArtifact {
                image: "dockerhub/foobar/hello".to_string(),
                prune: Some(v1beta1::PruneOption::AfterPull),
                pull_secret: Some("foobar".to_string()),
            }),
        }
    }

    #[test]
    fn oci_pull_secret_becomes_the_shared_credentials() {
        let source = into_v1alpha1(Some(oci_source()));

        assert_eq!(
            source.bundle_container(),
            Some(&v1alpha1::BundleContainer {
                image: "dockerhub/foobar/hello".to_string(),
                prune: Some(v1alpha1::PruneOption::AfterPull),
            })
        );
        assert_eq!(source.credentials, Some(LocalObjectReference::new("foobar")));
        assert_eq!(source.context_dir.as_deref(), Some("docker-build"));
        assert_eq!(source.revision(), None);
    }

    #[test]
    fn git_clone_secret_becomes_the_shared_credentials() {
        let source = into_v1alpha1(Some(v1beta1::Source::git(v1beta1::Git {
            url: Some("https://github.com/shipwright-io/sample-go".to_string()),
            revision: Some("main".to_string()),
            clone_secret: Some("git-auth".to_string()),
        })));

        assert_eq!(source.url(), Some("https://github.com/shipwright-io/sample-go"));
        assert_eq!(source.revision(), Some("main"));
        assert_eq!(source.credentials, Some(LocalObjectReference::new("git-auth")));
    }

    #[test]
    fn oci_artifact_without_pull_secret_has_no_credentials() {
        let mut source = oci_source();
        if let v1beta1::SourceOrigin::OciArtifact(artifact) = &mut source.origin {
            artifact.pull_secret = None;
        }

        assert_eq!(into_v1alpha1(Some(source)).credentials, None);
    }

    #[test]
    fn bundle_credentials_become_the_pull_secret() {
        let mut source = v1alpha1::Source::bundle(v1alpha1::BundleContainer {
            image: "dockerhub/foobar/hello".to_string(),
            prune: Some(v1alpha1::PruneOption::Never),
        });
        source.credentials = Some(LocalObjectReference::new("foobar"));

        let converted = into_v1beta1(source).unwrap();
        assert_eq!(converted.source_type(), v1beta1::SourceType::OciArtifact);
        assert_eq!(
            converted.origin,
            v1beta1::SourceOrigin::OciArtifact(v1beta1::OciArtifact {
                image: "dockerhub/foobar/hello".to_string(),
                prune: Some(v1beta1::PruneOption::Never),
                pull_secret: Some("foobar".to_string()),
            })
        );
    }

    #[test]
    fn bundle_without_credentials_has_no_pull_secret() {
        let source = v1alpha1::Source::bundle(v1alpha1::BundleContainer {
            image: "registry/bundle".to_string(),
            prune: None,
        });

        let converted = into_v1beta1(source).unwrap();
        assert_eq!(
            converted.origin,
            v1beta1::SourceOrigin::OciArtifact(v1beta1::OciArtifact {
                image: "registry/bundle".to_string(),
                prune: None,
                pull_secret: None,
            })
        );
    }

    #[test]
    fn empty_source_stays_absent() {
        assert_eq!(into_v1beta1(v1alpha1::Source::default()), None);
        assert!(into_v1alpha1(None).is_empty());
    }

    #[test]
    fn both_directions_round_trip() {
        assert_eq!(into_v1beta1(into_v1alpha1(Some(oci_source()))), Some(oci_source()));

        let mut git = v1alpha1::Source::git("https://github.com/shipwright-io/sample-go");
        git.context_dir = Some("source-build".to_string());
        git.credentials = Some(LocalObjectReference::new("git-auth"));
        assert_eq!(into_v1alpha1(into_v1beta1(git.clone())), git);
    }
}
