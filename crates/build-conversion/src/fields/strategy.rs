use build_core::{v1alpha1, v1beta1};

pub fn into_v1beta1(strategy: v1alpha1::Strategy) -> v1beta1::Strategy {
    v1beta1::Strategy {
        name: strategy.name,
        kind: strategy.kind.map(|kind| match kind {
            v1alpha1::BuildStrategyKind::BuildStrategy => v1beta1::BuildStrategyKind::BuildStrategy,
            v1alpha1::BuildStrategyKind::ClusterBuildStrategy => {
                v1beta1::BuildStrategyKind::ClusterBuildStrategy
            }
        }),
        api_version: strategy.api_version,
    }
}

pub fn into_v1alpha1(strategy: v1beta1::Strategy) -> v1alpha1::Strategy {
    v1alpha1::Strategy {
        name: strategy.name,
        kind: strategy.kind.map(|kind| match kind {
            v1beta1::BuildStrategyKind::BuildStrategy => v1alpha1::BuildStrategyKind::BuildStrategy,
            v1beta1::BuildStrategyKind::ClusterBuildStrategy => {
                v1alpha1::BuildStrategyKind::ClusterBuildStrategy
            }
        }),
        api_version: strategy.api_version,
    }
}
